pub mod assets;
pub mod audio;
pub mod compute;
pub mod config;
pub mod display;
pub mod draw;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod launcher;
pub mod logging;
pub mod orchestrator;
pub mod round;
pub mod tuning;
