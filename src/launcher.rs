/// Owned handle on a game subprocess.
///
/// The launcher starts the game, polls or waits for it, and can stop it.
/// Standard error is captured on a helper thread so a chatty child never
/// blocks on a full pipe; the text becomes the failure message.  Dropping a
/// `GameProcess` does not stop the game.
///
/// The game's stdin is closed.  A game left without a landmark file then sees
/// an empty feed and exits with an error, instead of reading the launcher's
/// raw-mode terminal.  Keys still reach it through the controlling tty.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LaunchStatus {
    Running,
    Succeeded,
    Failed(String),
}

impl LaunchStatus {
    /// One-line text for a status display.  Multi-line failure output is cut
    /// down to its last non-blank line.
    pub fn message(&self) -> String {
        match self {
            LaunchStatus::Running => "Game is running...".to_string(),
            LaunchStatus::Succeeded => "Game finished successfully.".to_string(),
            LaunchStatus::Failed(reason) => {
                let last = reason
                    .lines()
                    .rev()
                    .find(|line| !line.trim().is_empty())
                    .unwrap_or("")
                    .trim();
                format!("Game failed: {last}")
            }
        }
    }
}

pub struct GameProcess {
    child: Child,
    stderr: Option<JoinHandle<String>>,
    /// Set once the child has been reaped.
    finished: Option<LaunchStatus>,
    stopped: bool,
}

impl GameProcess {
    /// Spawn `command` with stdin closed and stderr captured.  Stdout is
    /// inherited.
    pub fn start(mut command: Command) -> std::io::Result<Self> {
        command.stdin(Stdio::null()).stderr(Stdio::piped());
        let mut child = command.spawn()?;
        info!(pid = child.id(), "game started");

        let stderr = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut bytes = Vec::new();
                let _ = pipe.read_to_end(&mut bytes);
                String::from_utf8_lossy(&bytes).into_owned()
            })
        });

        Ok(Self {
            child,
            stderr,
            finished: None,
            stopped: false,
        })
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Non-blocking status check.
    pub fn poll(&mut self) -> std::io::Result<LaunchStatus> {
        if let Some(status) = &self.finished {
            return Ok(status.clone());
        }
        match self.child.try_wait()? {
            Some(exit) => Ok(self.finish(exit)),
            None => Ok(LaunchStatus::Running),
        }
    }

    /// Block until the game exits.
    pub fn wait(&mut self) -> std::io::Result<LaunchStatus> {
        if let Some(status) = &self.finished {
            return Ok(status.clone());
        }
        let exit = self.child.wait()?;
        Ok(self.finish(exit))
    }

    /// Kill the game if it is still running and reap it.
    pub fn terminate(&mut self) -> std::io::Result<LaunchStatus> {
        if self.finished.is_none() {
            self.stopped = true;
            // Already-exited children report InvalidInput; wait() below settles either way.
            let _ = self.child.kill();
        }
        self.wait()
    }

    fn finish(&mut self, exit: ExitStatus) -> LaunchStatus {
        let captured = self
            .stderr
            .take()
            .and_then(|handle| handle.join().ok())
            .unwrap_or_default();
        let captured = captured.trim();

        let status = if exit.success() {
            LaunchStatus::Succeeded
        } else if self.stopped {
            LaunchStatus::Failed("stopped by launcher".to_string())
        } else if captured.is_empty() {
            LaunchStatus::Failed(format!("game exited with {exit} and no error output"))
        } else {
            LaunchStatus::Failed(captured.to_string())
        };

        info!(pid = self.child.id(), %exit, "game exited");
        self.finished = Some(status.clone());
        status
    }
}
