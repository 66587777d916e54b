use std::process::Stdio;

use tokio::process::Command;
use tokio::task::JoinHandle;

use crate::config::AudioConfig;

/// Plays pronunciation clips through an external player.
///
/// Playback is fire-and-forget: failures are logged at debug level and
/// never reach the page.
#[derive(Debug, Clone)]
pub struct AudioPlayer {
    program: String,
    args: Vec<String>,
}

impl AudioPlayer {
    pub fn new(config: &AudioConfig) -> Self {
        Self {
            program: config.player.clone(),
            args: config.args.clone(),
        }
    }

    pub fn play(&self, url: &str) -> JoinHandle<()> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(false);
        let url = url.to_owned();
        tokio::spawn(async move {
            match command.status().await {
                Ok(status) if status.success() => tracing::debug!(%url, "played audio"),
                Ok(status) => tracing::debug!(%url, %status, "audio player exited with failure"),
                Err(error) => tracing::debug!(%url, %error, "could not start audio player"),
            }
        })
    }
}
