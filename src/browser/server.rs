use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::cli::config::SeleniumConfig;
use crate::error::{OtoError, OtoResult};

/// A selenium-server JAR we launched ourselves.
pub struct SeleniumServer {
    child: Option<Child>,
}

impl SeleniumServer {
    /// `java -jar <jar> -port <port> <options...>`
    pub fn command_line(config: &SeleniumConfig) -> Vec<String> {
        let mut line = vec![
            "java".to_string(),
            "-jar".to_string(),
            config.jar.clone(),
            "-port".to_string(),
            config.port.to_string(),
        ];
        line.extend(config.options.split_whitespace().map(str::to_string));
        line
    }

    /// Launch the server and give it time to come up.
    pub fn launch(config: &SeleniumConfig) -> OtoResult<Self> {
        let line = Self::command_line(config);
        info!("Executing selenium-server JAR: {}", line.join(" "));

        let child = Command::new(&line[0])
            .args(&line[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| OtoError::ServiceSpawn {
                program: line[0].clone(),
                source: e,
            })?;

        info!("selenium-server PID: {}", child.id());
        if config.startup_wait_secs > 0 {
            info!("Sleeping for {} seconds...", config.startup_wait_secs);
            thread::sleep(Duration::from_secs(config.startup_wait_secs));
        }

        Ok(SeleniumServer { child: Some(child) })
    }

    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Kill the server and reap it. Safe to call more than once.
    pub fn stop(&mut self) {
        let Some(mut child) = self.child.take() else {
            return;
        };
        info!("Stopping selenium-server (PID {})...", child.id());
        if let Err(e) = child.kill() {
            warn!("Could not kill selenium-server: {}", e);
        }
        if let Err(e) = child.wait() {
            warn!("selenium-server did not exit cleanly: {}", e);
        }
    }
}

impl Drop for SeleniumServer {
    fn drop(&mut self) {
        self.stop();
    }
}
