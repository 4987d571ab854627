use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::desktop::tree::{AccessibilityTree, MouseButton, NodeFilter, NodeId, NodeState};
use crate::error::{OtoError, OtoResult};

/// Request sent to the bridge over stdin (one JSON line).
#[derive(Debug, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum BridgeRequest<'a> {
    Application { name: &'a str },
    FindChild { node: NodeId, filter: &'a NodeFilter },
    FindAll { node: NodeId, filter: &'a NodeFilter },
    Children { node: NodeId, recursive: bool },
    State { node: NodeId },
    GrabFocus { node: NodeId },
    Blink { node: NodeId },
    Click { node: NodeId, button: u8 },
    DoubleClick { node: NodeId, button: u8 },
    Text { node: NodeId },
    SetText { node: NodeId, text: &'a str },
    Quit,
}

impl BridgeRequest<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            BridgeRequest::Application { .. } => "application",
            BridgeRequest::FindChild { .. } => "find_child",
            BridgeRequest::FindAll { .. } => "find_all",
            BridgeRequest::Children { .. } => "children",
            BridgeRequest::State { .. } => "state",
            BridgeRequest::GrabFocus { .. } => "grab_focus",
            BridgeRequest::Blink { .. } => "blink",
            BridgeRequest::Click { .. } => "click",
            BridgeRequest::DoubleClick { .. } => "double_click",
            BridgeRequest::Text { .. } => "text",
            BridgeRequest::SetText { .. } => "set_text",
            BridgeRequest::Quit => "quit",
        }
    }
}

/// Response read from the bridge over stdout (one JSON line).
#[derive(Debug, Default, Deserialize)]
pub struct BridgeResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub ready: Option<bool>,
    #[serde(default)]
    pub found: Option<bool>,
    #[serde(default)]
    pub node: Option<NodeId>,
    #[serde(default)]
    pub nodes: Option<Vec<NodeId>>,
    #[serde(default)]
    pub showing: Option<bool>,
    #[serde(default)]
    pub focused: Option<bool>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Accessibility tree served by a long-lived helper process.
///
/// The helper owns the real accessibility connection (AT-SPI, UIA, ...).
/// Commands go out as NDJSON on its stdin, replies come back on its stdout,
/// and the first line it prints must be `{"ok":true,"ready":true}`.
pub struct BridgeTree {
    child: Option<Child>,
    writer: Box<dyn Write + Send>,
    reader: Box<dyn BufRead + Send>,
    ready: bool,
}

impl BridgeTree {
    /// Spawn the bridge from a command line such as `["python3", "a11y_bridge.py"]`.
    pub fn launch(command: &[String]) -> OtoResult<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| OtoError::Config("accessibility bridge command is empty".into()))?;

        info!("Starting accessibility bridge: {}", command.join(" "));
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| OtoError::ServiceSpawn {
                program: program.clone(),
                source: e,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| OtoError::ServiceIo("failed to capture bridge stdin".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| OtoError::ServiceIo("failed to capture bridge stdout".into()))?;

        let mut bridge = match Self::from_io(BufReader::new(stdout), stdin) {
            Ok(bridge) => bridge,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        };
        bridge.child = Some(child);
        Ok(bridge)
    }

    /// Speak the bridge protocol over arbitrary streams. Waits for the ready line.
    pub fn from_io(
        reader: impl BufRead + Send + 'static,
        writer: impl Write + Send + 'static,
    ) -> OtoResult<Self> {
        let mut bridge = BridgeTree {
            child: None,
            writer: Box::new(writer),
            reader: Box::new(reader),
            ready: false,
        };

        let response = bridge.read_response("ready signal")?;
        if !response.ok || response.ready != Some(true) {
            return Err(OtoError::ServiceProtocol {
                command: "launch".into(),
                error: "did not receive ready signal from accessibility bridge".into(),
            });
        }
        bridge.ready = true;
        Ok(bridge)
    }

    fn read_response(&mut self, context: &str) -> OtoResult<BridgeResponse> {
        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .map_err(|e| OtoError::ServiceIo(format!("failed to read {}: {}", context, e)))?;

        if line.trim().is_empty() {
            return Err(OtoError::ServiceIo(format!(
                "empty {} from accessibility bridge (process may have died)",
                context
            )));
        }

        serde_json::from_str(line.trim()).map_err(|e| OtoError::JsonParse {
            context: format!("accessibility bridge {}", context),
            source: e,
        })
    }

    fn send(&mut self, request: &BridgeRequest<'_>) -> OtoResult<BridgeResponse> {
        let json = serde_json::to_string(request).map_err(|e| OtoError::JsonSerialize {
            context: "BridgeRequest".into(),
            source: e,
        })?;
        debug!("bridge <- {}", json);

        writeln!(self.writer, "{}", json)
            .and_then(|_| self.writer.flush())
            .map_err(|e| OtoError::ServiceIo(format!("failed to write to bridge: {}", e)))?;

        self.read_response("response")
    }

    /// Send a request and verify it succeeded.
    fn send_ok(&mut self, request: &BridgeRequest<'_>) -> OtoResult<BridgeResponse> {
        let response = self.send(request)?;
        if !response.ok {
            return Err(OtoError::ServiceProtocol {
                command: request.name().into(),
                error: response.error.unwrap_or_else(|| "unknown error".into()),
            });
        }
        Ok(response)
    }

    fn missing(command: &str, field: &str) -> OtoError {
        OtoError::ServiceProtocol {
            command: command.into(),
            error: format!("no '{}' in response", field),
        }
    }

    fn send_unit(&mut self, request: &BridgeRequest<'_>) -> OtoResult<()> {
        self.send_ok(request).map(|_| ())
    }

    /// Ask the bridge to exit and reap it.
    pub fn quit(&mut self) {
        // best effort, the bridge may already be gone
        if std::mem::take(&mut self.ready) {
            let _ = self.send(&BridgeRequest::Quit);
        }
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.wait() {
                warn!("accessibility bridge did not exit cleanly: {}", e);
            }
        }
    }
}

impl AccessibilityTree for BridgeTree {
    fn application(&mut self, name: &str) -> OtoResult<NodeId> {
        let response = self.send_ok(&BridgeRequest::Application { name })?;
        match (response.found, response.node) {
            (Some(false), _) | (None, None) => Err(OtoError::NotFound {
                role: "application".into(),
                name: name.into(),
            }),
            (_, Some(node)) => Ok(node),
            (Some(true), None) => Err(Self::missing("application", "node")),
        }
    }

    fn find_child(&mut self, parent: NodeId, filter: &NodeFilter) -> OtoResult<Option<NodeId>> {
        let response = self.send_ok(&BridgeRequest::FindChild {
            node: parent,
            filter,
        })?;
        match (response.found, response.node) {
            (Some(false), _) | (None, None) => Ok(None),
            (_, Some(node)) => Ok(Some(node)),
            (Some(true), None) => Err(Self::missing("find_child", "node")),
        }
    }

    fn find_all(&mut self, parent: NodeId, filter: &NodeFilter) -> OtoResult<Vec<NodeId>> {
        let response = self.send_ok(&BridgeRequest::FindAll {
            node: parent,
            filter,
        })?;
        Ok(response.nodes.unwrap_or_default())
    }

    fn children(&mut self, node: NodeId, recursive: bool) -> OtoResult<Vec<NodeId>> {
        let response = self.send_ok(&BridgeRequest::Children { node, recursive })?;
        Ok(response.nodes.unwrap_or_default())
    }

    fn state(&mut self, node: NodeId) -> OtoResult<NodeState> {
        let response = self.send_ok(&BridgeRequest::State { node })?;
        Ok(NodeState {
            showing: response.showing.ok_or_else(|| Self::missing("state", "showing"))?,
            focused: response.focused.ok_or_else(|| Self::missing("state", "focused"))?,
        })
    }

    fn grab_focus(&mut self, node: NodeId) -> OtoResult<()> {
        self.send_unit(&BridgeRequest::GrabFocus { node })
    }

    fn blink(&mut self, node: NodeId) -> OtoResult<()> {
        self.send_unit(&BridgeRequest::Blink { node })
    }

    fn click(&mut self, node: NodeId, button: MouseButton) -> OtoResult<()> {
        self.send_unit(&BridgeRequest::Click {
            node,
            button: button.number(),
        })
    }

    fn double_click(&mut self, node: NodeId, button: MouseButton) -> OtoResult<()> {
        self.send_unit(&BridgeRequest::DoubleClick {
            node,
            button: button.number(),
        })
    }

    fn text(&mut self, node: NodeId) -> OtoResult<String> {
        let response = self.send_ok(&BridgeRequest::Text { node })?;
        response.text.ok_or_else(|| Self::missing("text", "text"))
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> OtoResult<()> {
        self.send_unit(&BridgeRequest::SetText { node, text })
    }
}

impl Drop for BridgeTree {
    fn drop(&mut self) {
        self.quit();
    }
}
