use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::browser::driver::BrowserDriver;
use crate::error::{OtoError, OtoResult};

const DRIVER_PATH: &str = "/selenium-server/driver/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

/// Client for a Selenium Remote Control server.
///
/// Every command is a form POST of `cmd`, positional arguments `1`, `2` and
/// the session id. The server answers in plain text: `OK`, `OK,<value>`, or
/// an error message.
pub struct SeleniumRc {
    client: Client,
    endpoint: String,
    browser: String,
    base_url: String,
    session_id: Option<String>,
}

impl SeleniumRc {
    pub fn new(server: &str, port: u16, browser: &str, base_url: &str) -> OtoResult<Self> {
        let endpoint = format!("http://{}:{}{}", server, port, DRIVER_PATH);
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| OtoError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        Ok(SeleniumRc {
            client,
            endpoint,
            browser: browser.to_string(),
            base_url: base_url.to_string(),
            session_id: None,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Send one command and return the value after `OK,`.
    pub fn command(&self, cmd: &str, args: &[&str]) -> OtoResult<String> {
        let form = command_form(cmd, args, self.session_id.as_deref());
        debug!("selenium <- {} {:?}", cmd, args);

        let body = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .and_then(|response| response.text())
            .map_err(|e| OtoError::Http {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        debug!("selenium -> {}", body);
        parse_reply(cmd, &body)
    }

    fn command_unit(&self, cmd: &str, args: &[&str]) -> OtoResult<()> {
        self.command(cmd, args).map(|_| ())
    }

    fn command_bool(&self, cmd: &str, args: &[&str]) -> OtoResult<bool> {
        let value = self.command(cmd, args)?;
        parse_bool(cmd, &value)
    }
}

/// Form fields for one command.
pub fn command_form(cmd: &str, args: &[&str], session_id: Option<&str>) -> Vec<(String, String)> {
    let mut form = vec![("cmd".to_string(), cmd.to_string())];
    for (i, arg) in args.iter().enumerate() {
        form.push(((i + 1).to_string(), arg.to_string()));
    }
    if let Some(id) = session_id {
        form.push(("sessionId".to_string(), id.to_string()));
    }
    form
}

/// Split a reply into its value, or turn it into an error.
pub fn parse_reply(cmd: &str, body: &str) -> OtoResult<String> {
    if body == "OK" {
        return Ok(String::new());
    }
    match body.strip_prefix("OK,") {
        Some(value) => Ok(value.to_string()),
        None => Err(OtoError::ServiceProtocol {
            command: cmd.to_string(),
            error: body.trim().to_string(),
        }),
    }
}

pub fn parse_bool(cmd: &str, value: &str) -> OtoResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(OtoError::ServiceProtocol {
            command: cmd.to_string(),
            error: format!("expected a boolean, got '{}'", other),
        }),
    }
}

impl BrowserDriver for SeleniumRc {
    fn start(&mut self) -> OtoResult<()> {
        let id = self.command(
            "getNewBrowserSession",
            &[self.browser.as_str(), self.base_url.as_str()],
        )?;
        if id.is_empty() {
            return Err(OtoError::ServiceProtocol {
                command: "getNewBrowserSession".into(),
                error: "no session id in reply".into(),
            });
        }
        self.session_id = Some(id);
        Ok(())
    }

    fn stop(&mut self) -> OtoResult<()> {
        if self.session_id.is_none() {
            return Ok(());
        }
        let result = self.command_unit("testComplete", &[]);
        self.session_id = None;
        result
    }

    fn open(&mut self, url: &str) -> OtoResult<()> {
        self.command_unit("open", &[url])
    }

    fn click(&mut self, locator: &str) -> OtoResult<()> {
        self.command_unit("click", &[locator])
    }

    fn type_text(&mut self, locator: &str, text: &str) -> OtoResult<()> {
        self.command_unit("type", &[locator, text])
    }

    fn check(&mut self, locator: &str) -> OtoResult<()> {
        self.command_unit("check", &[locator])
    }

    fn uncheck(&mut self, locator: &str) -> OtoResult<()> {
        self.command_unit("uncheck", &[locator])
    }

    fn select(&mut self, locator: &str, option_locator: &str) -> OtoResult<()> {
        self.command_unit("select", &[locator, option_locator])
    }

    fn get_text(&mut self, locator: &str) -> OtoResult<String> {
        self.command("getText", &[locator])
    }

    fn assign_id(&mut self, locator: &str, id: &str) -> OtoResult<()> {
        self.command_unit("assignId", &[locator, id])
    }

    fn highlight(&mut self, locator: &str) -> OtoResult<()> {
        self.command_unit("highlight", &[locator])
    }

    fn wait_for_page_to_load(&mut self, timeout_ms: u64) -> OtoResult<()> {
        let timeout = timeout_ms.to_string();
        self.command_unit("waitForPageToLoad", &[timeout.as_str()])
    }

    fn is_element_present(&mut self, locator: &str) -> OtoResult<bool> {
        self.command_bool("isElementPresent", &[locator])
    }

    fn window_focus(&mut self) -> OtoResult<()> {
        self.command_unit("windowFocus", &[])
    }

    fn window_maximize(&mut self) -> OtoResult<()> {
        self.command_unit("windowMaximize", &[])
    }
}
