use oto::browser::BrowserDriver;
use oto::browser::base::{DEFAULT_TIMEOUT_MS, Oto};
use oto::browser::selenium::{SeleniumRc, command_form, parse_bool, parse_reply};
use oto::browser::server::SeleniumServer;
use oto::cli::config::SeleniumConfig;
use oto::locator::{Element, elements, strategies};
use oto::{OtoError, OtoResult};

// =========================================================================
// Recording driver
// =========================================================================

/// Records every call as "command|arg|arg".
#[derive(Default)]
struct RecordingDriver {
    calls: Vec<String>,
    present: bool,
    text: String,
    fail_stop: bool,
}

impl RecordingDriver {
    fn record(&mut self, call: &[&str]) {
        self.calls.push(call.join("|"));
    }
}

impl BrowserDriver for RecordingDriver {
    fn start(&mut self) -> OtoResult<()> {
        self.record(&["start"]);
        Ok(())
    }

    fn stop(&mut self) -> OtoResult<()> {
        self.record(&["stop"]);
        if self.fail_stop {
            return Err(OtoError::ServiceIo("connection refused".into()));
        }
        Ok(())
    }

    fn open(&mut self, url: &str) -> OtoResult<()> {
        self.record(&["open", url]);
        Ok(())
    }

    fn click(&mut self, locator: &str) -> OtoResult<()> {
        self.record(&["click", locator]);
        Ok(())
    }

    fn type_text(&mut self, locator: &str, text: &str) -> OtoResult<()> {
        self.record(&["type", locator, text]);
        Ok(())
    }

    fn check(&mut self, locator: &str) -> OtoResult<()> {
        self.record(&["check", locator]);
        Ok(())
    }

    fn uncheck(&mut self, locator: &str) -> OtoResult<()> {
        self.record(&["uncheck", locator]);
        Ok(())
    }

    fn select(&mut self, locator: &str, option_locator: &str) -> OtoResult<()> {
        self.record(&["select", locator, option_locator]);
        Ok(())
    }

    fn get_text(&mut self, locator: &str) -> OtoResult<String> {
        self.record(&["getText", locator]);
        Ok(self.text.clone())
    }

    fn assign_id(&mut self, locator: &str, id: &str) -> OtoResult<()> {
        self.record(&["assignId", locator, id]);
        Ok(())
    }

    fn highlight(&mut self, locator: &str) -> OtoResult<()> {
        self.record(&["highlight", locator]);
        Ok(())
    }

    fn wait_for_page_to_load(&mut self, timeout_ms: u64) -> OtoResult<()> {
        let timeout = timeout_ms.to_string();
        self.record(&["wait", timeout.as_str()]);
        Ok(())
    }

    fn is_element_present(&mut self, locator: &str) -> OtoResult<bool> {
        self.record(&["present", locator]);
        Ok(self.present)
    }

    fn window_focus(&mut self) -> OtoResult<()> {
        self.record(&["windowFocus"]);
        Ok(())
    }

    fn window_maximize(&mut self) -> OtoResult<()> {
        self.record(&["windowMaximize"]);
        Ok(())
    }
}

fn oto() -> Oto<RecordingDriver> {
    Oto::new(RecordingDriver::default(), "https://intranet.example.com/")
}

// =========================================================================
// Oto actions
// =========================================================================

#[test]
fn start_focuses_and_maximizes_window() {
    let mut oto = oto();
    oto.start().unwrap();
    assert_eq!(oto.driver().calls, vec!["start", "windowFocus", "windowMaximize"]);
}

#[test]
fn stop_swallows_driver_failure() {
    let mut oto = Oto::new(
        RecordingDriver {
            fail_stop: true,
            ..RecordingDriver::default()
        },
        "",
    );
    oto.stop();
    assert_eq!(oto.driver().calls, vec!["stop"]);
}

#[test]
fn go_base_opens_base_url() {
    let mut oto = oto();
    oto.go_base().unwrap();
    assert_eq!(oto.driver().calls, vec!["open|https://intranet.example.com/"]);
}

#[test]
fn click_highlights_then_clicks_rendered_locator() {
    let mut oto = oto();
    oto.click(&elements::OK_BUTTON).unwrap();
    assert_eq!(
        oto.driver().calls,
        vec!["highlight|//*[@value='OK']", "click|//*[@value='OK']"]
    );
}

#[test]
fn click_wait_waits_for_page_load() {
    let mut oto = oto();
    oto.click_wait(&elements::SUBMIT_BUTTON).unwrap();
    assert_eq!(
        oto.driver().calls.last().unwrap(),
        &format!("wait|{}", DEFAULT_TIMEOUT_MS)
    );
    assert_eq!(oto.driver().calls.len(), 3);
}

#[test]
fn check_and_uncheck_follow_flag() {
    let mut oto = oto();
    let terms = Element::templated(&strategies::CHECKBOX_NEXT_TO_TEXT, ["I agree"]);
    oto.check(&terms, true).unwrap();
    oto.check(&terms, false).unwrap();

    let calls = &oto.driver().calls;
    assert!(calls[1].starts_with("check|"));
    assert!(calls[3].starts_with("uncheck|"));
}

#[test]
fn select_passes_option_locator() {
    let mut oto = oto();
    let select = Element::templated(&strategies::NAME, ["country"]);
    let option = Element::fixed("label=Norway", "Norway");
    oto.select(&select, &option).unwrap();

    assert_eq!(
        oto.driver().calls[1],
        "select|//*[normalize-space(@name)='country']|label=Norway"
    );
}

#[test]
fn enter_text_types_into_rendered_locator() {
    let mut oto = oto();
    let field = Element::templated(&strategies::ID, ["username"]);
    oto.enter_text(&field, "alice").unwrap();

    assert_eq!(
        oto.driver().calls[1],
        "type|//*[normalize-space(@id)='username']|alice"
    );
}

#[test]
fn get_text_returns_driver_text() {
    let mut oto = Oto::new(
        RecordingDriver {
            text: "Welcome".into(),
            ..RecordingDriver::default()
        },
        "",
    );
    let banner = Element::templated(&strategies::CSS_CLASS, ["banner"]);
    assert_eq!(oto.get_text(&banner).unwrap(), "Welcome");
}

#[test]
fn bookmark_assigns_bookmark_id() {
    let mut oto = oto();
    let cell = Element::templated(&strategies::TABLE_CELL, ["Total"]);
    oto.bookmark_element(&cell).unwrap();

    let last = oto.driver().calls.last().unwrap();
    assert!(last.starts_with("assignId|"));
    assert!(last.ends_with("|otoBookmark"));
}

#[test]
fn is_element_present_does_not_highlight() {
    let mut oto = Oto::new(
        RecordingDriver {
            present: true,
            ..RecordingDriver::default()
        },
        "",
    );
    assert!(oto.is_element_present(&elements::BOOKMARKED_ELEMENT).unwrap());
    assert_eq!(
        oto.driver().calls,
        vec!["present|//*[normalize-space(@id)='otoBookmark']"]
    );
}

#[test]
fn unrenderable_element_fails_before_driver_call() {
    let mut oto = oto();
    let broken = Element::templated(&strategies::ROW_WITH_TWO_ELEMENTS, ["only"]);

    assert!(matches!(
        oto.click(&broken),
        Err(OtoError::MissingArgument { .. })
    ));
    assert!(oto.driver().calls.is_empty());
}

// =========================================================================
// Selenium RC wire format
// =========================================================================

#[test]
fn command_form_numbers_arguments_from_one() {
    let form = command_form("type", &["id=q", "rust"], Some("abc123"));
    let pairs: Vec<(&str, &str)> = form.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            ("cmd", "type"),
            ("1", "id=q"),
            ("2", "rust"),
            ("sessionId", "abc123"),
        ]
    );
}

#[test]
fn command_form_without_session() {
    let form = command_form("getNewBrowserSession", &["*firefox", "http://x/"], None);
    assert!(form.iter().all(|(k, _)| k != "sessionId"));
    assert_eq!(form.len(), 3);
}

#[test]
fn reply_values_are_split_after_ok() {
    assert_eq!(parse_reply("open", "OK").unwrap(), "");
    assert_eq!(parse_reply("getText", "OK,Hello, world").unwrap(), "Hello, world");
}

#[test]
fn non_ok_reply_is_protocol_error() {
    match parse_reply("click", "ERROR: Element //x not found\n") {
        Err(OtoError::ServiceProtocol { command, error }) => {
            assert_eq!(command, "click");
            assert_eq!(error, "ERROR: Element //x not found");
        }
        other => panic!("Expected ServiceProtocol, got {:?}", other),
    }
}

#[test]
fn boolean_replies() {
    assert!(parse_bool("isElementPresent", "true").unwrap());
    assert!(!parse_bool("isElementPresent", "false").unwrap());
    assert!(parse_bool("isElementPresent", "maybe").is_err());
}

#[test]
fn selenium_endpoint_points_at_driver_path() {
    let rc = SeleniumRc::new("grid.local", 4444, "*firefox", "http://x/").unwrap();
    assert_eq!(rc.endpoint(), "http://grid.local:4444/selenium-server/driver/");
    assert_eq!(rc.session_id(), None);
}

#[test]
fn stop_without_session_is_a_no_op() {
    let mut rc = SeleniumRc::new("127.0.0.1", 9, "*firefox", "http://x/").unwrap();
    assert!(rc.stop().is_ok());
}

// =========================================================================
// selenium-server process
// =========================================================================

#[test]
fn server_command_line_includes_port_and_options() {
    let config = SeleniumConfig {
        jar: "/opt/selenium.jar".into(),
        port: 5555,
        options: "-trustAllSSLCertificates  -timeout 120".into(),
        ..SeleniumConfig::default()
    };
    assert_eq!(
        SeleniumServer::command_line(&config),
        vec![
            "java",
            "-jar",
            "/opt/selenium.jar",
            "-port",
            "5555",
            "-trustAllSSLCertificates",
            "-timeout",
            "120",
        ]
    );
}
