use oto::OtoError;
use oto::locator::{Element, LocatorTemplate, elements, strategies};

static BY_ID: LocatorTemplate = LocatorTemplate::new("element with id={0}", "//*[@id='{0}']");

// =========================================================================
// LocatorTemplate rendering
// =========================================================================

#[test]
fn id_template_renders_locator_and_description() {
    let locator = BY_ID.render_locator(&["submitBtn"]).unwrap();
    let human = BY_ID.render_human_readable(&["submitBtn"]).unwrap();

    assert_eq!(locator, "//*[@id='submitBtn']");
    assert_eq!(human, "element with id=submitBtn");
}

#[test]
fn rendering_is_repeatable() {
    let args = ["Name", "Value"];
    let first = strategies::ROW_WITH_TWO_ELEMENTS.render_locator(&args).unwrap();
    let second = strategies::ROW_WITH_TWO_ELEMENTS.render_locator(&args).unwrap();
    assert_eq!(first, second);

    let first = strategies::ROW_WITH_TWO_ELEMENTS.render_human_readable(&args).unwrap();
    let second = strategies::ROW_WITH_TWO_ELEMENTS.render_human_readable(&args).unwrap();
    assert_eq!(first, second);
}

#[test]
fn repeated_placeholders_are_all_replaced() {
    let locator = strategies::TABLE_CELL.render_locator(&["Total"]).unwrap();
    assert_eq!(
        locator,
        "//*[self::tr]/*[self::td and (normalize-space(.)='Total' or normalize-space(.)='Total *' or contains(.,'Total'))]"
    );
    assert!(!locator.contains("{0}"));
}

#[test]
fn two_argument_template_keeps_positions_apart() {
    let human = strategies::ROW_WITH_TWO_ELEMENTS
        .render_human_readable(&["alpha", "beta"])
        .unwrap();
    assert_eq!(human, "table row containing 'alpha' and 'beta'");
}

#[test]
fn extra_arguments_are_ignored() {
    let locator = BY_ID.render_locator(&["a", "b", "c"]).unwrap();
    assert_eq!(locator, "//*[@id='a']");
}

#[test]
fn missing_argument_is_an_error() {
    let err = strategies::ROW_WITH_TWO_ELEMENTS
        .render_locator(&["only one"])
        .unwrap_err();
    match err {
        OtoError::MissingArgument { index, argc, .. } => {
            assert_eq!(index, 1);
            assert_eq!(argc, 1);
        }
        other => panic!("Expected MissingArgument, got {:?}", other),
    }
}

#[test]
fn missing_argument_in_human_readable_template_is_an_error() {
    static LOPSIDED: LocatorTemplate = LocatorTemplate::new("{0} beside {1}", "//*[@id='{0}']");

    assert!(LOPSIDED.render_locator(&["x"]).is_ok());
    assert!(matches!(
        LOPSIDED.render_human_readable(&["x"]),
        Err(OtoError::MissingArgument { index: 1, .. })
    ));
}

#[test]
fn non_placeholder_braces_are_copied_verbatim() {
    static BRACES: LocatorTemplate = LocatorTemplate::new("{x} {0} {", "css=a{color} {{0}}");

    assert_eq!(BRACES.render_locator(&["v"]).unwrap(), "css=a{color} {v}");
    assert_eq!(BRACES.render_human_readable(&["v"]).unwrap(), "{x} v {");
}

#[test]
fn values_are_not_escaped() {
    let locator = strategies::NAME.render_locator(&["it's"]).unwrap();
    assert_eq!(locator, "//*[normalize-space(@name)='it's']");
}

#[test]
fn placeholder_count_spans_both_templates() {
    assert_eq!(BY_ID.placeholder_count(), 1);
    assert_eq!(strategies::ROW_WITH_TWO_ELEMENTS.placeholder_count(), 2);
    assert_eq!(LocatorTemplate::new("plain", "//body").placeholder_count(), 0);
    assert_eq!(LocatorTemplate::new("{3}", "{0}").placeholder_count(), 4);
}

#[test]
fn placeholder_count_saturates_on_huge_index() {
    static HUGE: LocatorTemplate = LocatorTemplate::new("", "{18446744073709551615}");
    assert_eq!(HUGE.placeholder_count(), usize::MAX);
    assert!(HUGE.render_locator(&["a"]).is_err());
}

#[test]
fn numeric_arguments_render_with_display() {
    static NTH_ROW: LocatorTemplate = LocatorTemplate::new("row {0}", "//tr[{0}]");
    assert_eq!(NTH_ROW.render_locator(&[3]).unwrap(), "//tr[3]");
}

// =========================================================================
// Element
// =========================================================================

#[test]
fn templated_element_delegates_to_strategy() {
    let element = Element::templated(&BY_ID, ["submitBtn"]);

    assert_eq!(element.get_locator().unwrap(), "//*[@id='submitBtn']");
    assert_eq!(element.get_human_readable().unwrap(), "element with id=submitBtn");
    assert_eq!(
        element.to_string(),
        "locator: //*[@id='submitBtn'] (element with id=submitBtn)"
    );
}

#[test]
fn static_element_returns_fixed_strings() {
    let element = Element::fixed("link=Home", "the home link");

    assert_eq!(element.get_locator().unwrap(), "link=Home");
    assert_eq!(element.get_human_readable().unwrap(), "the home link");
    assert_eq!(element.to_string(), "locator: link=Home (the home link)");
}

#[test]
fn display_omits_empty_human_readable() {
    static BARE: LocatorTemplate = LocatorTemplate::new("", "//*[@id='{0}']");

    let templated = Element::templated(&BARE, ["main"]);
    assert_eq!(templated.to_string(), "locator: //*[@id='main']");

    let fixed = Element::fixed("//body", "");
    assert_eq!(fixed.to_string(), "locator: //body");
}

#[test]
fn display_reports_unrenderable_element() {
    let element = Element::templated(&strategies::ROW_WITH_TWO_ELEMENTS, ["lonely"]);

    assert!(element.get_locator().is_err());
    assert!(element.to_string().starts_with("locator: <unrenderable:"));
}

#[test]
fn display_reports_unrenderable_human_readable() {
    static LOPSIDED: LocatorTemplate = LocatorTemplate::new("{0} beside {1}", "//*[@id='{0}']");
    let element = Element::templated(&LOPSIDED, ["x"]);

    assert!(element.get_locator().is_ok());
    assert!(element.get_human_readable().is_err());
    assert!(element.to_string().starts_with("locator: <unrenderable:"));
}

#[test]
fn elements_share_one_strategy() {
    let ok = &*elements::OK_BUTTON;
    let cancel = &*elements::CANCEL_BUTTON;

    match (ok, cancel) {
        (
            Element::Templated { strategy: a, .. },
            Element::Templated { strategy: b, .. },
        ) => assert!(std::ptr::eq(*a, *b)),
        _ => panic!("Catalog buttons should be templated"),
    }
}

// =========================================================================
// Catalogs
// =========================================================================

#[test]
fn catalog_buttons_render_value_locators() {
    assert_eq!(elements::OK_BUTTON.get_locator().unwrap(), "//*[@value='OK']");
    assert_eq!(
        elements::SUBMIT_BUTTON.get_human_readable().unwrap(),
        "button=Submit"
    );
    assert_eq!(
        elements::CANCEL_BUTTON.to_string(),
        "locator: //*[@value='Cancel'] (button=Cancel)"
    );
}

#[test]
fn bookmarked_element_addresses_bookmark_id() {
    assert_eq!(
        elements::BOOKMARKED_ELEMENT.get_locator().unwrap(),
        "//*[normalize-space(@id)='otoBookmark']"
    );
}

#[test]
fn strategy_lookup_by_name() {
    let id = strategies::lookup("id").expect("id strategy");
    assert_eq!(id, &strategies::ID);
    assert!(strategies::lookup("no_such_strategy").is_none());
}

#[test]
fn every_strategy_renders_with_enough_arguments() {
    let args = ["a", "b"];
    for (name, strategy) in strategies::all() {
        let locator = strategy.render_locator(&args);
        assert!(locator.is_ok(), "strategy {} failed: {:?}", name, locator);
        assert!(strategy.placeholder_count() <= args.len(), "strategy {}", name);
        let locator = locator.unwrap();
        assert!(!locator.contains("{0}") && !locator.contains("{1}"), "strategy {}", name);
    }
}

#[test]
fn element_lookup_by_name() {
    let element = elements::lookup("submit_button").expect("submit_button");
    assert_eq!(element.get_locator().unwrap(), "//*[@value='Submit']");
    assert_eq!(elements::all().count(), 4);
    assert!(elements::lookup("missing").is_none());
}
