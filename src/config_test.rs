use super::*;

#[test]
fn every_preset_parses() {
    for (name, _) in PRESETS {
        let config = SiteConfig::preset(name).unwrap();
        assert!(!config.sections.is_empty(), "{}", name);
        assert_eq!(config.messaging_host, "wa.me");
        assert_eq!(config.limits, Limits::default());
    }
}

#[test]
fn default_preset_exists() {
    assert!(SiteConfig::preset(DEFAULT_PRESET).is_ok());
}

#[test]
fn horizontal_preset_pages_sideways() {
    let config = SiteConfig::preset("horizontal").unwrap();
    assert_eq!(config.scroll_axis, ScrollAxis::Horizontal);
    assert_eq!(config.template, MessageTemplate::Markdown);
    assert!(!config.modals);
    assert_eq!(config.section_ids(), vec!["home", "services", "projects", "contact"]);
}

#[test]
fn modal_preset_fills_missing_timings() {
    let config = SiteConfig::preset("modal").unwrap();
    assert!(config.modals);
    assert_eq!(config.dispatch, DispatchPolicy::Auto);
    assert_eq!(config.timings.reenable_delay_ms, 3_000);
    assert_eq!(config.timings.initial_hash_delay_ms, Timings::default().initial_hash_delay_ms);
}

#[test]
fn unknown_preset_is_an_error() {
    assert!(matches!(
        SiteConfig::preset("fancy"),
        Err(ConfigError::UnknownPreset(name)) if name == "fancy"
    ));
}

#[test]
fn sections_are_required() {
    let raw = r#"{
        "site_name": "x",
        "messaging_host": "wa.me",
        "recipient_id": "1",
        "fallback_contact": "x@y.z",
        "template": "plain",
        "dispatch": "auto",
        "scroll_axis": "vertical",
        "sections": []
    }"#;
    assert!(matches!(SiteConfig::from_json(raw), Err(ConfigError::NoSections)));
}

#[test]
fn optional_fields_default() {
    let raw = r#"{
        "site_name": "x",
        "messaging_host": "wa.me",
        "recipient_id": "1",
        "fallback_contact": "x@y.z",
        "template": "markdown",
        "dispatch": "always-same-tab",
        "scroll_axis": "vertical",
        "sections": [{ "id": "home", "title": "Home" }]
    }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.limits, Limits::default());
    assert_eq!(config.timings, Timings::default());
    assert_eq!(config.header_offset, 0.0);
    assert!(!config.modals);
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SiteConfig::from_json("{"), Err(ConfigError::Parse(_))));
}
