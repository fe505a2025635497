//! Tests for oraclegen-core: settings space, overrides, parser config, passage serde, errors

use oraclegen_core::settings::SETTINGS;
use oraclegen_core::*;
use std::collections::HashSet;

// ===========================================================================
// Settings enumeration
// ===========================================================================

#[test]
fn enumerate_all_yields_six_of_eight() {
    let all: Vec<Settings> = Settings::enumerate_all().collect();
    assert_eq!(all.len(), 6);
    let names: Vec<String> = all.iter().map(|s| s.display_name()).collect();
    assert_eq!(
        names,
        vec![
            "default",
            "implicit",
            "linkage",
            "unlabeled",
            "implicit-linkage",
            "implicit-unlabeled",
        ]
    );
}

#[test]
fn enumerate_all_has_no_duplicates_or_conflicts() {
    let all: Vec<Settings> = Settings::enumerate_all().collect();
    let unique: HashSet<Settings> = all.iter().copied().collect();
    assert_eq!(unique.len(), all.len());
    for s in &all {
        assert!(!(s.is_enabled("linkage") && s.is_enabled("unlabeled")));
    }
}

#[test]
fn enumerate_all_covers_every_compatible_subset() {
    let all: HashSet<Settings> = Settings::enumerate_all().collect();
    for mask in 0u8..8 {
        let names: Vec<&str> = SETTINGS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << *i) != 0)
            .map(|(_, n)| *n)
            .collect();
        match Settings::new(&names) {
            Ok(s) => assert!(all.contains(&s), "missing {:?}", names),
            Err(Error::IncompatibleSettings { .. }) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
}

#[test]
fn enumerate_all_is_restartable() {
    let iter = Settings::enumerate_all();
    let first: Vec<Settings> = iter.clone().collect();
    let second: Vec<Settings> = iter.collect();
    assert_eq!(first, second);
}

// ===========================================================================
// Settings rendering
// ===========================================================================

#[test]
fn default_settings_render() {
    let s = Settings::default();
    assert_eq!(s.display_name(), "default");
    assert_eq!(s.suffix(), "");
    assert!(s.active_names().is_empty());
    assert_eq!(format!("{}", s), "default");
}

#[test]
fn implicit_linkage_render() {
    let s = Settings::new(["linkage", "implicit"]).unwrap();
    assert_eq!(s.active_names(), vec!["implicit", "linkage"]);
    assert_eq!(s.suffix(), "_implicit_linkage");
    assert_eq!(s.display_name(), "implicit-linkage");
}

#[test]
fn settings_from_str() {
    let s: Settings = "implicit, linkage".parse().unwrap();
    assert_eq!(s.suffix(), "_implicit_linkage");
    assert_eq!("default".parse::<Settings>().unwrap(), Settings::default());
    assert_eq!("".parse::<Settings>().unwrap(), Settings::default());
}

#[test]
fn incompatible_construction_is_rejected() {
    let err = Settings::new(["linkage", "unlabeled"]).unwrap_err();
    assert!(matches!(
        err,
        Error::IncompatibleSettings {
            first: "linkage",
            second: "unlabeled"
        }
    ));
    assert!("implicit,linkage,unlabeled".parse::<Settings>().is_err());
}

#[test]
fn unknown_setting_is_rejected() {
    let err = Settings::new(["remote"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown setting: remote");
}

// ===========================================================================
// Overrides
// ===========================================================================

#[test]
fn overrides_cover_every_flag() {
    let o = Settings::new(["implicit"]).unwrap().to_overrides();
    assert_eq!(o.len(), 3);
    assert_eq!(o["implicit"], SettingValue::Flag(true));
    assert_eq!(o["linkage"], SettingValue::Flag(false));
    assert_eq!(o["unlabeled"], SettingValue::Labels(None));
}

#[test]
fn unlabeled_override_is_empty_label_set() {
    let o = Settings::new(["unlabeled"]).unwrap().to_overrides();
    assert_eq!(o["unlabeled"], SettingValue::Labels(Some(Vec::new())));
}

#[test]
fn config_update_from_fixed_operating_point() {
    let mut config = ParserConfig::default();
    config
        .update(&Settings::new(["implicit", "linkage"]).unwrap().to_overrides())
        .unwrap();
    assert!(config.implicit);
    assert!(config.linkage);
    assert!(config.node_labels.is_none());
}

#[test]
fn step_limit_scales_with_passage() {
    let mut p = Passage::new("p", "1");
    p.terminals.push(Terminal::new("t1", "a"));
    p.nodes.push(Node::new("1").with_edge(Edge::new("A", "t1")));
    let config = ParserConfig::default();
    assert_eq!(config.step_limit(&p), 10 * 3 + 2);
}

// ===========================================================================
// Passage serde
// ===========================================================================

#[test]
fn passage_json_defaults() {
    let json = r#"{"id":"7","root":"1","terminals":[{"id":"t","text":"hi"}],"nodes":[{"id":"1","edges":[{"tag":"A","child":"t"}]}]}"#;
    let p: Passage = serde_json::from_str(json).unwrap();
    assert_eq!(p.format(), "ucca");
    assert!(!p.terminals[0].punct);
    assert!(!p.nodes[0].edges[0].remote);
    assert!(p.nodes[0].label.is_none());
    assert_eq!(p.to_string(), "[A hi]");
}

#[test]
fn linkage_tags() {
    assert!(Edge::new("LR", "x").is_linkage());
    assert!(Edge::new("LA", "x").is_linkage());
    assert!(!Edge::new("A", "x").is_linkage());
}

// ===========================================================================
// Errors
// ===========================================================================

#[test]
fn error_display() {
    assert_eq!(
        Error::StepLimitExceeded { limit: 9 }.to_string(),
        "step limit of 9 exceeded before the parser finished"
    );
    assert_eq!(
        Error::parse("a.xml", "bad").to_string(),
        "parse error in a.xml: bad"
    );
    assert_eq!(
        Error::missing_label("1.2").to_string(),
        "missing label for node 1.2"
    );
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(err.to_string().contains("gone"));
}
