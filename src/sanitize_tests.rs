use super::*;

#[test]
fn test_basic_labels() {
    assert_eq!(sanitize_name("Hero Section"), "hero_section");
    assert_eq!(sanitize_name("promo"), "promo");
    assert_eq!(sanitize_name("Widget Area 3"), "widget_area_3");
}

#[test]
fn test_hyphens_become_underscores() {
    assert_eq!(sanitize_name("front-page-1"), "front_page_1");
    assert_eq!(sanitize_name("a--b---c"), "a_b_c");
}

#[test]
fn test_punctuation_collapses() {
    assert_eq!(sanitize_name("Hello, World!"), "hello_world");
    assert_eq!(sanitize_name("  spaced   out  "), "spaced_out");
    assert_eq!(sanitize_name("wps/parallax"), "wps_parallax");
}

#[test]
fn test_underscores_survive() {
    assert_eq!(sanitize_name("already_sanitized"), "already_sanitized");
    assert_eq!(sanitize_name("wps_parallax_setting"), "wps_parallax_setting");
}

#[test]
fn test_degenerate_input() {
    assert_eq!(sanitize_name(""), "");
    assert_eq!(sanitize_name("---"), "");
    assert_eq!(sanitize_name("!!!"), "");
    assert_eq!(sanitize_name("   "), "");
}

#[test]
fn test_non_ascii_stripped() {
    assert_eq!(sanitize_name("café"), "caf");
    assert_eq!(sanitize_name("日本語"), "");
}

#[test]
fn test_idempotence() {
    let inputs = [
        "Hero Section",
        "front-page-1",
        "Hello, World!",
        "already_sanitized",
        "café au lait",
        "",
        "---",
        "A  -  B",
    ];
    for input in inputs {
        let once = sanitize_name(input);
        assert_eq!(sanitize_name(&once), once, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_no_hyphens_in_output() {
    let inputs = ["a-b", "a - b", "-leading", "trailing-", "--", "mixed-up label"];
    for input in inputs {
        assert!(
            !sanitize_name(input).contains('-'),
            "hyphen leaked for {:?}",
            input
        );
    }
}

#[test]
fn test_hex_color_valid() {
    assert_eq!(sanitize_hex_color(""), Some(String::new()));
    assert_eq!(sanitize_hex_color("#fff"), Some("#fff".to_string()));
    assert_eq!(sanitize_hex_color("#FFF"), Some("#FFF".to_string()));
    assert_eq!(sanitize_hex_color("#1e1e1e"), Some("#1e1e1e".to_string()));
    assert_eq!(sanitize_hex_color("#ABCDEF"), Some("#ABCDEF".to_string()));
}

#[test]
fn test_hex_color_invalid() {
    assert_eq!(sanitize_hex_color("fff"), None);
    assert_eq!(sanitize_hex_color("#ff"), None);
    assert_eq!(sanitize_hex_color("#ffff"), None);
    assert_eq!(sanitize_hex_color("#gggggg"), None);
    assert_eq!(sanitize_hex_color("red"), None);
    assert_eq!(sanitize_hex_color("#12345678"), None);
}
