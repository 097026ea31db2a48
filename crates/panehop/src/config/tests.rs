use std::fs;

use tempfile::TempDir;

use super::{load_config, resolve_config, ConfigError, RawConfig};
use crate::keymap::parse_key_chord;
use crate::labels::InvalidAlphabet;
use crate::test_utils::ScopedEnv;

fn raw(contents: &str) -> RawConfig {
    toml::from_str(contents).expect("raw config")
}

#[test]
fn resolve_config_uses_defaults_when_empty() {
    let config = resolve_config(None, None).expect("config");

    assert_eq!(config.alphabet.len(), 26);
    assert_eq!(config.alphabet.label_for(0), "f");
    assert_eq!(config.cancel, parse_key_chord("esc").expect("chord"));
    assert!(!config.skip_if_two);
    assert_eq!(config.overlay.background_hl, "black");
    assert_eq!(config.overlay.text_hl, "white");
    assert_eq!(config.overlay.border_style, "single");
    assert_eq!(config.overlay.float_width, 5);
    assert_eq!(config.overlay.float_height, 3);
    assert!(!config.overlay.show_uppercase);
    assert_eq!(config.tmux.command, None);
    assert!(config.tmux.args.is_empty());
}

#[test]
fn resolve_config_takes_user_values() {
    let user = raw(
        r#"
chars = "abc"
cancel = "ctrl+g"
skip_if_two = true

[overlay]
show_uppercase = true
text_hl = "yellow"

[tmux]
command = "tmux-next"
args = ["-L", "dev"]
"#,
    );

    let config = resolve_config(Some(user), None).expect("config");

    assert_eq!(config.alphabet.label_for(0), "a");
    assert_eq!(config.cancel, parse_key_chord("ctrl+g").expect("chord"));
    assert!(config.skip_if_two);
    assert!(config.overlay.show_uppercase);
    assert_eq!(config.overlay.text_hl, "yellow");
    assert_eq!(config.overlay.float_width, 5);
    assert_eq!(config.tmux.command, Some("tmux-next".to_string()));
    assert_eq!(config.tmux.args, vec!["-L".to_string(), "dev".to_string()]);
}

#[test]
fn resolve_config_lets_overrides_win_over_user() {
    let user = raw(
        r#"
chars = "abc"

[overlay]
float_width = 9
border_style = "double"
"#,
    );
    let overrides = raw(
        r#"
chars = "xyz"

[overlay]
float_width = 7
"#,
    );

    let config = resolve_config(Some(user), Some(overrides)).expect("config");

    assert_eq!(config.alphabet.label_for(0), "x");
    assert_eq!(config.overlay.float_width, 7);
    assert_eq!(config.overlay.border_style, "double");
}

#[test]
fn resolve_config_accepts_camel_case_aliases() {
    let user = raw(
        r#"
skipIfTwo = true

[overlay]
showUppercase = true
floatWidth = 8
backgroundHl = "blue"
"#,
    );

    let config = resolve_config(Some(user), None).expect("config");

    assert!(config.skip_if_two);
    assert!(config.overlay.show_uppercase);
    assert_eq!(config.overlay.float_width, 8);
    assert_eq!(config.overlay.background_hl, "blue");
}

#[test]
fn resolve_config_rejects_empty_chars() {
    let user = raw(r#"chars = """#);
    let err = resolve_config(Some(user), None).expect_err("empty chars");
    assert_eq!(err, ConfigError::InvalidChars(InvalidAlphabet::Empty));

    let user = raw(r#"chars = "  ""#);
    let err = resolve_config(Some(user), None).expect_err("blank chars");
    assert_eq!(err, ConfigError::InvalidChars(InvalidAlphabet::Empty));
}

#[test]
fn resolve_config_rejects_unparseable_cancel_chord() {
    let user = raw(r#"cancel = "notakey""#);
    let err = resolve_config(Some(user), None).expect_err("bad cancel");
    assert_eq!(err, ConfigError::InvalidCancelKey("notakey".to_string()));
}

#[test]
fn load_config_reads_file_named_by_env() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "chars = \"qwe\"\n").expect("write config");
    let _env = ScopedEnv::set("PANEHOP_CONFIG", path.to_string_lossy().to_string());

    let config = load_config(None).expect("config");
    assert_eq!(config.alphabet.label_for(0), "q");

    let overrides = raw(r#"chars = "z""#);
    let config = load_config(Some(overrides)).expect("config");
    assert_eq!(config.alphabet.label_for(0), "z");
}

#[test]
fn load_config_falls_back_to_defaults_when_file_missing() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.toml");
    let _env = ScopedEnv::set("PANEHOP_CONFIG", path.to_string_lossy().to_string());

    let config = load_config(None).expect("config");
    assert_eq!(config.alphabet.label_for(0), "f");
}
