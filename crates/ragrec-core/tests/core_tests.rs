use std::fs;
use std::path::Path;
use tempfile::TempDir;

use ragrec_core::config::{resolve_with_base, AppConfig, Config, LogLevel, OutputFormat};
use ragrec_core::error::Error;

fn write(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn explicit_config_file_must_exist() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");
    let err = Config::load_for_env(Some(missing.to_str().unwrap()), "test")
        .err()
        .expect("missing file is an error");
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::InvalidConfig(_))));
}

#[test]
fn base_file_overrides_defaults_and_keeps_the_rest() {
    let tmp = TempDir::new().unwrap();
    let base = write(tmp.path(), "config.toml", "[output]\nformat = \"json\"\n");

    let config = Config::load_for_env(Some(&base), "staging").expect("load");
    let app = config.app().expect("extract");

    assert_eq!(app.output.format, OutputFormat::Json);
    assert_eq!(app.ui, AppConfig::default().ui, "ui section untouched");
    assert_eq!(app.logging.level, LogLevel::Warn);
    assert_eq!(config.env_name(), "staging");
}

#[test]
fn environment_overlay_wins_over_base() {
    let tmp = TempDir::new().unwrap();
    let base = write(tmp.path(), "config.toml", "[ui.selector]\ntitle = \"Base\"\nicon = \"B\"\n");
    write(tmp.path(), "config.test.toml", "[ui.selector]\ntitle = \"Overlay\"\n");

    let config = Config::load_for_env(Some(&base), "testing").expect("load");
    let title: String = config.get("ui.selector.title").expect("title");
    let icon: String = config.get("ui.selector.icon").expect("icon");

    assert_eq!(title, "Overlay");
    assert_eq!(icon, "B", "fields not in overlay come from base");
}

#[test]
fn blank_page_title_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let base = write(tmp.path(), "config.toml", "[ui.freetext]\ntitle = \"   \"\n");

    let err = Config::load_for_env(Some(&base), "dev").err().expect("blank title");
    assert!(err.to_string().contains("ui.freetext.title"), "got: {err}");
}

#[test]
fn trace_logging_refused_in_production_only() {
    let tmp = TempDir::new().unwrap();
    let base = write(tmp.path(), "config.toml", "[logging]\nlevel = \"trace\"\n");

    assert!(Config::load_for_env(Some(&base), "prod").is_err());
    let dev = Config::load_for_env(Some(&base), "dev").expect("dev allows trace");
    assert_eq!(dev.app().unwrap().logging.level, LogLevel::Trace);
}

#[test]
fn unknown_key_lookup_reports_the_key() {
    let tmp = TempDir::new().unwrap();
    let base = write(tmp.path(), "config.toml", "");
    let config = Config::load_for_env(Some(&base), "dev").expect("load");

    let err = config.get::<String>("no.such.key").err().expect("missing key");
    assert!(err.to_string().contains("no.such.key"));
}

#[test]
fn relative_paths_resolve_against_base_dir() {
    let base = Path::new("/srv/ragrec");
    assert_eq!(resolve_with_base(base, "conf/app.toml"), base.join("conf/app.toml"));
    assert_eq!(resolve_with_base(base, "/etc/app.toml"), Path::new("/etc/app.toml"));
}
