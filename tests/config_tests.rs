use jsanalyze::config::{ConfigStore, Setting};
use jsanalyze::error::ConfigError;

#[test]
fn test_save_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());

    for setting in [
        Setting::Model("llama3".to_string()),
        Setting::Model(String::new()),
        Setting::ApiKey("AIza-test-key".to_string()),
        Setting::ApiKey(String::new()),
    ] {
        store.save(&setting).unwrap();
        assert_eq!(store.load().unwrap(), setting);
    }
}

#[test]
fn test_second_save_replaces_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());

    store.save(&Setting::Model("llama3".to_string())).unwrap();
    store.save(&Setting::Model("mistral".to_string())).unwrap();
    assert_eq!(store.load().unwrap(), Setting::Model("mistral".to_string()));

    // Switching kinds replaces the schema, nothing is merged
    store.save(&Setting::ApiKey("k".to_string())).unwrap();
    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw, r#"{"api_key":"k"}"#);
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("nested").join("js_analyze");
    let store = ConfigStore::new(&root);

    store.save(&Setting::Model("llama3".to_string())).unwrap();
    assert!(root.join("config.json").is_file());
}

#[test]
fn test_load_without_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());

    let err = store.load().unwrap_err();
    assert!(matches!(err, ConfigError::Missing { .. }));
}

#[test]
fn test_load_garbage_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());
    std::fs::write(store.path(), "not json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, ConfigError::Corrupt { .. }));
}

#[test]
fn test_reads_file_written_by_hand() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path());
    std::fs::write(store.path(), r#"{"model": "codellama"}"#).unwrap();

    assert_eq!(store.load().unwrap(), Setting::Model("codellama".to_string()));
}
