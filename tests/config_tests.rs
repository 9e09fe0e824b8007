mod common;

use common::temp_config_manager;
use serverwidget_core::{
    config::{Config, ConfigError, ConfigManager},
    record::RecordType,
};
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let manager = temp_config_manager();
    assert!(!manager.path().exists());
    assert_eq!(manager.load().unwrap(), Config::default());
}

#[test]
fn saved_config_reloads() {
    let manager = temp_config_manager();
    let config = Config {
        form_title: "Customer Notes".into(),
        hide_navbar: true,
        record_type: RecordType::Contact,
        ..Config::default()
    };
    manager.save(&config).unwrap();

    assert!(manager.path().exists());
    let tmp = manager.path().with_extension("json.tmp");
    assert!(!tmp.exists(), "temporary file is renamed into place");
    assert_eq!(manager.load().unwrap(), config);
}

#[test]
fn corrupt_file_is_a_serde_error() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
    std::fs::write(manager.path(), "{ not json").unwrap();
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}
