use promptbox::SettingsStore;
use promptbox::commands::settings::parse_value;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_load_without_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = SettingsStore::new(temp_dir.path().join("settings.json"));

    assert!(store.load().await.unwrap().is_empty());
    assert!(store.get("apiKey").await.unwrap().is_none());
}

#[tokio::test]
async fn test_set_get_and_unset() {
    let temp_dir = TempDir::new().unwrap();
    let store = SettingsStore::new(temp_dir.path().join("nested").join("settings.json"));

    store.set("apiKey", json!("sk-123")).await.unwrap();
    store.set("maxTokens", json!(512)).await.unwrap();

    assert_eq!(store.get("apiKey").await.unwrap(), Some(json!("sk-123")));
    assert_eq!(store.get("maxTokens").await.unwrap(), Some(json!(512)));

    assert!(store.unset("apiKey").await.unwrap());
    assert!(!store.unset("apiKey").await.unwrap());

    let settings = store.load().await.unwrap();
    assert_eq!(settings.len(), 1);
    assert!(settings.contains_key("maxTokens"));
}

#[tokio::test]
async fn test_settings_file_is_pretty_json_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    let store = SettingsStore::new(&path);

    store.set("model", json!("gpt-4o")).await.unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "{\n  \"model\": \"gpt-4o\"\n}");
}

#[tokio::test]
async fn test_corrupt_settings_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let store = SettingsStore::new(&path);
    assert!(store.load().await.is_err());
}

#[test]
fn test_parse_value_keeps_json_types() {
    assert_eq!(parse_value("42"), json!(42));
    assert_eq!(parse_value("true"), json!(true));
    assert_eq!(parse_value(r#"{"a": 1}"#), json!({"a": 1}));
    assert_eq!(parse_value("plain text"), json!("plain text"));
    assert_eq!(parse_value(r#""quoted""#), json!("quoted"));
}
