mod common;

use common::{PrefixedIds, SequentialIds};
use promptbox::config::DEFAULT_TEMPLATES;
use promptbox::io::location::FixedLocation;
use promptbox::{StoreError, Template, TemplateDraft, TemplateStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn store_in(dir: &Path) -> TemplateStore {
    TemplateStore::with_id_generator(
        dir.join("templates").join("templates.json"),
        SequentialIds::default(),
    )
}

fn template(id: &str, title: &str, content: &str) -> Template {
    Template {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        link: None,
    }
}

fn cancel() -> FixedLocation {
    FixedLocation(None)
}

fn at(path: PathBuf) -> FixedLocation {
    FixedLocation(Some(path))
}

#[tokio::test]
async fn test_list_without_backing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    assert!(store.list().await.unwrap().is_empty());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_save_new_assigns_id_and_appends() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let first = store
        .save(TemplateDraft::new("Greeting", "Hello {{name}}"))
        .await
        .unwrap();
    let second = store
        .save(TemplateDraft::new("Farewell", "Bye").with_link("https://example.com"))
        .await
        .unwrap();

    assert_eq!(first.id, "id-1");
    assert_eq!(second.id, "id-2");
    assert_eq!(second.link.as_deref(), Some("https://example.com"));

    let templates = store.list().await.unwrap();
    assert_eq!(templates, vec![first, second]);
}

#[tokio::test]
async fn test_save_existing_updates_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let first = store.save(TemplateDraft::new("One", "1")).await.unwrap();
    store.save(TemplateDraft::new("Two", "2")).await.unwrap();

    let mut edited = first.clone();
    edited.title = "One, renamed".to_string();
    let saved = store.save(edited.clone().into()).await.unwrap();

    assert_eq!(saved, edited);
    let templates = store.list().await.unwrap();
    assert_eq!(templates.len(), 2);
    assert_eq!(templates[0].id, first.id);
    assert_eq!(templates[0].title, "One, renamed");
    assert_eq!(templates[1].title, "Two");
}

#[tokio::test]
async fn test_save_existing_with_unknown_id_is_stored_as_new() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let saved = store
        .save(TemplateDraft::Existing(template("missing", "Orphan", "x")))
        .await
        .unwrap();

    assert_eq!(saved.id, "id-1");
    let templates = store.list().await.unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].title, "Orphan");
}

#[tokio::test]
async fn test_backing_file_is_pretty_printed_without_absent_links() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    store.save(TemplateDraft::new("Plain", "text")).await.unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.starts_with("[\n  {\n    \"id\": \"id-1\""));
    assert!(!raw.contains("link"));
}

#[tokio::test]
async fn test_corrupt_backing_file_is_persistence_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "{ not json").unwrap();

    assert!(matches!(
        store.list().await,
        Err(StoreError::Persistence { .. })
    ));
    assert!(matches!(
        store.save(TemplateDraft::new("t", "c")).await,
        Err(StoreError::Persistence { .. })
    ));
}

#[tokio::test]
async fn test_delete_removes_matching_template() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let first = store.save(TemplateDraft::new("One", "1")).await.unwrap();
    let second = store.save(TemplateDraft::new("Two", "2")).await.unwrap();

    store.delete(&first.id).await.unwrap();

    assert_eq!(store.list().await.unwrap(), vec![second]);
}

#[tokio::test]
async fn test_delete_unknown_id_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    store.save(TemplateDraft::new("One", "1")).await.unwrap();
    let before = store.list().await.unwrap();

    store.delete("does-not-exist").await.unwrap();

    assert_eq!(store.list().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_without_backing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let result = store.delete("id-1").await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_get_and_search() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    store
        .save(TemplateDraft::new("Code review", "Review this {{code}}"))
        .await
        .unwrap();
    store
        .save(TemplateDraft::new("Translate", "Translate to {{language}}"))
        .await
        .unwrap();
    store
        .save(TemplateDraft::new("Summary", "Summarize the CODE below"))
        .await
        .unwrap();

    let found = store.get("id-2").await.unwrap().unwrap();
    assert_eq!(found.title, "Translate");
    assert!(store.get("id-9").await.unwrap().is_none());

    let hits: Vec<String> = store
        .search("code")
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(hits, vec!["Code review", "Summary"]);
}

#[tokio::test]
async fn test_export_without_backing_file_is_empty_source() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let result = store.export(&at(temp_dir.path().join("out.json"))).await;
    assert!(matches!(result, Err(StoreError::EmptySource(_))));
}

#[tokio::test]
async fn test_export_cancelled() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());
    store.save(TemplateDraft::new("One", "1")).await.unwrap();

    let err = store.export(&cancel()).await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_export_writes_collection() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());
    store.save(TemplateDraft::new("One", "1")).await.unwrap();
    store.save(TemplateDraft::new("Two", "2")).await.unwrap();

    let destination = temp_dir.path().join("exports").join("all.json");
    let summary = store.export(&at(destination.clone())).await.unwrap();

    assert_eq!(summary.count, 2);
    assert_eq!(summary.path, destination);
    let exported: Vec<Template> =
        serde_json::from_str(&fs::read_to_string(&destination).unwrap()).unwrap();
    assert_eq!(exported, store.list().await.unwrap());
}

#[tokio::test]
async fn test_import_cancelled() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let err = store.import(&cancel()).await.unwrap_err();
    assert!(err.is_cancelled());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_import_malformed_input() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let not_json = temp_dir.path().join("bad.json");
    fs::write(&not_json, "this is not json").unwrap();
    let wrong_shape = temp_dir.path().join("shape.json");
    fs::write(&wrong_shape, r#"{"title": "not an array"}"#).unwrap();
    let missing_fields = temp_dir.path().join("fields.json");
    fs::write(&missing_fields, r#"[{"id": "x"}]"#).unwrap();

    for path in [not_json, wrong_shape, missing_fields] {
        let result = store.import(&at(path)).await;
        assert!(matches!(result, Err(StoreError::MalformedInput { .. })));
    }
}

#[tokio::test]
async fn test_import_unreadable_source_is_persistence_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let result = store.import(&at(temp_dir.path().join("nope.json"))).await;
    assert!(matches!(result, Err(StoreError::Persistence { .. })));
}

#[tokio::test]
async fn test_import_merges_by_id() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    store.save(TemplateDraft::new("One", "1")).await.unwrap();
    store.save(TemplateDraft::new("Two", "2")).await.unwrap();

    let source = temp_dir.path().join("incoming.json");
    fs::write(
        &source,
        r#"[
  {"id": "id-1", "title": "One v2", "content": "1!", "link": "https://one"},
  {"id": "foreign", "title": "Foreign", "content": "f"},
  {"title": "No id", "content": "n"},
  {"id": "", "title": "Empty id", "content": "e"}
]"#,
    )
    .unwrap();

    let merged = store.import(&at(source)).await.unwrap();

    let summary: Vec<(&str, &str)> = merged
        .iter()
        .map(|t| (t.id.as_str(), t.title.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("id-1", "One v2"),
            ("id-2", "Two"),
            ("foreign", "Foreign"),
            ("id-3", "No id"),
            ("id-4", "Empty id"),
        ]
    );
    assert_eq!(merged[0].link.as_deref(), Some("https://one"));
    assert_eq!(store.list().await.unwrap(), merged);
}

#[tokio::test]
async fn test_import_into_empty_store_creates_backing_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let source = temp_dir.path().join("incoming.json");
    fs::write(&source, r#"[{"id": "a", "title": "A", "content": "{{x}}"}]"#).unwrap();

    let merged = store.import(&at(source)).await.unwrap();
    assert_eq!(merged, vec![template("a", "A", "{{x}}")]);
    assert!(store.path().exists());
}

#[tokio::test]
async fn test_import_same_export_twice_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();

    let origin = TemplateStore::with_id_generator(
        temp_dir.path().join("origin.json"),
        PrefixedIds::new("origin"),
    );
    origin.save(TemplateDraft::new("A", "{{a}}")).await.unwrap();
    origin.save(TemplateDraft::new("B", "{{b}}")).await.unwrap();
    let shared = temp_dir.path().join("shared.json");
    origin.export(&at(shared.clone())).await.unwrap();

    let target = store_in(&temp_dir.path().join("target"));
    target.save(TemplateDraft::new("Local", "l")).await.unwrap();

    let once = target.import(&at(shared.clone())).await.unwrap();
    let twice = target.import(&at(shared)).await.unwrap();

    assert_eq!(once.len(), 3);
    assert_eq!(once, twice);
    assert_eq!(target.list().await.unwrap(), once);
}

#[tokio::test]
async fn test_seed_defaults_only_when_no_collection_exists() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(temp_dir.path());

    let added = store.seed_defaults().await.unwrap();
    assert_eq!(added, DEFAULT_TEMPLATES.len());
    assert_eq!(store.list().await.unwrap().len(), DEFAULT_TEMPLATES.len());

    assert_eq!(store.seed_defaults().await.unwrap(), 0);
    assert_eq!(store.list().await.unwrap().len(), DEFAULT_TEMPLATES.len());
}

#[tokio::test]
async fn test_uuid_generator_ids_are_unique() {
    let temp_dir = TempDir::new().unwrap();
    let store = TemplateStore::new(temp_dir.path().join("templates.json"));

    let a = store.save(TemplateDraft::new("A", "a")).await.unwrap();
    let b = store.save(TemplateDraft::new("B", "b")).await.unwrap();

    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
}
