//! Data access layer behaviour against the in-memory store.
//!
//! Covers ordering, exact write payloads, update keying, not-found deletes
//! and failure pass-through.

use assert_matches::assert_matches;
use folio_core::project::ProjectFormData;
use folio_db::repositories::ProjectRepo;
use folio_db::store::{Filter, MemoryStore, RecordStore, Row, Select, StoreCall};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn draft(title: &str) -> ProjectFormData {
    ProjectFormData {
        id: String::new(),
        title: title.to_string(),
        description: format!("{title} description"),
        category: "Branding".to_string(),
        image_url: String::new(),
    }
}

fn row(value: serde_json::Value) -> Row {
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

async fn seed(store: &MemoryStore, titles: &[&str]) {
    for title in titles {
        ProjectRepo::save(store, &draft(title), false).await.unwrap();
    }
    store.clear_calls();
}

// ---------------------------------------------------------------------------
// fetch_all
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_all_returns_newest_first() {
    let store = MemoryStore::new();
    seed(&store, &["first", "second", "third"]).await;

    let projects = ProjectRepo::fetch_all(&store).await.unwrap();
    let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["third", "second", "first"]);

    for pair in projects.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn fetch_all_requests_created_at_descending() {
    let store = MemoryStore::new();
    ProjectRepo::fetch_all(&store).await.unwrap();

    assert_eq!(
        store.calls(),
        vec![StoreCall::Select(
            Select::table("projects").order_by("created_at", true)
        )]
    );
}

#[tokio::test]
async fn fetch_all_orders_seeded_timestamps() {
    let store = MemoryStore::new();
    for (title, at) in [
        ("old", "2023-01-01T00:00:00.000000Z"),
        ("new", "2024-06-01T00:00:00.000000Z"),
        ("mid", "2023-09-01T00:00:00.000000Z"),
    ] {
        store
            .insert("projects", row(json!({"title": title, "created_at": at})))
            .await
            .unwrap();
    }

    let titles: Vec<String> = ProjectRepo::fetch_all(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["new", "mid", "old"]);
}

#[tokio::test]
async fn refetch_is_idempotent() {
    let store = MemoryStore::new();
    seed(&store, &["a", "b"]).await;

    let first = ProjectRepo::fetch_all(&store).await.unwrap();
    let second = ProjectRepo::fetch_all(&store).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn fetch_failure_yields_no_data() {
    let store = MemoryStore::new();
    seed(&store, &["a"]).await;
    store.set_fail_reads(true);

    let err = ProjectRepo::fetch_all(&store).await.unwrap_err();
    assert_eq!(err.code.as_deref(), Some("unavailable"));
}

#[tokio::test]
async fn undecodable_row_fails_whole_fetch() {
    let store = MemoryStore::new();
    seed(&store, &["good"]).await;
    // A row with no title cannot become a Project.
    store
        .insert("projects", row(json!({"category": "x"})))
        .await
        .unwrap();

    let err = ProjectRepo::fetch_all(&store).await.unwrap_err();
    assert_eq!(err.code.as_deref(), Some("decode"));
}

// ---------------------------------------------------------------------------
// save
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_issues_one_insert_with_four_fields() {
    let store = MemoryStore::new();
    let form = ProjectFormData {
        id: String::new(),
        title: "Brand Refresh".into(),
        description: "Full identity redesign".into(),
        category: "Branding".into(),
        image_url: String::new(),
    };

    ProjectRepo::save(&store, &form, false).await.unwrap();

    let calls = store.write_calls();
    assert_eq!(calls.len(), 1);
    assert_matches!(&calls[0], StoreCall::Insert { table, row } => {
        assert_eq!(table, "projects");
        assert_eq!(
            serde_json::Value::Object(row.clone()),
            json!({
                "title": "Brand Refresh",
                "description": "Full identity redesign",
                "category": "Branding",
                "image_url": ""
            })
        );
    });

    let projects = ProjectRepo::fetch_all(&store).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert!(!projects[0].id.is_empty());
    assert_eq!(projects[0].title, "Brand Refresh");
}

#[tokio::test]
async fn newest_creation_sorts_first() {
    let store = MemoryStore::new();
    seed(&store, &["older"]).await;
    ProjectRepo::save(&store, &draft("Brand Refresh"), false)
        .await
        .unwrap();

    let projects = ProjectRepo::fetch_all(&store).await.unwrap();
    assert_eq!(projects[0].title, "Brand Refresh");
}

#[tokio::test]
async fn edit_issues_one_update_keyed_by_id() {
    let store = MemoryStore::new();
    seed(&store, &["original"]).await;
    let existing = ProjectRepo::fetch_all(&store).await.unwrap().remove(0);
    store.clear_calls();

    let mut form = existing.to_form();
    form.title = "renamed".into();
    ProjectRepo::save(&store, &form, true).await.unwrap();

    let calls = store.write_calls();
    assert_eq!(calls.len(), 1);
    assert_matches!(&calls[0], StoreCall::Update { table, filter, values } => {
        assert_eq!(table, "projects");
        assert_eq!(filter, &Filter::eq("id", existing.id.clone()));
        let mut keys: Vec<&str> = values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["category", "description", "image_url", "title"]);
    });

    let after = ProjectRepo::fetch_all(&store).await.unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].title, "renamed");
    assert_eq!(after[0].created_at, existing.created_at);
}

#[tokio::test]
async fn edit_of_missing_row_fails() {
    let store = MemoryStore::new();
    let mut form = draft("ghost");
    form.id = "does-not-exist".into();

    let err = ProjectRepo::save(&store, &form, true).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn write_failure_passes_through() {
    let store = MemoryStore::new();
    store.set_fail_writes(true);

    let err = ProjectRepo::save(&store, &draft("x"), false)
        .await
        .unwrap_err();
    assert_eq!(err.code.as_deref(), Some("unavailable"));
    assert_eq!(store.write_calls().len(), 1);
}

// ---------------------------------------------------------------------------
// delete / find
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_row() {
    let store = MemoryStore::new();
    seed(&store, &["keep", "drop"]).await;
    let target = ProjectRepo::fetch_all(&store)
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.title == "drop")
        .unwrap();

    ProjectRepo::delete(&store, &target.id).await.unwrap();

    let titles: Vec<String> = ProjectRepo::fetch_all(&store)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, ["keep"]);
}

#[tokio::test]
async fn delete_of_unknown_id_fails_and_leaves_list() {
    let store = MemoryStore::new();
    seed(&store, &["a", "b"]).await;
    let before = ProjectRepo::fetch_all(&store).await.unwrap();

    let err = ProjectRepo::delete(&store, "nope").await.unwrap_err();
    assert!(err.is_not_found());

    let after = ProjectRepo::fetch_all(&store).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn find_by_id_hits_and_misses() {
    let store = MemoryStore::new();
    seed(&store, &["only"]).await;
    let id = ProjectRepo::fetch_all(&store).await.unwrap()[0].id.clone();

    let found = ProjectRepo::find_by_id(&store, &id).await.unwrap();
    assert_eq!(found.map(|p| p.title), Some("only".to_string()));
    assert!(ProjectRepo::find_by_id(&store, "missing")
        .await
        .unwrap()
        .is_none());
}
