use mastery_core::model::ProgressState;
use storage::repository::{ProgressRepository, StorageError};
use storage::sqlite::SqliteRepository;
use storage::{PROGRESS_KEY, Storage};

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrip_persists_completed_set() {
    let repo = connect("memdb_progress_roundtrip").await;
    assert!(repo.load_progress().await.unwrap().is_none());

    let state = ProgressState::from_ids(["render-props", "lists-keys", "retired-topic"]);
    repo.save_progress(&state).await.unwrap();

    let loaded = repo.load_progress().await.unwrap();
    assert_eq!(loaded, Some(state));
}

#[tokio::test]
async fn sqlite_save_overwrites_single_row() {
    let repo = connect("memdb_progress_overwrite").await;
    repo.save_progress(&ProgressState::from_ids(["a", "b"]))
        .await
        .unwrap();
    repo.save_progress(&ProgressState::from_ids(["c"]))
        .await
        .unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv_slots")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);

    let value: String = sqlx::query_scalar("SELECT value FROM kv_slots WHERE key = ?1")
        .bind(PROGRESS_KEY)
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(value, r#"["c"]"#);
}

#[tokio::test]
async fn sqlite_remove_deletes_the_row() {
    let repo = connect("memdb_progress_remove").await;
    repo.save_progress(&ProgressState::from_ids(["a"]))
        .await
        .unwrap();
    repo.remove_progress().await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv_slots WHERE key = ?1")
        .bind(PROGRESS_KEY)
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert!(repo.load_progress().await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_malformed_row_is_a_serialization_error() {
    let repo = connect("memdb_progress_malformed").await;
    sqlx::query("INSERT INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)")
        .bind(PROGRESS_KEY)
        .bind(r#"{"completed":["a"]}"#)
        .bind("2023-11-14T22:13:20Z")
        .execute(repo.pool())
        .await
        .unwrap();

    let err = repo.load_progress().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = connect("memdb_progress_migrate_twice").await;
    repo.migrate().await.expect("second migrate");

    let versions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(versions, 1);
}

#[tokio::test]
async fn storage_sqlite_wires_progress_repository() {
    let storage = Storage::sqlite("sqlite:file:memdb_progress_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage
        .progress
        .save_progress(&ProgressState::from_ids(["x"]))
        .await
        .unwrap();
    let loaded = storage.progress.load_progress().await.unwrap().unwrap();
    assert!(loaded.is_completed("x"));
}
