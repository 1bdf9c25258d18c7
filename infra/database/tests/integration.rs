use encontra_database::{Database, DatabaseError};
use encontra_domain::config::DatabaseConfig;

#[tokio::test]
async fn default_config_opens_memory_session() {
    let db = Database::connect(&DatabaseConfig::default()).await.unwrap();

    db.health().await.unwrap();
    assert_eq!(db.namespace(), "encontra");
    assert_eq!(db.database(), "directory");
}

#[tokio::test]
async fn blank_namespace_is_rejected_before_connecting() {
    let config = DatabaseConfig { namespace: " ".to_owned(), ..DatabaseConfig::default() };

    let err = Database::connect(&config).await.unwrap_err();
    assert!(matches!(err, DatabaseError::Settings { .. }));
    assert_eq!(err.to_string(), "Invalid database settings: namespace must not be blank");
}

#[tokio::test]
async fn unknown_scheme_is_unreachable() {
    let config = DatabaseConfig { url: "nope://venues".to_owned(), ..DatabaseConfig::default() };

    let err = Database::connect(&config).await.unwrap_err();
    assert!(matches!(err, DatabaseError::Unreachable { .. }));
}

#[tokio::test]
async fn execute_fails_on_bad_statement() {
    let db = Database::in_memory("t", "t").await.unwrap();
    db.execute("DEFINE TABLE IF NOT EXISTS venue SCHEMALESS;").await.unwrap();

    let err = db.execute("THIS IS NOT SURREALQL;").await.unwrap_err();
    assert!(matches!(err, DatabaseError::Surreal { .. }));
}
