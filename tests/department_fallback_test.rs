use std::sync::Arc;

use campanile::content::{DepartmentService, Resolved};
use campanile::data::bundled_department;
use campanile::domain::DepartmentSlug;
use campanile::error::AppError;
use campanile::store::SqliteDocumentStore;
use campanile::test_support::FailingStore;
use sqlx::sqlite::SqlitePoolOptions;

async fn memory_store() -> anyhow::Result<Arc<SqliteDocumentStore>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(SqliteDocumentStore::new(pool)))
}

#[tokio::test]
async fn test_absent_override_serves_bundled_profile() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let service = DepartmentService::new(store.clone());

    match service.profile("cse").await {
        Resolved::Fallback(profile) => {
            assert_eq!(profile.name, "Computer Science & Engineering");
            assert_eq!(profile.established, 1986);
        }
        other => panic!("expected fallback, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_dynamic_override_wins_over_bundled() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let service = DepartmentService::new(store.clone());

    let mut profile = bundled_department(DepartmentSlug::Cse);
    profile.tagline = "Fresh from the editor".to_string();
    service.save_profile(DepartmentSlug::Cse, profile).await?;

    match service.profile("cse").await {
        Resolved::Dynamic(profile) => {
            assert_eq!(profile.tagline, "Fresh from the editor");
        }
        other => panic!("expected dynamic, got {:?}", other),
    }

    // Other slugs still fall back.
    assert!(matches!(service.profile("civil").await, Resolved::Fallback(_)));

    Ok(())
}

#[tokio::test]
async fn test_unknown_slug_is_missing_not_error() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let service = DepartmentService::new(store.clone());

    let resolved = service.profile("astrology").await;
    assert!(resolved.is_missing());

    // Only the missing tier leaves the page with nothing to render.
    assert!(resolved.into_option().is_none());
    assert!(service.profile("cse").await.into_option().is_some());

    Ok(())
}

#[tokio::test]
async fn test_store_failure_demotes_to_fallback() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let flaky = Arc::new(FailingStore::new(store.clone()));
    let service = DepartmentService::new(flaky.clone());

    // Even a stored override is unreachable during the outage; the page
    // must get the bundled profile, never the error.
    let mut profile = bundled_department(DepartmentSlug::Ece);
    profile.tagline = "Unreachable override".to_string();
    service.save_profile(DepartmentSlug::Ece, profile).await?;

    flaky.fail_next(1);
    match service.profile("ece").await {
        Resolved::Fallback(profile) => {
            assert_eq!(profile.tagline, "Connecting the World");
        }
        other => panic!("expected fallback during outage, got {:?}", other),
    }

    // Outage over: the override is visible again.
    assert!(matches!(service.profile("ece").await, Resolved::Dynamic(_)));

    Ok(())
}

#[tokio::test]
async fn test_editor_gets_scaffold_not_bundled_text() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let service = DepartmentService::new(store.clone());

    let editor = service.editor_profile(DepartmentSlug::Civil).await?;
    assert_eq!(editor.id, "civil");
    assert_eq!(editor.name, "Civil Engineering");
    assert_eq!(editor.description, "");
    assert_eq!(editor.programs, vec![String::new()]);

    Ok(())
}

#[tokio::test]
async fn test_editor_prefers_stored_override() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let service = DepartmentService::new(store.clone());

    let mut profile = bundled_department(DepartmentSlug::Civil);
    profile.hod = "Dr. New Head".to_string();
    service.save_profile(DepartmentSlug::Civil, profile).await?;

    let editor = service.editor_profile(DepartmentSlug::Civil).await?;
    assert_eq!(editor.hod, "Dr. New Head");

    Ok(())
}

#[tokio::test]
async fn test_editor_propagates_store_failure() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let flaky = Arc::new(FailingStore::new(store.clone()));
    let service = DepartmentService::new(flaky.clone());

    // Unlike the public page, the editor must not silently open a scaffold
    // over an override it could not read.
    flaky.fail_next(1);
    let result = service.editor_profile(DepartmentSlug::Civil).await;
    assert!(matches!(result, Err(AppError::Store(_))));

    Ok(())
}

#[tokio::test]
async fn test_save_rejects_blank_name() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let service = DepartmentService::new(store.clone());

    let mut profile = bundled_department(DepartmentSlug::Cse);
    profile.name = String::new();

    let result = service.save_profile(DepartmentSlug::Cse, profile).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
