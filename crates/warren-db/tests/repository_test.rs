//! Integration tests for the SurrealDB repositories, run against the
//! embedded in-memory engine.

use chrono::{Duration, Utc};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;
use warren_core::error::WarrenError;
use warren_core::models::feature::CreateFeature;
use warren_core::models::tenant::CreateTenant;
use warren_core::models::user::{CreateUser, Role};
use warren_core::repository::{
    FeatureRepository, TenantRepository, UserRepository, VerificationTokenRepository,
};
use warren_db::repository::{
    SurrealFeatureRepository, SurrealTenantRepository, SurrealUserRepository,
    SurrealVerificationTokenRepository,
};

/// Spin up an in-memory DB with migrations applied.
async fn setup() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    warren_db::run_migrations(&db).await.unwrap();
    db
}

async fn make_tenant(db: &Surreal<Db>, subdomain: &str) -> Uuid {
    let repo = SurrealTenantRepository::new(db.clone());
    repo.create(CreateTenant {
        name: format!("Tenant {subdomain}"),
        subdomain: subdomain.into(),
        settings: None,
    })
    .await
    .unwrap()
    .id
}

fn new_user(email: &str, tenant_id: Uuid) -> CreateUser {
    CreateUser {
        email: email.into(),
        password: "secret1".into(),
        tenant_id,
        role: Role::User,
    }
}

// -----------------------------------------------------------------------
// Users
// -----------------------------------------------------------------------

#[tokio::test]
async fn create_and_fetch_user() {
    let db = setup().await;
    let tenant_id = make_tenant(&db, "acme").await;
    let repo = SurrealUserRepository::new(db.clone());

    let created = repo.create(new_user("alice@example.com", tenant_id)).await.unwrap();
    assert_eq!(created.email, "alice@example.com");
    assert_eq!(created.tenant_id, tenant_id);
    assert_eq!(created.role, Role::User);
    assert!(!created.verified);
    assert!(created.password_hash.starts_with("$argon2id$"));

    let by_email = repo.get_by_email("alice@example.com").await.unwrap();
    assert_eq!(by_email.id, created.id);

    let by_id = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(by_id.email, "alice@example.com");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let db = setup().await;
    let tenant_id = make_tenant(&db, "acme").await;
    let repo = SurrealUserRepository::new(db.clone());

    repo.create(new_user("alice@example.com", tenant_id)).await.unwrap();
    let err = repo
        .create(new_user("alice@example.com", tenant_id))
        .await
        .unwrap_err();

    assert!(matches!(err, WarrenError::Conflict { .. }), "got: {err:?}");
}

#[tokio::test]
async fn email_uniqueness_is_global_not_per_tenant() {
    let db = setup().await;
    let tenant_a = make_tenant(&db, "acme").await;
    let tenant_b = make_tenant(&db, "globex").await;
    let repo = SurrealUserRepository::new(db.clone());

    repo.create(new_user("alice@example.com", tenant_a)).await.unwrap();
    let err = repo
        .create(new_user("alice@example.com", tenant_b))
        .await
        .unwrap_err();

    assert!(matches!(err, WarrenError::Conflict { .. }));
}

#[tokio::test]
async fn mark_verified_is_idempotent() {
    let db = setup().await;
    let tenant_id = make_tenant(&db, "acme").await;
    let repo = SurrealUserRepository::new(db.clone());

    repo.create(new_user("alice@example.com", tenant_id)).await.unwrap();

    repo.mark_verified("alice@example.com").await.unwrap();
    repo.mark_verified("alice@example.com").await.unwrap();
    // Unknown emails update nothing and still succeed.
    repo.mark_verified("nobody@example.com").await.unwrap();

    let user = repo.get_by_email("alice@example.com").await.unwrap();
    assert!(user.verified);
}

#[tokio::test]
async fn listing_is_tenant_isolated() {
    let db = setup().await;
    let tenant_a = make_tenant(&db, "acme").await;
    let tenant_b = make_tenant(&db, "globex").await;
    let repo = SurrealUserRepository::new(db.clone());

    repo.create(new_user("a1@example.com", tenant_a)).await.unwrap();
    repo.create(new_user("a2@example.com", tenant_a)).await.unwrap();
    repo.create(new_user("b1@example.com", tenant_b)).await.unwrap();

    let listed = repo.list_by_tenant(tenant_a).await.unwrap();
    let emails: Vec<_> = listed.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, ["a1@example.com", "a2@example.com"]);
}

#[tokio::test]
async fn update_role_in_same_tenant() {
    let db = setup().await;
    let tenant_id = make_tenant(&db, "acme").await;
    let repo = SurrealUserRepository::new(db.clone());

    let user = repo.create(new_user("alice@example.com", tenant_id)).await.unwrap();
    repo.update_role(user.id, tenant_id, Role::Admin).await.unwrap();

    let reloaded = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(reloaded.role, Role::Admin);
}

#[tokio::test]
async fn cross_tenant_role_update_fails() {
    let db = setup().await;
    let tenant_a = make_tenant(&db, "acme").await;
    let tenant_b = make_tenant(&db, "globex").await;
    let repo = SurrealUserRepository::new(db.clone());

    let user = repo.create(new_user("alice@example.com", tenant_a)).await.unwrap();

    let err = repo
        .update_role(user.id, tenant_b, Role::Admin)
        .await
        .unwrap_err();
    assert!(matches!(err, WarrenError::NotFound { .. }));

    // The row is untouched.
    let reloaded = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(reloaded.role, Role::User);
}

// -----------------------------------------------------------------------
// Tenants
// -----------------------------------------------------------------------

#[tokio::test]
async fn tenant_roundtrip_by_subdomain() {
    let db = setup().await;
    let repo = SurrealTenantRepository::new(db.clone());

    let created = repo
        .create(CreateTenant {
            name: "Acme".into(),
            subdomain: "acme".into(),
            settings: Some(serde_json::json!({"color": "#ff0000"})),
        })
        .await
        .unwrap();

    let found = repo.get_by_subdomain("acme").await.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.settings["color"], "#ff0000");

    let err = repo.get_by_subdomain("nope").await.unwrap_err();
    assert!(matches!(err, WarrenError::NotFound { .. }));
}

#[tokio::test]
async fn duplicate_subdomain_is_a_conflict() {
    let db = setup().await;
    let repo = SurrealTenantRepository::new(db.clone());

    make_tenant(&db, "acme").await;
    let err = repo
        .create(CreateTenant {
            name: "Other".into(),
            subdomain: "acme".into(),
            settings: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, WarrenError::Conflict { .. }));
}

#[tokio::test]
async fn settings_update_replaces_the_whole_blob() {
    let db = setup().await;
    let repo = SurrealTenantRepository::new(db.clone());

    let tenant = repo
        .create(CreateTenant {
            name: "Acme".into(),
            subdomain: "acme".into(),
            settings: Some(serde_json::json!({"color": "#ff0000", "logo": "a.png"})),
        })
        .await
        .unwrap();

    let updated = repo
        .update_settings(tenant.id, serde_json::json!({"color": "#00ff00"}))
        .await
        .unwrap();

    // Replace, not merge: the logo key is gone.
    assert_eq!(updated.settings["color"], "#00ff00");
    assert!(updated.settings.get("logo").is_none());
}

#[tokio::test]
async fn list_returns_all_tenants() {
    let db = setup().await;
    let repo = SurrealTenantRepository::new(db.clone());

    make_tenant(&db, "acme").await;
    make_tenant(&db, "globex").await;

    let tenants = repo.list().await.unwrap();
    assert_eq!(tenants.len(), 2);
}

// -----------------------------------------------------------------------
// Verification tokens
// -----------------------------------------------------------------------

#[tokio::test]
async fn issued_token_consumes_exactly_once() {
    let db = setup().await;
    let repo = SurrealVerificationTokenRepository::new(db.clone());
    let user_id = Uuid::new_v4();

    let token = repo.issue(user_id).await.unwrap();
    assert_eq!(token.len(), 64);

    let consumed = repo.consume(&token).await.unwrap();
    assert_eq!(consumed, user_id);

    // Replay fails: the row is gone.
    let err = repo.consume(&token).await.unwrap_err();
    assert!(matches!(err, WarrenError::NotFound { .. }));
}

#[tokio::test]
async fn unknown_and_expired_tokens_read_identically() {
    let db = setup().await;
    let repo = SurrealVerificationTokenRepository::new(db.clone());
    let user_id = Uuid::new_v4();

    repo.insert_with_expiry(user_id, "deadbeef", Utc::now() - Duration::seconds(1))
        .await
        .unwrap();

    let expired = repo.consume("deadbeef").await.unwrap_err();
    let unknown = repo.consume("cafebabe").await.unwrap_err();

    assert!(matches!(expired, WarrenError::NotFound { .. }));
    assert!(matches!(unknown, WarrenError::NotFound { .. }));
}

#[tokio::test]
async fn expiry_boundary() {
    let db = setup().await;
    let repo = SurrealVerificationTokenRepository::new(db.clone());
    let user_id = Uuid::new_v4();

    // A second of validity left: consumable.
    repo.insert_with_expiry(user_id, "stillgood", Utc::now() + Duration::seconds(1))
        .await
        .unwrap();
    assert_eq!(repo.consume("stillgood").await.unwrap(), user_id);

    // A second past expiry: gone.
    repo.insert_with_expiry(user_id, "toolate", Utc::now() - Duration::seconds(1))
        .await
        .unwrap();
    assert!(repo.consume("toolate").await.is_err());
}

#[tokio::test]
async fn sweep_removes_only_expired_tokens() {
    let db = setup().await;
    let repo = SurrealVerificationTokenRepository::new(db.clone());
    let user_id = Uuid::new_v4();

    repo.insert_with_expiry(user_id, "old1", Utc::now() - Duration::hours(1))
        .await
        .unwrap();
    repo.insert_with_expiry(user_id, "old2", Utc::now() - Duration::minutes(5))
        .await
        .unwrap();
    repo.insert_with_expiry(user_id, "fresh", Utc::now() + Duration::hours(1))
        .await
        .unwrap();

    let removed = repo.sweep().await.unwrap();
    assert_eq!(removed, 2);

    // The live token survived the sweep.
    assert_eq!(repo.consume("fresh").await.unwrap(), user_id);

    // Nothing left to sweep.
    assert_eq!(repo.sweep().await.unwrap(), 0);
}

// -----------------------------------------------------------------------
// Features
// -----------------------------------------------------------------------

#[tokio::test]
async fn feature_crud_roundtrip() {
    let db = setup().await;
    let tenant_a = make_tenant(&db, "acme").await;
    let tenant_b = make_tenant(&db, "globex").await;
    let repo = SurrealFeatureRepository::new(db.clone());

    let feature = repo
        .create(CreateFeature {
            tenant_id: tenant_a,
            name: "Reports".into(),
            description: "Monthly reports".into(),
        })
        .await
        .unwrap();
    repo.create(CreateFeature {
        tenant_id: tenant_b,
        name: "Exports".into(),
        description: "CSV exports".into(),
    })
    .await
    .unwrap();

    let listed = repo.list_by_tenant(tenant_a).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Reports");

    let updated = repo
        .update(feature.id, "Reports v2".into(), "Weekly reports".into())
        .await
        .unwrap();
    assert_eq!(updated.name, "Reports v2");

    repo.delete(feature.id).await.unwrap();
    assert!(repo.get_by_id(feature.id).await.is_err());
}
