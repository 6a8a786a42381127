//! Integration tests for the admin listing and documents-resume lookup.

use capflow_core::types::DbId;
use capflow_db::models::application::{ApplicationListParams, SubmissionStatus};
use capflow_db::repositories::ApplicationRepo;
use sqlx::PgPool;

/// Insert an application row directly; these rows are normally written by
/// the submission pipeline, not by this service.
async fn insert_application(
    pool: &PgPool,
    business_name: Option<&str>,
    email: Option<&str>,
    status: Option<&str>,
    documents_resume_token: Option<&str>,
) -> DbId {
    let (id,): (DbId,) = sqlx::query_as(
        "INSERT INTO applications (business_name, email, state, submission_status, documents_resume_token)
         VALUES ($1, $2, NULL, $3, $4)
         RETURNING id",
    )
    .bind(business_name)
    .bind(email)
    .bind(status)
    .bind(documents_resume_token)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn documents_grant_requires_pending_documents_status(pool: PgPool) {
    let id = insert_application(
        &pool,
        Some("Blue Harbor Seafood LLC"),
        Some("dana@example.com"),
        Some("pending_documents"),
        Some("doc-token-1"),
    )
    .await;

    let grant = ApplicationRepo::find_documents_resume_grant(&pool, "doc-token-1")
        .await
        .unwrap()
        .expect("pending_documents token should resolve");
    assert_eq!(grant.application_id, id);
    assert_eq!(grant.email, "dana@example.com");

    // Same token, wrong status: must not resolve.
    sqlx::query("UPDATE applications SET submission_status = 'submitted' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let gone = ApplicationRepo::find_documents_resume_grant(&pool, "doc-token-1")
        .await
        .unwrap();
    assert!(gone.is_none(), "non-pending status invalidates the grant");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_documents_token_does_not_resolve(pool: PgPool) {
    let grant = ApplicationRepo::find_documents_resume_grant(&pool, "nope")
        .await
        .unwrap();
    assert!(grant.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_orders_newest_first_and_filters_by_status(pool: PgPool) {
    insert_application(&pool, Some("Oldest Co"), Some("a@example.com"), Some("submitted"), None).await;
    insert_application(&pool, Some("Middle Co"), Some("b@example.com"), Some("pending_documents"), None).await;
    insert_application(&pool, Some("Newest Co"), Some("c@example.com"), Some("submitted"), None).await;

    let all = ApplicationRepo::list(&pool, &ApplicationListParams::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].business_name, "Newest Co");
    assert_eq!(all[2].business_name, "Oldest Co");

    let submitted = ApplicationRepo::list(
        &pool,
        &ApplicationListParams {
            limit: None,
            status: Some(SubmissionStatus::Submitted),
        },
    )
    .await
    .unwrap();
    assert_eq!(submitted.len(), 2);
    assert!(submitted
        .iter()
        .all(|row| row.submission_status.as_deref() == Some("submitted")));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_respects_limit(pool: PgPool) {
    for i in 0..5 {
        insert_application(
            &pool,
            Some(&format!("Co {i}")),
            Some(&format!("user{i}@example.com")),
            Some("submitted"),
            None,
        )
        .await;
    }

    let page = ApplicationRepo::list(
        &pool,
        &ApplicationListParams {
            limit: Some(2),
            status: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(page.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_text_fields_default_to_empty_string(pool: PgPool) {
    insert_application(&pool, None, None, None, None).await;

    let rows = ApplicationRepo::list(&pool, &ApplicationListParams::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].business_name, "");
    assert_eq!(rows[0].email, "");
    assert_eq!(rows[0].state, None);
    assert_eq!(rows[0].submission_status, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolve_documents_token_collapses_store_errors(pool: PgPool) {
    insert_application(
        &pool,
        Some("Blue Harbor Seafood LLC"),
        Some("dana@example.com"),
        Some("pending_documents"),
        Some("doc-token-1"),
    )
    .await;

    pool.close().await;

    let resolved = ApplicationRepo::resolve_documents_token(&pool, "doc-token-1").await;
    assert!(resolved.is_none(), "store errors must collapse to not-found");
}
