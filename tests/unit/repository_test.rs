//! Tests for the caching repository

use chrono::{TimeZone, Utc};

use tasktrack::core::models::NewAssignment;
use tasktrack::error::Error;
use tasktrack::store::Repository;

use crate::common::{AssignmentBuilder, InMemoryStore, UnavailableStore};

fn due(day: u32, hour: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
}

// =============================================================================
// LISTING AND CACHING
// =============================================================================

#[tokio::test]
async fn list_returns_rows_sorted_by_due_date() {
    let store = InMemoryStore::with_rows(vec![
        AssignmentBuilder::new().id("late").due_at(due(20, 12)).build(),
        AssignmentBuilder::new().id("early").due_at(due(11, 9)).build(),
        AssignmentBuilder::new().id("middle").due_at(due(15, 9)).build(),
    ]);
    let repo = Repository::new(store);

    let rows = repo.list().await.unwrap();
    let ids: Vec<&str> = rows.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "middle", "late"]);
}

#[tokio::test]
async fn repeated_lists_serve_the_cache() {
    let repo = Repository::new(InMemoryStore::with_rows(vec![AssignmentBuilder::new().build()]));

    repo.list().await.unwrap();
    repo.list().await.unwrap();
    repo.list().await.unwrap();

    assert_eq!(repo.store().fetch_count(), 1);
}

#[tokio::test]
async fn create_invalidates_the_cached_list() {
    let repo = Repository::new(InMemoryStore::new());

    assert!(repo.list().await.unwrap().is_empty());

    let new = NewAssignment::new("Essay draft", "English 10", due(11, 9));
    repo.create(new).await.unwrap();

    let rows = repo.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(repo.store().fetch_count(), 2);
}

#[tokio::test]
async fn set_completed_invalidates_the_cached_list() {
    let repo = Repository::new(InMemoryStore::with_rows(vec![
        AssignmentBuilder::new().id("a-1").build(),
    ]));

    repo.list().await.unwrap();
    repo.set_completed("a-1", true).await.unwrap();

    let rows = repo.list().await.unwrap();
    assert!(rows[0].completed);
    assert_eq!(repo.store().fetch_count(), 2);
}

#[tokio::test]
async fn delete_invalidates_the_cached_list() {
    let repo = Repository::new(InMemoryStore::with_rows(vec![
        AssignmentBuilder::new().id("a-1").build(),
    ]));

    repo.list().await.unwrap();
    repo.delete("a-1").await.unwrap();

    assert!(repo.list().await.unwrap().is_empty());
    assert_eq!(repo.store().fetch_count(), 2);
}

// =============================================================================
// VALIDATION
// =============================================================================

#[tokio::test]
async fn whitespace_name_fails_before_any_store_call() {
    let repo = Repository::new(InMemoryStore::new());

    // Scenario: name = "  " must fail validation without reaching the store
    let new = NewAssignment::new("  ", "English 10", due(11, 9));
    let err = repo.create(new).await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(repo.store().insert_count(), 0);
}

#[tokio::test]
async fn empty_class_fails_before_any_store_call() {
    let repo = Repository::new(InMemoryStore::new());

    let new = NewAssignment::new("Essay draft", "", due(11, 9));
    let err = repo.create(new).await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(repo.store().insert_count(), 0);
}

// =============================================================================
// MUTATIONS
// =============================================================================

#[tokio::test]
async fn set_completed_is_idempotent() {
    let repo = Repository::new(InMemoryStore::with_rows(vec![
        AssignmentBuilder::new().id("a-1").build(),
    ]));

    let first = repo.set_completed("a-1", true).await.unwrap();
    let second = repo.set_completed("a-1", true).await.unwrap();

    assert!(first.completed);
    assert!(second.completed);
    assert!(repo.list().await.unwrap()[0].completed);
}

#[tokio::test]
async fn set_completed_unknown_id_is_not_found() {
    let repo = Repository::new(InMemoryStore::new());
    let err = repo.set_completed("missing", true).await.unwrap_err();
    assert_eq!(err, Error::not_found("missing"));
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let repo = Repository::new(InMemoryStore::new());
    let err = repo.delete("missing").await.unwrap_err();
    assert_eq!(err, Error::not_found("missing"));
}

#[tokio::test]
async fn transport_failure_surfaces_as_store_unavailable() {
    let repo = Repository::new(UnavailableStore);

    assert!(matches!(repo.list().await.unwrap_err(), Error::StoreUnavailable(_)));
    let new = NewAssignment::new("Essay draft", "English 10", due(11, 9));
    assert!(matches!(repo.create(new).await.unwrap_err(), Error::StoreUnavailable(_)));
}

// =============================================================================
// ID RESOLUTION
// =============================================================================

#[tokio::test]
async fn resolve_id_accepts_exact_id() {
    let repo = Repository::new(InMemoryStore::with_rows(vec![
        AssignmentBuilder::new().id("abcd1234-xyz").build(),
    ]));
    assert_eq!(repo.resolve_id("abcd1234-xyz").await.unwrap(), "abcd1234-xyz");
}

#[tokio::test]
async fn resolve_id_accepts_unique_prefix() {
    let repo = Repository::new(InMemoryStore::with_rows(vec![
        AssignmentBuilder::new().id("abcd1234-xyz").build(),
        AssignmentBuilder::new().id("efgh5678-xyz").build(),
    ]));
    assert_eq!(repo.resolve_id("abcd").await.unwrap(), "abcd1234-xyz");
}

#[tokio::test]
async fn resolve_id_rejects_ambiguous_prefix() {
    let repo = Repository::new(InMemoryStore::with_rows(vec![
        AssignmentBuilder::new().id("abcd1234-xyz").build(),
        AssignmentBuilder::new().id("abcd5678-xyz").build(),
    ]));
    assert!(matches!(repo.resolve_id("abcd").await.unwrap_err(), Error::Validation(_)));
}

#[tokio::test]
async fn resolve_id_unknown_is_not_found() {
    let repo = Repository::new(InMemoryStore::new());
    assert_eq!(repo.resolve_id("nope").await.unwrap_err(), Error::not_found("nope"));
}
