//! Store integration tests against a live PostgreSQL instance.
//!
//! Run with `DATABASE_URL` pointing at a scratch database:
//! `cargo test -p ghostwriter_database -- --ignored`

use ghostwriter_core::ContentKind;
use ghostwriter_database::{
    ContentChanges, ContentStore, NewContent, Pagination, ProfilePatch, ProfileStore, create_pool,
    run_migrations,
};
use ghostwriter_error::{ContentErrorKind, GhostwriterErrorKind};
use uuid::Uuid;

fn test_pool() -> ghostwriter_database::PgPool {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let pool = create_pool(&url, 2).expect("pool");
    run_migrations(&pool).expect("migrations");
    pool
}

fn sample_content(title: &str) -> NewContent {
    NewContent::builder()
        .kind(ContentKind::Blog)
        .title(title)
        .body("Hello world")
        .tone(Some("casual".to_string()))
        .build()
        .expect("valid content")
}

#[test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
fn create_then_list_scopes_by_owner() {
    let store = ContentStore::new(test_pool());
    let author = Uuid::new_v4();
    let other = Uuid::new_v4();

    let created = store.create(author, &sample_content("Test")).expect("create");
    assert_eq!(created.slug(), "test");
    assert!(!created.published());

    let mine = store
        .list_by_author(author, Some(ContentKind::Blog), Pagination::default())
        .expect("list");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].title(), "Test");

    let theirs = store
        .list_by_author(other, None, Pagination::default())
        .expect("list");
    assert!(theirs.is_empty());
}

#[test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
fn duplicate_title_is_rejected_atomically() {
    let store = ContentStore::new(test_pool());
    let author = Uuid::new_v4();

    store.create(author, &sample_content("Once")).expect("first");
    let err = store.create(author, &sample_content("Once")).unwrap_err();
    assert!(matches!(
        err.kind(),
        GhostwriterErrorKind::Content(e) if matches!(&e.kind, ContentErrorKind::Duplicate { title } if title == "Once")
    ));

    // A different author may reuse the title.
    store
        .create(Uuid::new_v4(), &sample_content("Once"))
        .expect("other author");
}

#[test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
fn foreign_mutation_is_not_found() {
    let store = ContentStore::new(test_pool());
    let author = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let item = store.create(author, &sample_content("Mine")).expect("create");

    let changes = ContentChanges {
        body: Some("edited".to_string()),
        ..Default::default()
    };
    for err in [
        store.update(*item.id(), stranger, &changes).unwrap_err(),
        store.delete(*item.id(), stranger).unwrap_err(),
        store.publish(*item.id(), stranger).unwrap_err(),
    ] {
        assert!(matches!(
            err.kind(),
            GhostwriterErrorKind::Content(e)
                if matches!(e.kind, ContentErrorKind::NotFoundOrUnauthorized)
        ));
    }
}

#[test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
fn publish_is_one_way_and_idempotent() {
    let store = ContentStore::new(test_pool());
    let author = Uuid::new_v4();

    let item = store.create(author, &sample_content("Draft")).expect("create");
    let published = store.publish(*item.id(), author).expect("publish");
    assert!(*published.published());
    let first_stamp = published.published_at().as_ref().expect("stamped");

    // Second publish keeps the original timestamp.
    let again = store.publish(*item.id(), author).expect("republish");
    assert!(*again.published());
    assert_eq!(again.published_at().as_ref().expect("stamped"), first_stamp);

    let public = store.find_published(*item.id()).expect("public fetch");
    assert_eq!(public.title(), "Draft");
}

#[test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
fn profile_patch_preserves_unmentioned_arrays() {
    let store = ProfileStore::new(test_pool());
    let user = Uuid::new_v4();

    let patch = ProfilePatch {
        preferred_tones: Some(vec!["formal".to_string()]),
        ..Default::default()
    };
    store.apply_patch(user, &patch).expect("first patch");

    let patch = ProfilePatch {
        favorite_topics: Some(vec!["x".to_string()]),
        ..Default::default()
    };
    let profile = store.apply_patch(user, &patch).expect("second patch");

    assert_eq!(profile.preferred_tones(), &["formal".to_string()]);
    assert_eq!(profile.favorite_topics(), &["x".to_string()]);
}
