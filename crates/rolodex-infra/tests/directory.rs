//! End-to-end directory service tests against the in-memory store and the
//! minijinja renderer.
//!
//! Set `ROLODEX_UPDATE_GOLDEN=1` to rewrite the files under `tests/testdata`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use rolodex_core::repository::user::UserStore;
use rolodex_core::service::directory::DirectoryService;
use rolodex_infra::memory::InMemoryUserStore;
use rolodex_infra::render::TemplateCardRenderer;
use rolodex_types::error::StoreError;
use rolodex_types::user::User;

fn golden_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

fn update_golden() -> bool {
    std::env::var("ROLODEX_UPDATE_GOLDEN").is_ok_and(|v| v == "1")
}

fn directory(
    users: impl IntoIterator<Item = User>,
) -> DirectoryService<InMemoryUserStore, TemplateCardRenderer> {
    let renderer = TemplateCardRenderer::new().unwrap();
    DirectoryService::new(Arc::new(InMemoryUserStore::from_users(users)), renderer)
}

#[tokio::test]
async fn business_card_matches_golden_file() {
    let user = User::new(
        uuid::Uuid::now_v7().to_string(),
        "Mr. Frog",
        "+0-123-45-67-89",
    );
    let svc = directory([user.clone()]);

    let card = svc.make_business_card(&user.id).await.unwrap();

    let path = golden_path(&user.name);
    if update_golden() {
        std::fs::write(&path, &card).unwrap();
    } else {
        let expected = std::fs::read_to_string(&path).unwrap();
        assert_eq!(card, expected);
    }
    assert_eq!(card, "Name: Mr. Frog\nPhone: +0-123-45-67-89");
}

#[tokio::test]
async fn business_card_for_unknown_user_fails() {
    let svc = directory(Vec::<User>::new());

    let err = svc.make_business_card("ghost").await.unwrap_err();

    assert!(err.is_caused_by(&StoreError::NotFound("ghost".to_string())));
    assert_eq!(err.to_string(), "find user: user 'ghost' not found");
}

#[tokio::test]
async fn duplicate_copies_everything_but_the_id() {
    let user = User::new("frog", "Mr. Frog", "+0-123-45-67-89");
    let svc = directory([user.clone()]);

    let new_id = svc.duplicate_user("frog").await.unwrap();
    let copy = svc.store().find_user(&new_id).await.unwrap();

    assert_eq!(new_id, "frog_");
    assert_eq!(copy, User { id: new_id, ..user.clone() });
    assert_eq!(svc.store().find_user("frog").await.unwrap(), user);
    assert_eq!(svc.store().len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicates_converge_on_one_record() {
    let user = User::new("frog", "Mr. Frog", "+0-123-45-67-89");
    let svc = directory([user]);

    let results = join_all((0..16).map(|_| svc.duplicate_user("frog"))).await;

    assert!(results.iter().all(|r| matches!(r, Ok(id) if id == "frog_")));
    assert_eq!(svc.store().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn created_user_becomes_visible() {
    let user = User::new("toad", "Mrs. Toad", "555-0100");
    let svc = directory(Vec::<User>::new());

    svc.create_user(user.clone()).unwrap();

    let found = tokio::time::timeout(Duration::from_secs(60), async {
        loop {
            if let Ok(found) = svc.store().find_user("toad").await {
                return found;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();
    assert_eq!(found, user);

    let card = svc.make_business_card("toad").await.unwrap();
    assert_eq!(card, "Name: Mrs. Toad\nPhone: 555-0100");
}
