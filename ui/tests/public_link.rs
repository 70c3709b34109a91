use std::sync::Arc;

use api::store::PublicLinkRepository;
use test_helpers::{MockDataStore, test_time_source};
use ui::PublicLinkViewModel;

#[tokio::test]
async fn generate_twice_reuses_the_same_token() -> anyhow::Result<()> {
    let time_source = test_time_source();
    let store = Arc::new(MockDataStore::new(time_source.clone()));
    let client_id = store.client_ids()[0];

    let first = store.generate_link(client_id).await?;
    time_source.advance(jiff::Span::new().hours(2));
    let second = store.generate_link(client_id).await?;

    assert_eq!(first.token, second.token);
    assert_eq!(first.id, second.id);
    Ok(())
}

#[tokio::test]
async fn tokens_are_opaque_hex() -> anyhow::Result<()> {
    let store = Arc::new(MockDataStore::new(test_time_source()));
    let client_id = store.client_ids()[0];

    let link = store.generate_link(client_id).await?;
    assert_eq!(link.token.len(), 32);
    assert!(link.token.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(link.expires_at.is_some());
    assert!(!link.disabled);
    Ok(())
}

#[tokio::test]
async fn revoking_rotates_the_next_token() -> anyhow::Result<()> {
    let store = Arc::new(MockDataStore::new(test_time_source()));
    let client_id = store.client_ids()[0];
    let mut view_model =
        PublicLinkViewModel::new(store.clone(), client_id);

    view_model.generate().await;
    let first = view_model.active_link.clone().expect("link generated");

    view_model.revoke().await;
    assert!(view_model.active_link.is_none());
    assert!(view_model.error_message.is_none());

    view_model.generate().await;
    let second = view_model.active_link.clone().expect("new link");
    assert_ne!(first.token, second.token);
    Ok(())
}

#[tokio::test]
async fn each_client_gets_its_own_link() -> anyhow::Result<()> {
    let store = Arc::new(MockDataStore::new(test_time_source()));
    let ids = store.client_ids();

    let first = store.generate_link(ids[0]).await?;
    let second = store.generate_link(ids[1]).await?;

    assert_ne!(first.token, second.token);
    assert_eq!(first.client_id, ids[0]);
    assert_eq!(second.client_id, ids[1]);
    Ok(())
}

#[tokio::test]
async fn share_url_is_rooted_at_the_cabinet_base() -> anyhow::Result<()> {
    let store = Arc::new(MockDataStore::new(test_time_source()));
    let client_id = store.client_ids()[0];

    let link = store.generate_link(client_id).await?;
    let url = link
        .share_url("https://xyz.supabase.co/storage/v1/object/public/public_cabinets/c")
        .expect("share url");
    assert!(url.ends_with(&format!("/{}/index.html", link.token)));
    Ok(())
}
