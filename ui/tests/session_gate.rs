//! Every session-scoped operation refuses to touch the network without an
//! active session.

use std::sync::Arc;

use api::auth::SessionHandle;
use api::config::SupabaseConfig;
use api::http::HttpClient;
use api::storage::StorageClient;
use api::store::{
    BirthPlanRepository, ClientsRepository, ProfileRepository, StoreError,
    SupabaseBirthPlanRepository, SupabaseClientsRepository,
    SupabaseProfileRepository,
};
use payloads::ClientId;
use test_helpers::{MemoryCredentialStore, NoopPdfExporter, test_time_source};

fn test_config() -> Arc<SupabaseConfig> {
    Arc::new(SupabaseConfig::new(
        "https://unit-test.invalid".to_string(),
        "anon-key".to_string().into(),
    ))
}

#[tokio::test]
async fn clients_require_a_session() {
    let config = test_config();
    let repository = SupabaseClientsRepository::new(
        HttpClient::new(config),
        SessionHandle::default(),
        test_time_source(),
        Arc::new(NoopPdfExporter),
    );

    assert!(matches!(
        repository.fetch_clients().await,
        Err(StoreError::AuthRequired)
    ));
    assert!(matches!(
        repository.delete_client(ClientId::new()).await,
        Err(StoreError::AuthRequired)
    ));
}

#[tokio::test]
async fn profile_requires_a_session() {
    let config = test_config();
    let repository = SupabaseProfileRepository::new(
        HttpClient::new(config.clone()),
        StorageClient::new(config.clone()),
        config,
        SessionHandle::default(),
        Arc::new(MemoryCredentialStore::default()),
        Arc::new(NoopPdfExporter),
    );

    assert!(matches!(
        repository.fetch_profile().await,
        Err(StoreError::AuthRequired)
    ));
}

#[tokio::test]
async fn birth_plans_require_a_session() {
    let config = test_config();
    let repository = SupabaseBirthPlanRepository::new(
        HttpClient::new(config),
        SessionHandle::default(),
        test_time_source(),
        Arc::new(NoopPdfExporter),
    );

    assert!(matches!(
        repository.fetch_birth_plan(ClientId::new()).await,
        Err(StoreError::AuthRequired)
    ));
}
