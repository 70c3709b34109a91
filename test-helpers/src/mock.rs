//! In-memory backend honoring the same invariants as the Supabase
//! repositories: due-date-ordered listings, derived pregnancy week,
//! cascade delete, one active link per client.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use api::credential::{CredentialError, CredentialStore};
use api::pdf::{PdfError, PdfExporter};
use api::pregnancy;
use api::store::{
    BirthPlanRepository, ClientsRepository, ProfileRepository,
    PublicLinkRepository, RecommendationsRepository, StoreError,
};
use api::time::TimeSource;
use api::token::random_token;
use async_trait::async_trait;
use jiff::Span;
use payloads::{
    AttachmentId, AttachmentKind, BirthPlan, Client, ClientId, DoulaProfile,
    LinkId, PublicLink, Recommendation, RecommendationAttachment,
};
use reqwest::StatusCode;

pub struct MockDataStore {
    time_source: TimeSource,
    inner: Mutex<Inner>,
}

struct Inner {
    profile: DoulaProfile,
    profile_token: Option<String>,
    clients: Vec<Client>,
    birth_plans: HashMap<ClientId, BirthPlan>,
    recommendations: HashMap<ClientId, Recommendation>,
    public_links: HashMap<LinkId, PublicLink>,
    offline: bool,
}

impl MockDataStore {
    /// Store seeded with the sample profile, two clients, and their plans
    /// and recommendations.
    pub fn new(time_source: TimeSource) -> Self {
        let profile = crate::sample::doula_profile();
        let clients =
            crate::sample::clients(profile.id, time_source.today());
        let now = time_source.now();
        let birth_plans = clients
            .iter()
            .map(|client| (client.id, crate::sample::birth_plan(client, now)))
            .collect();
        let recommendations = clients
            .iter()
            .map(|client| {
                (client.id, crate::sample::recommendation(client, now))
            })
            .collect();
        Self {
            time_source,
            inner: Mutex::new(Inner {
                profile,
                profile_token: None,
                clients,
                birth_plans,
                recommendations,
                public_links: HashMap::new(),
                offline: false,
            }),
        }
    }

    /// While offline, every operation fails like an unreachable backend.
    pub fn set_offline(&self, offline: bool) {
        self.inner.lock().unwrap().offline = offline;
    }

    pub fn client_ids(&self) -> Vec<ClientId> {
        self.inner
            .lock()
            .unwrap()
            .clients
            .iter()
            .map(|client| client.id)
            .collect()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        let guard = self.inner.lock().unwrap();
        if guard.offline {
            return Err(StoreError::Api(
                StatusCode::SERVICE_UNAVAILABLE,
                "backend offline".to_string(),
            ));
        }
        Ok(guard)
    }
}

#[async_trait]
impl ProfileRepository for MockDataStore {
    async fn fetch_profile(&self) -> Result<DoulaProfile, StoreError> {
        Ok(self.guard()?.profile.clone())
    }

    async fn save_profile(
        &self,
        profile: &DoulaProfile,
    ) -> Result<DoulaProfile, StoreError> {
        let mut inner = self.guard()?;
        inner.profile = profile.clone();
        Ok(inner.profile.clone())
    }

    async fn export_profile_pdf(
        &self,
        _profile: &DoulaProfile,
    ) -> Result<PathBuf, StoreError> {
        Ok(PathBuf::from("/tmp/profile.pdf"))
    }

    async fn generate_public_profile_link(
        &self,
        _profile: &DoulaProfile,
    ) -> Result<String, StoreError> {
        let mut inner = self.guard()?;
        let token = inner
            .profile_token
            .get_or_insert_with(random_token)
            .clone();
        Ok(format!(
            "https://mock.storage/public_profiles/p/{token}/index.html"
        ))
    }
}

#[async_trait]
impl ClientsRepository for MockDataStore {
    async fn fetch_clients(&self) -> Result<Vec<Client>, StoreError> {
        let inner = self.guard()?;
        let mut clients = inner.clients.clone();
        clients.sort_by_key(|client| client.estimated_due_date);
        Ok(clients)
    }

    async fn upsert_client(
        &self,
        mut client: Client,
    ) -> Result<Client, StoreError> {
        client.pregnancy_week = pregnancy::week(
            client.estimated_due_date,
            self.time_source.today(),
            pregnancy::DEFAULT_TOTAL_WEEKS,
        );
        let mut inner = self.guard()?;
        match inner.clients.iter_mut().find(|c| c.id == client.id) {
            Some(existing) => *existing = client.clone(),
            None => inner.clients.push(client.clone()),
        }
        Ok(client)
    }

    async fn delete_client(
        &self,
        client_id: ClientId,
    ) -> Result<(), StoreError> {
        let mut inner = self.guard()?;
        inner.clients.retain(|client| client.id != client_id);
        inner.birth_plans.remove(&client_id);
        inner.recommendations.remove(&client_id);
        inner
            .public_links
            .retain(|_, link| link.client_id != client_id);
        Ok(())
    }

    async fn export_client_profile(
        &self,
        client_id: ClientId,
    ) -> Result<PathBuf, StoreError> {
        let inner = self.guard()?;
        if !inner.clients.iter().any(|client| client.id == client_id) {
            return Err(StoreError::NotFound("client"));
        }
        Ok(PathBuf::from(format!("/tmp/client-{client_id}.pdf")))
    }
}

#[async_trait]
impl BirthPlanRepository for MockDataStore {
    async fn fetch_birth_plan(
        &self,
        client_id: ClientId,
    ) -> Result<BirthPlan, StoreError> {
        self.guard()?
            .birth_plans
            .get(&client_id)
            .cloned()
            .ok_or(StoreError::NotFound("birth plan"))
    }

    async fn save_birth_plan(
        &self,
        plan: &BirthPlan,
    ) -> Result<BirthPlan, StoreError> {
        let mut inner = self.guard()?;
        inner.birth_plans.insert(plan.client_id, plan.clone());
        Ok(plan.clone())
    }

    async fn export_birth_plan_pdf(
        &self,
        plan: &BirthPlan,
    ) -> Result<PathBuf, StoreError> {
        Ok(PathBuf::from(format!("/tmp/birthplan-{}.pdf", plan.client_id)))
    }
}

#[async_trait]
impl RecommendationsRepository for MockDataStore {
    async fn fetch_recommendation(
        &self,
        client_id: ClientId,
    ) -> Result<Recommendation, StoreError> {
        self.guard()?
            .recommendations
            .get(&client_id)
            .cloned()
            .ok_or(StoreError::NotFound("recommendation"))
    }

    async fn save_recommendation(
        &self,
        recommendation: &Recommendation,
    ) -> Result<Recommendation, StoreError> {
        let mut inner = self.guard()?;
        inner
            .recommendations
            .insert(recommendation.client_id, recommendation.clone());
        Ok(recommendation.clone())
    }

    async fn upload_attachment(
        &self,
        client_id: ClientId,
        file_name: &str,
        _bytes: Vec<u8>,
    ) -> Result<RecommendationAttachment, StoreError> {
        self.guard()?;
        let attachment_id = AttachmentId::new();
        Ok(RecommendationAttachment {
            id: attachment_id,
            file_name: file_name.to_string(),
            url: format!(
                "https://mock.storage/client_files/clients/{client_id}/{attachment_id}-{file_name}"
            ),
            kind: AttachmentKind::from_file_name(file_name),
        })
    }

    async fn delete_attachment(
        &self,
        _client_id: ClientId,
        _attachment_id: AttachmentId,
    ) -> Result<(), StoreError> {
        self.guard()?;
        Ok(())
    }
}

#[async_trait]
impl PublicLinkRepository for MockDataStore {
    async fn generate_link(
        &self,
        client_id: ClientId,
    ) -> Result<PublicLink, StoreError> {
        let now = self.time_source.now();
        let mut inner = self.guard()?;
        if !inner.clients.iter().any(|client| client.id == client_id) {
            return Err(StoreError::NotFound("client"));
        }

        if let Some(existing) = inner
            .public_links
            .values()
            .filter(|link| link.client_id == client_id && !link.disabled)
            .max_by_key(|link| link.created_at)
        {
            return Ok(existing.clone());
        }

        let link = PublicLink {
            id: LinkId::new(),
            client_id,
            token: random_token(),
            created_at: now,
            expires_at: now.checked_add(Span::new().hours(24 * 30)).ok(),
            disabled: false,
        };
        inner.public_links.insert(link.id, link.clone());
        Ok(link)
    }

    async fn revoke_link(&self, link_id: LinkId) -> Result<(), StoreError> {
        let mut inner = self.guard()?;
        let link = inner
            .public_links
            .get_mut(&link_id)
            .ok_or(StoreError::NotFound("link"))?;
        link.disabled = true;
        Ok(())
    }
}

/// Credential store backed by a map; stands in for the platform keychain.
#[derive(Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn get(
        &self,
        service: &str,
        account: &str,
    ) -> Result<Option<Vec<u8>>, CredentialError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(service.to_string(), account.to_string()))
            .cloned())
    }

    fn set(
        &self,
        service: &str,
        account: &str,
        value: &[u8],
    ) -> Result<(), CredentialError> {
        self.entries
            .lock()
            .unwrap()
            .insert((service.to_string(), account.to_string()), value.to_vec());
        Ok(())
    }

    fn delete(
        &self,
        service: &str,
        account: &str,
    ) -> Result<(), CredentialError> {
        self.entries
            .lock()
            .unwrap()
            .remove(&(service.to_string(), account.to_string()));
        Ok(())
    }
}

/// PDF exporter that writes nothing and reports a fixed path.
pub struct NoopPdfExporter;

impl PdfExporter for NoopPdfExporter {
    fn profile_document(
        &self,
        _profile: &DoulaProfile,
    ) -> Result<PathBuf, PdfError> {
        Ok(PathBuf::from("/tmp/profile.pdf"))
    }

    fn client_document(&self, client: &Client) -> Result<PathBuf, PdfError> {
        Ok(PathBuf::from(format!("/tmp/client-{}.pdf", client.id)))
    }

    fn birth_plan_document(
        &self,
        plan: &BirthPlan,
    ) -> Result<PathBuf, PdfError> {
        Ok(PathBuf::from(format!("/tmp/birthplan-{}.pdf", plan.client_id)))
    }
}
