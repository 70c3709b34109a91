use std::sync::Arc;

use api::store::PublicLinkRepository;
use payloads::{ClientId, PublicLink};

pub struct PublicLinkViewModel {
    pub active_link: Option<PublicLink>,
    pub is_processing: bool,
    pub error_message: Option<String>,
    repository: Arc<dyn PublicLinkRepository>,
    client_id: ClientId,
}

impl PublicLinkViewModel {
    pub fn new(
        repository: Arc<dyn PublicLinkRepository>,
        client_id: ClientId,
    ) -> Self {
        Self {
            active_link: None,
            is_processing: false,
            error_message: None,
            repository,
            client_id,
        }
    }

    pub async fn generate(&mut self) {
        self.is_processing = true;
        match self.repository.generate_link(self.client_id).await {
            Ok(link) => self.active_link = Some(link),
            Err(err) => self.error_message = Some(err.to_string()),
        }
        self.is_processing = false;
    }

    pub async fn revoke(&mut self) {
        let Some(link) = self.active_link.clone() else {
            return;
        };
        self.is_processing = true;
        match self.repository.revoke_link(link.id).await {
            Ok(()) => self.active_link = None,
            Err(err) => self.error_message = Some(err.to_string()),
        }
        self.is_processing = false;
    }
}
