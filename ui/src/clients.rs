use std::path::PathBuf;
use std::sync::Arc;

use api::store::ClientsRepository;
use payloads::{Client, ClientId};

pub struct ClientsViewModel {
    pub clients: Vec<Client>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub selected_client: Option<Client>,
    repository: Arc<dyn ClientsRepository>,
}

impl ClientsViewModel {
    pub fn new(repository: Arc<dyn ClientsRepository>) -> Self {
        Self {
            clients: Vec::new(),
            is_loading: false,
            error_message: None,
            selected_client: None,
            repository,
        }
    }

    pub async fn load(&mut self) {
        self.is_loading = true;
        match self.repository.fetch_clients().await {
            Ok(clients) => self.clients = clients,
            Err(err) => self.error_message = Some(err.to_string()),
        }
        self.is_loading = false;
    }

    pub async fn upsert(&mut self, client: Client) {
        match self.repository.upsert_client(client).await {
            Ok(_) => self.load().await,
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    pub async fn delete(&mut self, client_id: ClientId) {
        match self.repository.delete_client(client_id).await {
            Ok(()) => self.load().await,
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    pub async fn export(&mut self, client_id: ClientId) -> Option<PathBuf> {
        match self.repository.export_client_profile(client_id).await {
            Ok(path) => Some(path),
            Err(err) => {
                self.error_message = Some(err.to_string());
                None
            }
        }
    }
}
