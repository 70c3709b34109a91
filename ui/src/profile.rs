use std::path::PathBuf;
use std::sync::Arc;

use api::store::ProfileRepository;
use payloads::DoulaProfile;

pub struct ProfileViewModel {
    pub profile: Option<DoulaProfile>,
    pub is_saving: bool,
    pub export_path: Option<PathBuf>,
    pub share_url: Option<String>,
    pub error_message: Option<String>,
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileViewModel {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self {
            profile: None,
            is_saving: false,
            export_path: None,
            share_url: None,
            error_message: None,
            repository,
        }
    }

    pub async fn load(&mut self) {
        match self.repository.fetch_profile().await {
            Ok(profile) => self.profile = Some(profile),
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    pub async fn save(&mut self) {
        let Some(profile) = self.profile.clone() else {
            return;
        };
        self.is_saving = true;
        match self.repository.save_profile(&profile).await {
            Ok(saved) => self.profile = Some(saved),
            Err(err) => self.error_message = Some(err.to_string()),
        }
        self.is_saving = false;
    }

    pub async fn export_pdf(&mut self) {
        let Some(profile) = self.profile.clone() else {
            return;
        };
        match self.repository.export_profile_pdf(&profile).await {
            Ok(path) => self.export_path = Some(path),
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    /// Publish the public profile page and remember its URL for sharing.
    pub async fn generate_share_link(&mut self) {
        let Some(profile) = self.profile.clone() else {
            return;
        };
        match self
            .repository
            .generate_public_profile_link(&profile)
            .await
        {
            Ok(url) => self.share_url = Some(url),
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }
}
