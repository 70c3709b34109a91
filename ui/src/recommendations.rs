use std::sync::Arc;

use api::store::RecommendationsRepository;
use api::time::TimeSource;
use payloads::{ClientId, Recommendation};

pub struct RecommendationsViewModel {
    pub recommendation: Option<Recommendation>,
    pub is_saving: bool,
    pub error_message: Option<String>,
    repository: Arc<dyn RecommendationsRepository>,
    time_source: TimeSource,
    client_id: ClientId,
}

impl RecommendationsViewModel {
    pub fn new(
        repository: Arc<dyn RecommendationsRepository>,
        time_source: TimeSource,
        client_id: ClientId,
    ) -> Self {
        Self {
            recommendation: None,
            is_saving: false,
            error_message: None,
            repository,
            time_source,
            client_id,
        }
    }

    pub async fn load(&mut self) {
        match self.repository.fetch_recommendation(self.client_id).await {
            Ok(recommendation) => self.recommendation = Some(recommendation),
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    /// In-memory edit; a missing draft is created on first keystroke.
    pub fn update_content(&mut self, content: String) {
        match self.recommendation.as_mut() {
            Some(recommendation) => recommendation.content = content,
            None => {
                let mut draft = Recommendation::draft(
                    self.client_id,
                    self.time_source.now(),
                );
                draft.content = content;
                self.recommendation = Some(draft);
            }
        }
    }

    pub async fn save(&mut self) {
        let Some(mut recommendation) = self.recommendation.clone() else {
            return;
        };
        self.is_saving = true;
        recommendation.updated_at = self.time_source.now();
        match self.repository.save_recommendation(&recommendation).await {
            Ok(saved) => self.recommendation = Some(saved),
            Err(err) => self.error_message = Some(err.to_string()),
        }
        self.is_saving = false;
    }
}
