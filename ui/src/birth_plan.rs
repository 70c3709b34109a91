use std::path::PathBuf;
use std::sync::Arc;

use api::store::BirthPlanRepository;
use api::time::TimeSource;
use payloads::{BirthPlan, BirthPlanSection, ClientId, SectionId};

pub struct BirthPlanViewModel {
    pub plan: Option<BirthPlan>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    repository: Arc<dyn BirthPlanRepository>,
    time_source: TimeSource,
    client_id: ClientId,
}

impl BirthPlanViewModel {
    pub fn new(
        repository: Arc<dyn BirthPlanRepository>,
        time_source: TimeSource,
        client_id: ClientId,
    ) -> Self {
        Self {
            plan: None,
            is_loading: false,
            error_message: None,
            repository,
            time_source,
            client_id,
        }
    }

    pub async fn load(&mut self) {
        self.is_loading = true;
        match self.repository.fetch_birth_plan(self.client_id).await {
            Ok(plan) => self.plan = Some(plan),
            Err(err) => self.error_message = Some(err.to_string()),
        }
        self.is_loading = false;
    }

    /// In-memory edit; nothing is persisted until [`save`](Self::save).
    pub fn update_section(&mut self, section_id: SectionId, body: String) {
        let Some(plan) = self.plan.as_mut() else {
            return;
        };
        if let Some(section) =
            plan.sections.iter_mut().find(|s| s.id == section_id)
        {
            section.body = body;
        }
    }

    pub fn add_section(&mut self) {
        let plan = self.plan.get_or_insert_with(|| {
            BirthPlan::empty(self.client_id, self.time_source.now())
        });
        plan.sections.push(BirthPlanSection {
            id: SectionId::new(),
            title: "New Section".to_string(),
            body: String::new(),
        });
    }

    pub async fn save(&mut self) {
        let Some(mut plan) = self.plan.clone() else {
            return;
        };
        plan.updated_at = self.time_source.now();
        match self.repository.save_birth_plan(&plan).await {
            Ok(saved) => self.plan = Some(saved),
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    pub async fn export_pdf(&mut self) -> Option<PathBuf> {
        let plan = self.plan.clone()?;
        match self.repository.export_birth_plan_pdf(&plan).await {
            Ok(path) => Some(path),
            Err(err) => {
                self.error_message = Some(err.to_string());
                None
            }
        }
    }
}
