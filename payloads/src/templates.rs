//! Bundled starter templates for birth plans and recommendations.
//!
//! The JSON assets ship inside the crate; a malformed bundle degrades to
//! an empty list rather than failing the caller.

use serde::{Deserialize, Serialize};

use crate::BirthPlanSection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthPlanTemplate {
    pub id: String,
    pub title: String,
    pub sections: Vec<BirthPlanSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTemplate {
    pub id: String,
    pub title: String,
    pub content: String,
}

pub fn birth_plan_templates() -> Vec<BirthPlanTemplate> {
    serde_json::from_str(include_str!("../assets/birth_plan_templates.json"))
        .unwrap_or_default()
}

pub fn recommendation_templates() -> Vec<RecommendationTemplate> {
    serde_json::from_str(include_str!(
        "../assets/recommendation_templates.json"
    ))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_templates_parse() {
        let plans = birth_plan_templates();
        assert!(!plans.is_empty());
        assert!(plans.iter().all(|t| !t.sections.is_empty()));

        let recs = recommendation_templates();
        assert!(!recs.is_empty());
        assert!(recs.iter().all(|t| !t.content.is_empty()));
    }
}
