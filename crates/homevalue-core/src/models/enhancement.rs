//! Renovation enhancement catalog models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    #[serde(rename = "Long Term")]
    LongTerm,
}

/// Card-level view of an enhancement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementSummary {
    pub id: String,
    pub title: String,
    pub short: String,
    pub category: String,
    pub cost_range: String,
    pub roi: String,
    pub duration: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,
    pub qty: Option<String>,
    pub est_cost: Option<String>,
}

/// Full enhancement record shown in the detail modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancementDetail {
    #[serde(flatten)]
    pub summary: EnhancementSummary,
    pub long_description: String,
    pub materials: Vec<Material>,
    pub steps: Vec<String>,
}

impl EnhancementDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_term_impact_uses_display_name() {
        assert_eq!(
            serde_json::to_string(&Impact::LongTerm).unwrap(),
            r#""Long Term""#
        );
        let parsed: Impact = serde_json::from_str(r#""Long Term""#).unwrap();
        assert_eq!(parsed, Impact::LongTerm);
    }

    #[test]
    fn detail_flattens_summary_fields() {
        let detail = EnhancementDetail {
            summary: EnhancementSummary {
                id: "paint".into(),
                title: "Fresh Interior Paint".into(),
                short: "short".into(),
                category: "Interior".into(),
                cost_range: "low".into(),
                roi: "+15% Value".into(),
                duration: "3-5 days".into(),
                impact: Impact::High,
            },
            long_description: "long".into(),
            materials: vec![],
            steps: vec!["one".into()],
        };

        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], "paint");
        assert_eq!(value["costRange"], "low");
        assert_eq!(value["longDescription"], "long");
        assert_eq!(detail.id(), "paint");
    }
}
