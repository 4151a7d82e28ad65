//! Property assessment lead form.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAssessment {
    pub property_type: String,
    pub city: String,
    pub locality: String,
    /// Age in years.
    pub property_age: u32,
    /// Built-up area in square feet.
    pub area: u32,
    pub budget: String,
    pub current_condition: String,
}
