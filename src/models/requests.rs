use crate::models::Preferences;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank the breed catalog against a set of preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    pub preferences: Preferences,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: u16,
    /// Breed ids to leave out of the ranking, e.g. breeds already dismissed.
    #[serde(default)]
    pub exclude_breed_ids: Vec<String>,
}

fn default_limit() -> u16 {
    20
}
