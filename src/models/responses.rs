use crate::models::domain::RankedBreed;
use serde::{Deserialize, Serialize};

/// Response for a rank request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub matches: Vec<RankedBreed>,
    pub total_candidates: usize,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
