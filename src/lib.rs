//! PawMatch Algo - breed-compatibility scoring engine for the PawMatch adoption app
//!
//! This library scores candidate dog breeds against a prospective owner's
//! lifestyle preferences. Seven bounded sub-scores (energy, size, kid
//! friendliness, trainability, space, grooming, social) sum to a 0-100
//! total, each contributing its own human-readable match reasons, and a
//! ranker orders a breed collection by that total.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{compute_score, RankResult, Ranker};
pub use crate::models::{
    BreedProfile, BreedScore, Characteristics, Preferences, RankRequest, RankResponse,
    RankedBreed, ScoreBreakdown,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let breed = BreedProfile {
            breed_id: "beagle".to_string(),
            name: "Beagle".to_string(),
            size: "small".to_string(),
            characteristics: Characteristics::default(),
        };
        let score = compute_score(&breed, &Preferences::default());
        assert!(score.total <= 100);
    }
}
