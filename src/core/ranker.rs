use crate::core::scoring::compute_score;
use crate::models::{BreedProfile, Preferences, RankedBreed};
use rayon::prelude::*;

/// Result of ranking a breed collection.
#[derive(Debug)]
pub struct RankResult {
    pub ranked: Vec<RankedBreed>,
    pub total_candidates: usize,
}

/// Applies the scorer across a breed collection and orders the results.
///
/// Scoring is pure, so the map over candidates runs in parallel; the sort
/// is the only sequential step. Ordering is descending by total score with
/// ties broken by ascending breed name, which keeps repeated runs on the
/// same input set stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Score every breed against the preferences and sort the results.
    pub fn rank(&self, preferences: &Preferences, breeds: Vec<BreedProfile>) -> RankResult {
        let total_candidates = breeds.len();

        let mut ranked: Vec<RankedBreed> = breeds
            .into_par_iter()
            .map(|breed| {
                let score = compute_score(&breed, preferences);
                RankedBreed {
                    breed_id: breed.breed_id,
                    name: breed.name,
                    size: breed.size,
                    score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total
                .cmp(&a.score.total)
                .then_with(|| a.name.cmp(&b.name))
        });

        tracing::debug!(
            "Ranked {} breeds, top score: {}",
            total_candidates,
            ranked.first().map(|r| r.score.total).unwrap_or(0)
        );

        RankResult {
            ranked,
            total_candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Characteristics;

    fn create_breed(id: &str, name: &str, size: &str, energy: f64) -> BreedProfile {
        BreedProfile {
            breed_id: id.to_string(),
            name: name.to_string(),
            size: size.to_string(),
            characteristics: Characteristics {
                energy_level: energy,
                ..Default::default()
            },
        }
    }

    fn create_preferences() -> Preferences {
        Preferences {
            activity_level: "high".to_string(),
            living_space: "house-medium".to_string(),
            family_size: "couple".to_string(),
            children_ages: vec![],
            experience_level: "experienced".to_string(),
            size: vec!["any".to_string()],
        }
    }

    #[test]
    fn test_rank_orders_by_total_descending() {
        let ranker = Ranker::new();
        let preferences = create_preferences();

        // high activity maps to 9: closer energy wins
        let breeds = vec![
            create_breed("1", "Low Energy", "medium", 3.0),
            create_breed("2", "High Energy", "medium", 9.0),
            create_breed("3", "Mid Energy", "medium", 6.0),
        ];

        let result = ranker.rank(&preferences, breeds);

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.ranked[0].breed_id, "2");
        for window in result.ranked.windows(2) {
            assert!(window[0].score.total >= window[1].score.total);
        }
    }

    #[test]
    fn test_rank_breaks_ties_by_name() {
        let ranker = Ranker::new();
        let preferences = create_preferences();

        // Identical characteristics, identical totals
        let breeds = vec![
            create_breed("b", "Beagle", "medium", 9.0),
            create_breed("a", "Akita", "medium", 9.0),
        ];

        let result = ranker.rank(&preferences, breeds);

        assert_eq!(result.ranked[0].score.total, result.ranked[1].score.total);
        assert_eq!(result.ranked[0].name, "Akita");
        assert_eq!(result.ranked[1].name, "Beagle");
    }

    #[test]
    fn test_rank_is_stable_across_runs() {
        let ranker = Ranker::new();
        let preferences = create_preferences();

        let breeds: Vec<BreedProfile> = (0..50)
            .map(|i| {
                create_breed(
                    &format!("breed-{i}"),
                    &format!("Breed {i:02}"),
                    "medium",
                    1.0 + (i % 10) as f64,
                )
            })
            .collect();

        let first = ranker.rank(&preferences, breeds.clone());
        let second = ranker.rank(&preferences, breeds);

        let first_ids: Vec<_> = first.ranked.iter().map(|r| &r.breed_id).collect();
        let second_ids: Vec<_> = second.ranked.iter().map(|r| &r.breed_id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_rank_empty_collection() {
        let ranker = Ranker::new();
        let result = ranker.rank(&create_preferences(), vec![]);

        assert!(result.ranked.is_empty());
        assert_eq!(result.total_candidates, 0);
    }
}
