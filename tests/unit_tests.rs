// Unit tests for PawMatch Algo

use pawmatch_algo::core::scoring::{
    compute_score, score_energy, score_grooming, score_kid_friendliness, score_size,
    score_social, score_space, score_trainability,
};
use pawmatch_algo::models::{BreedProfile, Characteristics, Preferences};

fn create_breed(size: &str, characteristics: Characteristics) -> BreedProfile {
    BreedProfile {
        breed_id: "test-breed".to_string(),
        name: "Test Breed".to_string(),
        size: size.to_string(),
        characteristics,
    }
}

fn create_preferences() -> Preferences {
    Preferences {
        activity_level: "moderate".to_string(),
        living_space: "house-medium".to_string(),
        family_size: "couple".to_string(),
        children_ages: vec![],
        experience_level: "some-experience".to_string(),
        size: vec!["any".to_string()],
    }
}

fn all_trait_values(value: f64) -> Characteristics {
    Characteristics {
        energy_level: value,
        exercise_needs: value,
        playfulness: value,
        intelligence: value,
        trainability: value,
        stubborn: value,
        independent: value,
        friendliness: value,
        affectionate: value,
        gentle: value,
        patient: value,
        social: value,
        adaptable: value,
        good_with_kids: value,
        good_with_dogs: value,
        good_with_cats: value,
        good_with_strangers: value,
        protectiveness: value,
        watchdog: value,
        territorial: value,
        prey_drive: value,
        barking_level: value,
        grooming_needs: value,
        shedding: value,
        drooling: value,
        sensitivity: value,
        tolerates_alone: value,
        tolerates_cold: value,
        tolerates_heat: value,
        apartment_friendly: value,
    }
}

#[test]
fn test_every_component_respects_its_bounds() {
    let sizes = ["toy", "small", "medium", "large", "giant"];
    let activity_levels = ["low", "moderate", "high", "unknown"];
    let living_spaces = ["apartment", "house-small", "house-medium", "house-large", ""];
    let experience_levels = ["first-time", "some-experience", "experienced", "very-experienced"];

    for size in sizes {
        for trait_value in [1.0, 5.5, 10.0] {
            let breed = create_breed(size, all_trait_values(trait_value));
            for activity in activity_levels {
                for space in living_spaces {
                    for experience in experience_levels {
                        let preferences = Preferences {
                            activity_level: activity.to_string(),
                            living_space: space.to_string(),
                            family_size: "large-family".to_string(),
                            children_ages: vec!["toddlers".to_string()],
                            experience_level: experience.to_string(),
                            size: vec!["medium".to_string()],
                        };

                        let (energy, _) = score_energy(&breed, &preferences);
                        let (size_score, _) = score_size(&breed, &preferences);
                        let (kids, _) = score_kid_friendliness(&breed, &preferences);
                        let (train, _) = score_trainability(&breed, &preferences);
                        let (space_score, _) = score_space(&breed, &preferences);
                        let (grooming, _) = score_grooming(&breed, &preferences);
                        let (social, _) = score_social(&breed, &preferences);

                        assert!(energy <= 20);
                        assert!(size_score <= 15);
                        assert!(kids <= 15);
                        assert!(train <= 15);
                        assert!(space_score <= 15);
                        assert!((2..=10).contains(&grooming));
                        assert!((1..=10).contains(&social));

                        let total = compute_score(&breed, &preferences).total;
                        assert!(total <= 100, "total {} out of range", total);
                    }
                }
            }
        }
    }
}

#[test]
fn test_energy_perfect_match() {
    let breed = create_breed(
        "medium",
        Characteristics {
            energy_level: 6.0,
            ..Default::default()
        },
    );
    let preferences = create_preferences();

    // moderate maps to 6: diff 0 scores the full 20
    let (score, reasons) = score_energy(&breed, &preferences);

    assert_eq!(score, 20);
    assert!(!reasons.is_empty());
}

#[test]
fn test_energy_seven_point_gap_scores_zero() {
    let breed = create_breed(
        "medium",
        Characteristics {
            energy_level: 10.0,
            ..Default::default()
        },
    );
    let mut preferences = create_preferences();
    preferences.activity_level = "low".to_string();

    let (score, _) = score_energy(&breed, &preferences);

    assert_eq!(score, 0);
}

#[test]
fn test_size_any_overrides_breed_size() {
    let preferences = create_preferences();

    for size in ["toy", "small", "medium", "large", "giant"] {
        let breed = create_breed(size, Characteristics::default());
        let (score, _) = score_size(&breed, &preferences);
        assert_eq!(score, 15, "size={} should score 15 with 'any'", size);
    }
}

#[test]
fn test_unknown_preference_tokens_degrade_gracefully() {
    let breed = create_breed("medium", all_trait_values(5.0));
    let preferences = Preferences {
        activity_level: "hyperactive".to_string(),
        living_space: "spaceship".to_string(),
        family_size: "commune".to_string(),
        children_ages: vec!["teenagers".to_string()],
        experience_level: "expert".to_string(),
        size: vec!["medium".to_string()],
    };

    // Nothing panics and the total stays in range
    let score = compute_score(&breed, &preferences);
    assert!(score.total <= 100);

    // Unknown activity falls back to 5: breed energy 5 gives diff 0
    assert_eq!(score.breakdown.energy, 20);
}

#[test]
fn test_malformed_field_affects_only_its_component() {
    let breed = create_breed("medium", all_trait_values(6.0));

    let mut well_formed = create_preferences();
    well_formed.activity_level = "moderate".to_string();
    let mut malformed = well_formed.clone();
    malformed.experience_level = "grandmaster".to_string();

    let baseline = compute_score(&breed, &well_formed);
    let degraded = compute_score(&breed, &malformed);

    // Only the trainability component may differ
    assert_eq!(baseline.breakdown.energy, degraded.breakdown.energy);
    assert_eq!(baseline.breakdown.size, degraded.breakdown.size);
    assert_eq!(
        baseline.breakdown.kid_friendliness,
        degraded.breakdown.kid_friendliness
    );
    assert_eq!(baseline.breakdown.space, degraded.breakdown.space);
    assert_eq!(baseline.breakdown.grooming, degraded.breakdown.grooming);
    assert_eq!(baseline.breakdown.social, degraded.breakdown.social);
}

#[test]
fn test_reason_strings_are_deterministic() {
    let breed = create_breed(
        "large",
        Characteristics {
            energy_level: 9.0,
            friendliness: 9.0,
            trainability: 8.0,
            ..Default::default()
        },
    );
    let mut preferences = create_preferences();
    preferences.activity_level = "high".to_string();
    preferences.experience_level = "very-experienced".to_string();

    let first = compute_score(&breed, &preferences);
    let second = compute_score(&breed, &preferences);

    assert_eq!(first.match_reasons, second.match_reasons);
    assert_eq!(first, second);
}

#[test]
fn test_breed_score_json_shape() {
    let breed = create_breed(
        "small",
        Characteristics {
            energy_level: 6.0,
            ..Default::default()
        },
    );
    let score = compute_score(&breed, &create_preferences());

    let json = serde_json::to_value(&score).unwrap();
    assert!(json.get("total").is_some());
    assert!(json.get("matchReasons").unwrap().is_array());

    let breakdown = json.get("breakdown").unwrap();
    for component in [
        "energy",
        "size",
        "kidFriendliness",
        "trainability",
        "space",
        "grooming",
        "social",
    ] {
        assert!(breakdown.get(component).is_some(), "missing {component}");
    }
}
