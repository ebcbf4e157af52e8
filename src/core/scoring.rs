use crate::core::tables;
use crate::models::{BreedProfile, BreedScore, Preferences, ScoreBreakdown};

/// Compute the compatibility score (0-100) for one breed against one set of
/// owner preferences.
///
/// The total is the plain sum of seven bounded sub-scores:
///
/// ```text
/// energy (max 20) + size (max 15) + kid friendliness (max 15)
/// + trainability (max 15) + space (max 15)
/// + grooming (2-10) + social (1-10)
/// ```
///
/// The caps already encode relative importance, so no further weighting is
/// applied. Match reasons are concatenated in the same fixed order, and the
/// whole computation is a pure function of its inputs: identical inputs
/// always produce an identical `BreedScore`, reasons included.
pub fn compute_score(breed: &BreedProfile, preferences: &Preferences) -> BreedScore {
    let (energy, energy_reasons) = score_energy(breed, preferences);
    let (size, size_reasons) = score_size(breed, preferences);
    let (kid_friendliness, kid_reasons) = score_kid_friendliness(breed, preferences);
    let (trainability, trainability_reasons) = score_trainability(breed, preferences);
    let (space, space_reasons) = score_space(breed, preferences);
    let (grooming, grooming_reasons) = score_grooming(breed, preferences);
    let (social, social_reasons) = score_social(breed, preferences);

    let breakdown = ScoreBreakdown {
        energy,
        size,
        kid_friendliness,
        trainability,
        space,
        grooming,
        social,
    };

    // Fixed reason order; duplicates are allowed and never deduplicated.
    let mut match_reasons = energy_reasons;
    match_reasons.extend(size_reasons);
    match_reasons.extend(kid_reasons);
    match_reasons.extend(trainability_reasons);
    match_reasons.extend(space_reasons);
    match_reasons.extend(grooming_reasons);
    match_reasons.extend(social_reasons);

    BreedScore {
        total: breakdown.sum(),
        breakdown,
        match_reasons,
    }
}

/// Round a fractional point value into a non-negative score.
#[inline]
fn round_points(points: f64) -> u8 {
    points.round().max(0.0) as u8
}

/// Energy match (max 20).
///
/// The owner's activity level maps to an energy value on the breed's 1-10
/// scale; the score decays by 3 points per unit of mismatch.
pub fn score_energy(breed: &BreedProfile, preferences: &Preferences) -> (u8, Vec<String>) {
    let user_energy = tables::lookup(
        tables::ACTIVITY_ENERGY,
        &preferences.activity_level,
        tables::DEFAULT_ACTIVITY_ENERGY,
    );
    let breed_energy = breed.characteristics.energy_level;
    let diff = (user_energy - breed_energy).abs();

    let score = round_points((20.0 - diff * 3.0).max(0.0)).min(tables::ENERGY_CAP);

    let mut reasons = Vec::new();
    if diff <= 1.0 {
        let text = match preferences.activity_level.as_str() {
            "high" => "Great energy level for active families",
            "low" => "Calm energy level, perfect for a relaxed lifestyle",
            _ => "Well-matched energy level for your routine",
        };
        reasons.push(text.to_string());
    } else if breed_energy > user_energy + 2.0 {
        reasons.push("May need more exercise than you prefer".to_string());
    } else if breed_energy < user_energy - 2.0 {
        reasons.push("Lower energy breed, may not match an active lifestyle".to_string());
    }

    (score, reasons)
}

/// Size match (max 15).
///
/// An empty preference set or the `any` sentinel accepts every size.
pub fn score_size(breed: &BreedProfile, preferences: &Preferences) -> (u8, Vec<String>) {
    let breed_size = breed.size.to_lowercase();

    if preferences.any_size() {
        return (
            tables::SIZE_CAP,
            vec!["This size works well for your home".to_string()],
        );
    }

    if preferences
        .size
        .iter()
        .any(|wanted| wanted.to_lowercase() == breed_size)
    {
        (
            tables::SIZE_CAP,
            vec!["Perfect size match for your preference".to_string()],
        )
    } else {
        (3, vec!["Size doesn't match your preference".to_string()])
    }
}

/// Kid friendliness (max 15).
///
/// Households without children score the breed on general friendliness.
/// With infants or toddlers present, gentleness and patience weigh in
/// alongside the good-with-kids trait; with older children only, patience
/// matters less.
pub fn score_kid_friendliness(breed: &BreedProfile, preferences: &Preferences) -> (u8, Vec<String>) {
    let c = &breed.characteristics;
    let mut reasons = Vec::new();

    let score = if !preferences.has_kids() {
        if c.friendliness >= 7.0 {
            reasons.push("Friendly, sociable companion".to_string());
        }
        round_points(c.friendliness / 10.0 * 15.0)
    } else if preferences.has_young_kids() {
        let blended = c.good_with_kids * 0.4 + c.gentle * 0.3 + c.patient * 0.3;
        if c.good_with_kids >= 8.0 && c.gentle >= 7.0 {
            reasons.push("Excellent with young children, gentle and patient".to_string());
        } else if c.good_with_kids < 5.0 {
            reasons.push("May not be the best fit for young children".to_string());
        }
        round_points(blended / 10.0 * 15.0)
    } else {
        let blended = c.good_with_kids * 0.6 + c.patient * 0.4;
        if c.good_with_kids >= 7.0 {
            reasons.push("Great with children".to_string());
        }
        round_points(blended / 10.0 * 15.0)
    };

    (score.min(tables::KID_FRIENDLINESS_CAP), reasons)
}

/// Trainability (max 15).
///
/// A breed's handling difficulty blends low trainability with stubbornness
/// and independence. Owners whose experience covers that difficulty score
/// the breed on trainability alone; others fall back to a blended score
/// with a floor of 3.
pub fn score_trainability(breed: &BreedProfile, preferences: &Preferences) -> (u8, Vec<String>) {
    let experience = tables::lookup(
        tables::EXPERIENCE_VALUES,
        &preferences.experience_level,
        tables::DEFAULT_EXPERIENCE,
    );
    let c = &breed.characteristics;
    let difficulty = ((10.0 - c.trainability + c.stubborn + c.independent) / 3.0).round();

    let mut reasons = Vec::new();
    let score = if experience >= difficulty {
        if c.trainability >= 8.0 {
            reasons.push("Highly trainable and quick to learn".to_string());
        } else if c.trainability >= 5.0 {
            reasons.push("Trainable with consistent effort".to_string());
        }
        round_points(c.trainability / 10.0 * 15.0)
    } else {
        reasons.push("May be challenging for your experience level".to_string());
        round_points((c.trainability * 0.5 + experience * 0.5) / 10.0 * 15.0).max(3)
    };

    (score.min(tables::TRAINABILITY_CAP), reasons)
}

/// Space requirements (max 15).
///
/// Combines a size suitability check against the living space with a
/// continuous comparison of available room versus the breed's space need
/// (exercise needs averaged with its size weight).
pub fn score_space(breed: &BreedProfile, preferences: &Preferences) -> (u8, Vec<String>) {
    let space_level = tables::lookup(
        tables::SPACE_LEVELS,
        &preferences.living_space,
        tables::DEFAULT_SPACE_LEVEL,
    );
    let breed_size = breed.size.to_lowercase();
    let size_ok = tables::suitable_sizes(&preferences.living_space).contains(&breed_size.as_str());

    let space_need = (breed.characteristics.exercise_needs + tables::size_weight(&breed_size)) / 2.0;
    let space_diff = space_level - space_need;

    let mut reasons = Vec::new();
    let raw: i32 = if size_ok && space_diff >= 0.0 {
        reasons.push("Great fit for your living space".to_string());
        15
    } else if size_ok {
        reasons.push("Adequate space, though more room would be ideal".to_string());
        (15 + (space_diff * 2.0).round() as i32).max(5)
    } else {
        reasons.push("Your living space may be tight for this breed".to_string());
        (15 + (space_diff * 3.0).round() as i32).max(2)
    };

    (raw.min(tables::SPACE_CAP as i32) as u8, reasons)
}

/// Grooming needs (2-10).
///
/// Demand averages grooming needs with shedding; lower demand scores
/// higher. The floor of 2 keeps this component from zeroing out a match.
pub fn score_grooming(breed: &BreedProfile, _preferences: &Preferences) -> (u8, Vec<String>) {
    let c = &breed.characteristics;
    let demand = (c.grooming_needs + c.shedding) / 2.0;

    let score = ((10.0 - demand + 5.0) / 15.0 * 10.0)
        .round()
        .clamp(tables::GROOMING_FLOOR as f64, tables::GROOMING_CAP as f64) as u8;

    let mut reasons = Vec::new();
    if demand <= 3.0 {
        reasons.push("Low-maintenance coat".to_string());
    } else if demand >= 7.0 {
        reasons.push("Higher grooming needs than average".to_string());
    }

    (score, reasons)
}

/// Social compatibility (1-10).
///
/// Family households weigh tolerance of strangers more heavily; singles
/// and couples weigh adaptability instead.
pub fn score_social(breed: &BreedProfile, preferences: &Preferences) -> (u8, Vec<String>) {
    let c = &breed.characteristics;
    let family_household = matches!(
        preferences.family_size.as_str(),
        "small-family" | "large-family"
    );

    let social_score = if family_household {
        c.good_with_dogs * 0.2 + c.good_with_strangers * 0.3 + c.social * 0.3 + c.adaptable * 0.2
    } else {
        c.good_with_dogs * 0.3 + c.social * 0.3 + c.adaptable * 0.4
    };

    let score = (social_score / 10.0 * 10.0)
        .round()
        .clamp(tables::SOCIAL_FLOOR as f64, tables::SOCIAL_CAP as f64) as u8;

    let mut reasons = Vec::new();
    if score >= 7 {
        let text = if family_household {
            "Thrives in a busy family household"
        } else {
            "Sociable and adaptable companion"
        };
        reasons.push(text.to_string());
    } else if score <= 4 {
        reasons.push("Prefers quieter environments".to_string());
    }

    (score, reasons)
}
