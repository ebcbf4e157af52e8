//! Association tables mapping preference tokens to the numeric values the
//! sub-scorers work with. Every table carries an explicit default so an
//! unrecognized token degrades a single sub-score instead of aborting a
//! ranking. New tokens are added here, never in the scoring arithmetic.

/// Activity level token -> owner energy on the 1-10 trait scale.
pub const ACTIVITY_ENERGY: &[(&str, f64)] = &[("low", 3.0), ("moderate", 6.0), ("high", 9.0)];

/// Fallback owner energy for unrecognized activity tokens.
pub const DEFAULT_ACTIVITY_ENERGY: f64 = 5.0;

/// Experience level token -> handling ability on the 1-10 trait scale.
pub const EXPERIENCE_VALUES: &[(&str, f64)] = &[
    ("first-time", 2.0),
    ("some-experience", 4.0),
    ("experienced", 7.0),
    ("very-experienced", 9.0),
];

/// Fallback handling ability for unrecognized experience tokens.
pub const DEFAULT_EXPERIENCE: f64 = 5.0;

/// Living space token -> available room on the 1-10 trait scale.
pub const SPACE_LEVELS: &[(&str, f64)] = &[
    ("apartment", 2.0),
    ("house-small", 4.0),
    ("house-medium", 7.0),
    ("house-large", 10.0),
];

/// Fallback room for unrecognized living space tokens.
pub const DEFAULT_SPACE_LEVEL: f64 = 5.0;

/// Per-component score caps. They sum to 100 and encode the relative
/// importance of each factor; the combiner applies no further weighting.
pub const ENERGY_CAP: u8 = 20;
pub const SIZE_CAP: u8 = 15;
pub const KID_FRIENDLINESS_CAP: u8 = 15;
pub const TRAINABILITY_CAP: u8 = 15;
pub const SPACE_CAP: u8 = 15;
pub const GROOMING_CAP: u8 = 10;
pub const GROOMING_FLOOR: u8 = 2;
pub const SOCIAL_CAP: u8 = 10;
pub const SOCIAL_FLOOR: u8 = 1;

/// Look up a token in an association table, falling back to `default`.
#[inline]
pub fn lookup(table: &[(&str, f64)], token: &str, default: f64) -> f64 {
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, value)| *value)
        .unwrap_or(default)
}

/// Size categories that fit a given living space.
///
/// Unrecognized living space tokens fall back to the mid-size set, matching
/// the neutral default of [`SPACE_LEVELS`].
pub fn suitable_sizes(living_space: &str) -> &'static [&'static str] {
    match living_space {
        "apartment" => &["toy", "small"],
        "house-small" => &["toy", "small", "medium"],
        "house-medium" => &["small", "medium", "large"],
        "house-large" => &["small", "medium", "large", "giant"],
        _ => &["small", "medium", "large"],
    }
}

/// Space pressure contributed by a breed's size category.
#[inline]
pub fn size_weight(breed_size: &str) -> f64 {
    match breed_size {
        "giant" => 9.0,
        "large" => 7.0,
        "medium" => 5.0,
        _ => 3.0,
    }
}
