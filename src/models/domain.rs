use serde::{Deserialize, Serialize};

/// The 30 named numeric traits a breed profile carries.
///
/// Values are conventionally in `[1, 10]`. Missing traits deserialize to the
/// neutral midpoint so a sparse catalog entry still scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Characteristics {
    pub energy_level: f64,
    pub exercise_needs: f64,
    pub playfulness: f64,
    pub intelligence: f64,
    pub trainability: f64,
    pub stubborn: f64,
    pub independent: f64,
    pub friendliness: f64,
    pub affectionate: f64,
    pub gentle: f64,
    pub patient: f64,
    pub social: f64,
    pub adaptable: f64,
    pub good_with_kids: f64,
    pub good_with_dogs: f64,
    pub good_with_cats: f64,
    pub good_with_strangers: f64,
    pub protectiveness: f64,
    pub watchdog: f64,
    pub territorial: f64,
    pub prey_drive: f64,
    pub barking_level: f64,
    pub grooming_needs: f64,
    pub shedding: f64,
    pub drooling: f64,
    pub sensitivity: f64,
    pub tolerates_alone: f64,
    pub tolerates_cold: f64,
    pub tolerates_heat: f64,
    pub apartment_friendly: f64,
}

impl Default for Characteristics {
    fn default() -> Self {
        Self {
            energy_level: 5.0,
            exercise_needs: 5.0,
            playfulness: 5.0,
            intelligence: 5.0,
            trainability: 5.0,
            stubborn: 5.0,
            independent: 5.0,
            friendliness: 5.0,
            affectionate: 5.0,
            gentle: 5.0,
            patient: 5.0,
            social: 5.0,
            adaptable: 5.0,
            good_with_kids: 5.0,
            good_with_dogs: 5.0,
            good_with_cats: 5.0,
            good_with_strangers: 5.0,
            protectiveness: 5.0,
            watchdog: 5.0,
            territorial: 5.0,
            prey_drive: 5.0,
            barking_level: 5.0,
            grooming_needs: 5.0,
            shedding: 5.0,
            drooling: 5.0,
            sensitivity: 5.0,
            tolerates_alone: 5.0,
            tolerates_cold: 5.0,
            tolerates_heat: 5.0,
            apartment_friendly: 5.0,
        }
    }
}

impl Characteristics {
    /// Clamp every trait into `[1, 10]`.
    ///
    /// Applied when the catalog constructs profiles, so the scorers can
    /// assume in-range values.
    pub fn clamped(mut self) -> Self {
        for value in [
            &mut self.energy_level,
            &mut self.exercise_needs,
            &mut self.playfulness,
            &mut self.intelligence,
            &mut self.trainability,
            &mut self.stubborn,
            &mut self.independent,
            &mut self.friendliness,
            &mut self.affectionate,
            &mut self.gentle,
            &mut self.patient,
            &mut self.social,
            &mut self.adaptable,
            &mut self.good_with_kids,
            &mut self.good_with_dogs,
            &mut self.good_with_cats,
            &mut self.good_with_strangers,
            &mut self.protectiveness,
            &mut self.watchdog,
            &mut self.territorial,
            &mut self.prey_drive,
            &mut self.barking_level,
            &mut self.grooming_needs,
            &mut self.shedding,
            &mut self.drooling,
            &mut self.sensitivity,
            &mut self.tolerates_alone,
            &mut self.tolerates_cold,
            &mut self.tolerates_heat,
            &mut self.apartment_friendly,
        ] {
            *value = value.clamp(1.0, 10.0);
        }
        self
    }
}

/// Immutable breed record supplied by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedProfile {
    pub breed_id: String,
    pub name: String,
    /// Size category token: toy, small, medium, large or giant.
    pub size: String,
    pub characteristics: Characteristics,
}

impl BreedProfile {
    /// Normalize a catalog entry: lowercase the size token and clamp the
    /// characteristic vector into `[1, 10]`.
    pub fn normalized(mut self) -> Self {
        self.size = self.size.to_lowercase();
        self.characteristics = self.characteristics.clamped();
        self
    }
}

/// Lifestyle preferences produced by the intake flow.
///
/// Token fields are plain strings: an unrecognized token degrades the
/// affected sub-score to a documented default instead of failing the whole
/// ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// low, moderate or high.
    pub activity_level: String,
    /// apartment, house-small, house-medium or house-large.
    pub living_space: String,
    /// single, couple, small-family or large-family.
    pub family_size: String,
    /// Age-bracket tokens (infants, toddlers, school-age, teenagers),
    /// possibly the sentinel adults-only.
    pub children_ages: Vec<String>,
    /// first-time, some-experience, experienced or very-experienced.
    pub experience_level: String,
    /// Desired size tokens, possibly the sentinel any.
    pub size: Vec<String>,
}

impl Preferences {
    /// True when children are part of the household.
    pub fn has_kids(&self) -> bool {
        !self.children_ages.is_empty()
            && !self.children_ages.iter().all(|age| age == "adults-only")
    }

    /// True when infants or toddlers are present.
    pub fn has_young_kids(&self) -> bool {
        self.children_ages
            .iter()
            .any(|age| age == "infants" || age == "toddlers")
    }

    /// True when no size preference constrains the match.
    pub fn any_size(&self) -> bool {
        self.size.is_empty() || self.size.iter().any(|s| s == "any")
    }
}

/// The seven bounded sub-scores. Caps sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Max 20.
    pub energy: u8,
    /// Max 15.
    pub size: u8,
    /// Max 15.
    pub kid_friendliness: u8,
    /// Max 15.
    pub trainability: u8,
    /// Max 15.
    pub space: u8,
    /// 2 to 10.
    pub grooming: u8,
    /// 1 to 10.
    pub social: u8,
}

impl ScoreBreakdown {
    /// Sum of the seven components; by construction in `[0, 100]`.
    pub fn sum(&self) -> u8 {
        (self.energy as u16
            + self.size as u16
            + self.kid_friendliness as u16
            + self.trainability as u16
            + self.space as u16
            + self.grooming as u16
            + self.social as u16) as u8
    }
}

/// Compatibility result for one (breed, preferences) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedScore {
    pub total: u8,
    pub breakdown: ScoreBreakdown,
    pub match_reasons: Vec<String>,
}

/// One entry of a ranked result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBreed {
    pub breed_id: String,
    pub name: String,
    pub size: String,
    pub score: BreedScore,
}
