// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BreedProfile, BreedScore, Characteristics, Preferences, RankedBreed, ScoreBreakdown,
};
pub use requests::RankRequest;
pub use responses::RankResponse;
