// Core algorithm exports
pub mod ranker;
pub mod scoring;
pub mod tables;

pub use ranker::{RankResult, Ranker};
pub use scoring::{
    compute_score, score_energy, score_grooming, score_kid_friendliness, score_size,
    score_social, score_space, score_trainability,
};
