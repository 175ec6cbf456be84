//! Recommendation module - risk policy and the ordered rule classifier.

mod recommendation_constants;
mod recommendation_model;
mod recommendation_service;

pub use recommendation_constants::*;
pub use recommendation_model::{Recommendation, RiskPolicy};
pub use recommendation_service::RecommendationService;

#[cfg(test)]
mod recommendation_service_tests;
