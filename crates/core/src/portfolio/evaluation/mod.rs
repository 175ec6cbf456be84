//! Evaluation module - the per-cycle pipeline tying the engine together.

mod evaluation_model;
mod evaluation_service;

pub use evaluation_model::PortfolioEvaluation;
pub use evaluation_service::{EvaluationService, EvaluationServiceTrait};
