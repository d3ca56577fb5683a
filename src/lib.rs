pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use application::ImportAnalysisUseCase;
pub use domain::error::{AppError, Result};
pub use domain::import::ImportAnalysis;
