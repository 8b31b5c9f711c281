pub mod providers;
pub mod recommendations;
pub mod scheduler;

pub use recommendations::RecommendationService;
