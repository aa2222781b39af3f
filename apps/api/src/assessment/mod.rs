// Questionnaire intake, profile extraction and content-type recommendation.
// Scoring is synchronous and side-effect free; only the handlers are async.

pub mod candidates;
pub mod fit_scoring;
pub mod handlers;
pub mod profile;
pub mod questionnaire;
pub mod recommender;
