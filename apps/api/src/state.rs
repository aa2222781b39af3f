use std::sync::Arc;

use crate::assessment::candidates::ContentTypeCatalog;
use crate::assessment::fit_scoring::{AdditiveFitScorer, FitScorer};
use crate::assessment::questionnaire::Questionnaire;
use crate::generation::registry::TemplateRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ContentTypeCatalog>,
    pub registry: Arc<TemplateRegistry>,
    pub questionnaire: Arc<Questionnaire>,
    /// Pluggable fit scorer. Default: AdditiveFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
}

impl AppState {
    pub fn new(catalog: ContentTypeCatalog, registry: TemplateRegistry) -> Self {
        Self {
            catalog: Arc::new(catalog),
            registry: Arc::new(registry),
            questionnaire: Arc::new(Questionnaire::default_questionnaire()),
            fit_scorer: Arc::new(AdditiveFitScorer),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ContentTypeCatalog::default(), TemplateRegistry::default())
    }
}
