use std::sync::Arc;

use learn_core::SessionState;
use learn_core::model::Catalog;
use services::{Narrator, PracticeLoop};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn narrator(&self) -> Arc<dyn Narrator>;
    fn locale(&self) -> String;

    /// State the practice view starts from. Fresh by default.
    fn initial_state(&self) -> SessionState {
        SessionState::new(self.catalog())
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    narrator: Arc<dyn Narrator>,
    locale: String,
    initial_state: SessionState,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            narrator: app.narrator(),
            locale: app.locale(),
            initial_state: app.initial_state(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Build the single practice loop the view owns for the app's lifetime.
    #[must_use]
    pub fn start_practice(&self) -> PracticeLoop {
        PracticeLoop::from_state(self.initial_state.clone(), Arc::clone(&self.narrator))
            .with_locale(self.locale.clone())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
