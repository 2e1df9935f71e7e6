use std::sync::Arc;

use crate::domain::ports::ProjectService;

/// Shared router state. Generic over the service so the routers can be
/// exercised against an in-memory service in tests.
#[derive(Debug)]
pub struct AppState<P> {
    pub projects: Arc<P>,
}

impl<P: ProjectService> AppState<P> {
    pub fn new(projects: P) -> Self {
        AppState {
            projects: Arc::new(projects),
        }
    }
}

// Manual impl, a derive would demand P: Clone.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        AppState {
            projects: self.projects.clone(),
        }
    }
}
