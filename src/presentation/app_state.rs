// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::dataset::DatasetStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DatasetStore>,
    pub chart_service: ChartService,
}
