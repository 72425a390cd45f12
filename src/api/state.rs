use crate::core::AppConfig;
use crate::history::HistoryStore;

pub struct AppState {
    pub config: AppConfig,
    // Per-session mockup history for iteration support
    pub history: HistoryStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            history: HistoryStore::new(),
        }
    }
}
