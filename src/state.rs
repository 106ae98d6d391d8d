use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::EventRepository;
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
    pub auth_service: Arc<AuthService>,
}
