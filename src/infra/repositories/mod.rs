pub mod sqlite_config_repo;
pub mod sqlite_event_repo;
pub mod sqlite_session_repo;
