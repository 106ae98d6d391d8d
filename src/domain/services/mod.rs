pub mod auth_service;
pub mod batch_import;
pub mod date_normalizer;
pub mod event_filter;
pub mod event_service;
pub mod partition;
pub mod retry;
