pub mod auth;
pub mod batch_import;
pub mod event;
pub mod health;
