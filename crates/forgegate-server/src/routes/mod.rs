//! API routes.

pub mod health;
pub mod oauth;
pub mod repos;

pub use health::health_routes;
pub use oauth::{CallbackParams, callback_handler, login_handler};
pub use repos::list_repos_handler;
