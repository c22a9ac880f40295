pub mod app_state;
pub mod error;
pub mod health;
pub mod host_file;
pub mod logger;
pub mod notifications;
pub mod routes;

pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
