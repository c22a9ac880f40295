pub mod catalog;
pub mod connection;
pub mod error;
pub mod repositories;

pub use catalog::{ProfileCatalog, SqliteProfileCatalog};
pub use connection::{open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::hosted_content_repository::HostedContentRepository;
pub use repositories::profile_repository::ProfileRepository;
