// Service exports
pub mod auth;
pub mod seed;
pub mod users;

pub use auth::{AuthError, AuthService, Claims, Session};
pub use seed::{load_catalog, SeedError};
pub use users::{InMemoryUserStore, UserRecord, UserStore, UserStoreError};
