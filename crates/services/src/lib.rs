pub mod auth;
pub mod dao;
pub mod stats;

pub use auth::AuthService;
pub use dao::*;
pub use stats::StatsService;
