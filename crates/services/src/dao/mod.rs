pub mod base;
pub mod challenge;
pub mod charity;
pub mod invitation;
pub mod user;

pub use base::{DaoError, DaoResult};
