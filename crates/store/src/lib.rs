pub mod document;
pub mod models;
pub mod store;

pub use document::StoreDocument;
pub use store::{JsonStore, StoreError, StoreResult};
