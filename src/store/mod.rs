pub(crate) mod columns;
pub mod error;
pub(crate) mod loader;
pub mod record_store;
