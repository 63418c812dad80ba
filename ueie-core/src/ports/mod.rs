// ueie-core/src/ports/mod.rs

pub mod baseline;
pub mod connector;

pub use baseline::BaselineStore;
pub use connector::{ColumnSchema, Connector};
