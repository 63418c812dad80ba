// ueie-core/src/infrastructure/store/mod.rs

pub mod profile_store;

pub use profile_store::JsonProfileStore;
