// ueie/src/commands/mod.rs

pub mod clean;
pub mod drift;
pub mod profile;
pub mod run;
