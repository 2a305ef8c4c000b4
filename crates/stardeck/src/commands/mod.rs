pub mod ai;
pub mod completion;
pub mod config;
pub mod dump;
pub mod export_kit;
