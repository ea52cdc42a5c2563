pub mod config;
pub mod directory;
pub mod error;
pub mod matching;
pub mod search;
pub mod telemetry;
