//! Runtime driver for the pickleball core
//!
//! Runs `game_core::MatchSession` on a tokio interval while the match is
//! playing and exposes the boundary protocol to the presentation layer.

pub mod config;
pub mod driver;
pub mod error;
pub mod wire;

pub use config::DriverConfig;
pub use driver::MatchDriver;
pub use error::DriverError;
