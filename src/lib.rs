pub mod adapters;
pub mod application;
pub mod common;
pub mod config;
pub mod domains;

pub use application::{ApiClient, MegaverseBuilder, ReplayReport};
pub use config::{Config, ReplayPolicy};

// Error taxonomy and result aliases
pub use common::*;

// Goal map, commands and ports
pub use domains::megaverse::*;
