pub mod api_client;
pub mod megaverse_service;
pub mod report;

pub use api_client::*;
pub use megaverse_service::*;
pub use report::*;
