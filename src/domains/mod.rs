pub mod logger;
pub mod megaverse;

pub use logger::*;
pub use megaverse::*;
