pub mod command;
pub mod goal;
pub mod ports;

pub use command::*;
pub use goal::*;
pub use ports::*;
