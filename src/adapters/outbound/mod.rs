pub mod console_logger;
pub mod file_logger;
pub mod http;
pub mod multi_logger;
pub mod noop_logger;
pub mod sleeper;
pub mod tracing_setup;

pub use console_logger::*;
pub use file_logger::*;
pub use http::*;
pub use multi_logger::*;
pub use noop_logger::*;
pub use sleeper::*;
pub use tracing_setup::*;
