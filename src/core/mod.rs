pub mod config;
mod responses;
pub mod storage;
mod telemetry;
pub mod utils;

pub use self::config::AppConfig;
pub use responses::*;
pub use storage::*;
pub use telemetry::*;
pub use utils::*;
