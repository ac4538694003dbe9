pub mod clock;
pub mod config;
pub mod error;
pub mod layout;
pub mod types;

pub use clock::{Stamp, TimeBasis};
pub use config::{ConfigError, JournalConfig};
pub use error::{JournalError, Result};
pub use layout::{LogLayout, DEFAULT_LOG_DIR};
pub use types::*;
