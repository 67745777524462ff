pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{LineConsole, StdConsole};
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::session::Session;
pub use crate::domain::model::{CharClass, CharPool, GenerationRequest, Outcome};
pub use crate::utils::error::{PwgenError, Result};
