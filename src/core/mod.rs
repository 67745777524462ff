pub mod generator;
pub mod pool;
pub mod prompt;
pub mod session;

pub use crate::domain::model::{CharClass, CharPool, GenerationRequest, Outcome};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
