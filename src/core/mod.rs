pub mod bootstrap;
pub mod launch;
pub mod project;

pub use crate::domain::model::{CommandSpec, RunOutcome};
pub use crate::domain::ports::ProcessRunner;
pub use crate::utils::error::Result;
