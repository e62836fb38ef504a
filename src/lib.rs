pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::SystemRunner;
pub use config::{Cli, Command, Settings};
pub use core::{bootstrap::Installer, launch::Launcher, project::ProjectLayout};
pub use utils::error::{PystrapError, Result};
