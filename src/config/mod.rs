pub mod toml_config;

use crate::core::project;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[derive(Debug, Parser)]
#[command(name = "pystrap")]
#[command(about = "A small bootstrap and launch tool for Python applications")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        long,
        global = true,
        help = "Project root (default: nearest ancestor with requirements.txt or pyproject.toml)"
    )]
    pub project_root: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Path to a pystrap.toml config file (default: <root>/pystrap.toml when present)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the virtual environment if needed and install dependencies
    Install {
        #[arg(long, help = "Base interpreter used to create the virtual environment")]
        interpreter: Option<String>,
    },
    /// Launch the application through the virtual environment's interpreter
    Run {
        #[arg(
            long,
            help = "Interpreter to use (with a warning) when the virtual environment is missing"
        )]
        fallback_interpreter: Option<PathBuf>,

        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "Extra arguments passed to the application"
        )]
        args: Vec<String>,
    },
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        if let Command::Install {
            interpreter: Some(interpreter),
        } = &self.command
        {
            validation::validate_non_empty_string("interpreter", interpreter)?;
        }
        Ok(())
    }
}

/// Effective settings after merging: CLI flags win over `pystrap.toml`,
/// which wins over built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub venv_dir: String,
    pub requirements: String,
    pub entry_module: String,
    pub base_interpreter: String,
}

impl Settings {
    pub fn resolve(config: Option<&TomlConfig>, interpreter_flag: Option<&str>) -> Self {
        let environment = config.and_then(|c| c.environment.as_ref());
        let install = config.and_then(|c| c.install.as_ref());
        let project_section = config.and_then(|c| c.project.as_ref());

        let venv_dir = environment
            .and_then(|e| e.venv_dir.clone())
            .unwrap_or_else(|| project::DEFAULT_VENV_DIR.to_string());

        let requirements = install
            .and_then(|i| i.requirements.clone())
            .unwrap_or_else(|| project::DEFAULT_REQUIREMENTS.to_string());

        let entry_module = project_section
            .and_then(|p| p.entry_module.clone())
            .unwrap_or_else(|| project::DEFAULT_ENTRY_MODULE.to_string());

        let base_interpreter = interpreter_flag
            .map(str::to_string)
            .or_else(|| environment.and_then(|e| e.interpreter.clone()))
            .unwrap_or_else(|| project::default_base_interpreter().to_string());

        Self {
            venv_dir,
            requirements,
            entry_module,
            base_interpreter,
        }
    }
}
