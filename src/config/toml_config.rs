use crate::utils::error::{PystrapError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional project-level configuration (`pystrap.toml`). Every field is
/// optional; CLI flags take precedence over anything set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: Option<ProjectSection>,
    pub environment: Option<EnvironmentSection>,
    pub install: Option<InstallSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: Option<String>,
    pub entry_module: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentSection {
    pub venv_dir: Option<String>,
    pub interpreter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallSection {
    pub requirements: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PystrapError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PystrapError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Load the config for a project: an explicit `--config` path must
    /// exist; otherwise `<root>/pystrap.toml` is used when present, and its
    /// absence is not an error.
    pub fn load_optional(root: &Path, explicit: Option<&Path>) -> Result<Option<Self>> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(PystrapError::ConfigError {
                        message: format!("Config file not found at {}", path.display()),
                    });
                }
                Ok(Some(Self::from_file(path)?))
            }
            None => {
                let default_path: PathBuf = root.join("pystrap.toml");
                if default_path.is_file() {
                    Ok(Some(Self::from_file(default_path)?))
                } else {
                    Ok(None)
                }
            }
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(project) = &self.project {
            if let Some(entry_module) = &project.entry_module {
                crate::utils::validation::validate_module_name("project.entry_module", entry_module)?;
            }
        }

        if let Some(environment) = &self.environment {
            if let Some(venv_dir) = &environment.venv_dir {
                crate::utils::validation::validate_path("environment.venv_dir", venv_dir)?;
            }
            if let Some(interpreter) = &environment.interpreter {
                crate::utils::validation::validate_non_empty_string(
                    "environment.interpreter",
                    interpreter,
                )?;
            }
        }

        if let Some(install) = &self.install {
            if let Some(requirements) = &install.requirements {
                crate::utils::validation::validate_path("install.requirements", requirements)?;
            }
        }

        Ok(())
    }
}
