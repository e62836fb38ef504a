use thiserror::Error;

#[derive(Error, Debug)]
pub enum PystrapError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Project root not found: no {marker} in '{start}' or any parent directory")]
    ProjectRootNotFound { marker: String, start: String },

    #[error("Missing prerequisite: {message}")]
    MissingPrerequisiteError { message: String },

    #[error("Command failed: `{command}` exited with status {code}")]
    CommandFailedError { command: String, code: i32 },

    #[error("Command terminated: `{command}` was killed before exiting")]
    CommandTerminatedError { command: String },
}

impl PystrapError {
    /// Exit code for the process. Child failures propagate the child's own
    /// status; everything else is an explicit failure (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            PystrapError::CommandFailedError { code, .. } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PystrapError>;
