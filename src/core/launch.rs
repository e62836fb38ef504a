use crate::core::project::ProjectLayout;
use crate::domain::model::{CommandSpec, RunOutcome};
use crate::domain::ports::ProcessRunner;
use crate::utils::error::{PystrapError, Result};
use std::path::PathBuf;

/// Application launcher: pick the virtual environment's interpreter (or the
/// caller-supplied fallback, with a warning) and invoke the entry module
/// exactly once from the project root.
pub struct Launcher<R: ProcessRunner> {
    runner: R,
    layout: ProjectLayout,
    entry_module: String,
    fallback_interpreter: Option<PathBuf>,
    extra_args: Vec<String>,
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn new(
        runner: R,
        layout: ProjectLayout,
        entry_module: String,
        fallback_interpreter: Option<PathBuf>,
        extra_args: Vec<String>,
    ) -> Self {
        Self {
            runner,
            layout,
            entry_module,
            fallback_interpreter,
            extra_args,
        }
    }

    /// The venv interpreter when it exists; otherwise the fallback (warned
    /// about loudly), otherwise a missing-prerequisite error that names the
    /// path the caller should have provisioned.
    pub fn select_interpreter(&self) -> Result<PathBuf> {
        let venv_python = self.layout.venv_python();
        if venv_python.is_file() {
            return Ok(venv_python);
        }

        match &self.fallback_interpreter {
            Some(fallback) => {
                tracing::warn!(
                    "Virtual environment interpreter not found at {}, falling back to {}",
                    venv_python.display(),
                    fallback.display()
                );
                eprintln!(
                    "⚠️  Virtual environment not found at {}; using fallback interpreter {}",
                    venv_python.display(),
                    fallback.display()
                );
                Ok(fallback.clone())
            }
            None => Err(PystrapError::MissingPrerequisiteError {
                message: format!(
                    "virtual environment interpreter not found at {} (run `pystrap install` first)",
                    venv_python.display()
                ),
            }),
        }
    }

    pub async fn run(&self) -> Result<()> {
        let interpreter = self.select_interpreter()?;

        println!(
            "Launching {} with {}...",
            self.entry_module,
            interpreter.display()
        );

        let spec = CommandSpec::new(&interpreter)
            .arg("-m")
            .arg(&self.entry_module)
            .args(self.extra_args.iter().cloned())
            .current_dir(self.layout.root());

        match self.runner.run(&spec).await? {
            RunOutcome::Exited(0) => Ok(()),
            RunOutcome::Exited(code) => Err(PystrapError::CommandFailedError {
                command: spec.display(),
                code,
            }),
            RunOutcome::Terminated => Err(PystrapError::CommandTerminatedError {
                command: spec.display(),
            }),
        }
    }
}
