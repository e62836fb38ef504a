use crate::core::project::ProjectLayout;
use crate::domain::model::{CommandSpec, RunOutcome};
use crate::domain::ports::ProcessRunner;
use crate::utils::error::{PystrapError, Result};

/// Dependency installer: create the virtual environment if it is absent,
/// upgrade pip, install from the requirements manifest. Strictly sequential
/// and fail-fast; the first failing child aborts the whole run.
pub struct Installer<R: ProcessRunner> {
    runner: R,
    layout: ProjectLayout,
    base_interpreter: String,
}

impl<R: ProcessRunner> Installer<R> {
    pub fn new(runner: R, layout: ProjectLayout, base_interpreter: String) -> Self {
        Self {
            runner,
            layout,
            base_interpreter,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let requirements = self.layout.requirements();
        if !requirements.is_file() {
            return Err(PystrapError::MissingPrerequisiteError {
                message: format!("requirements manifest not found at {}", requirements.display()),
            });
        }

        if self.layout.venv_exists() {
            tracing::info!(
                "Reusing existing virtual environment at {}",
                self.layout.venv_dir().display()
            );
        } else {
            println!(
                "Creating virtual environment at {}...",
                self.layout.venv_dir().display()
            );
            let create = CommandSpec::new(&self.base_interpreter)
                .arg("-m")
                .arg("venv")
                .arg(self.layout.venv_dir().display().to_string());
            self.checked(create).await?;
        }

        let venv_python = self.layout.venv_python();

        println!("Upgrading pip...");
        let upgrade = CommandSpec::new(&venv_python)
            .args(["-m", "pip", "install", "--upgrade", "pip"]);
        self.checked(upgrade).await?;

        println!(
            "Installing dependencies from {}...",
            requirements.display()
        );
        let install = CommandSpec::new(&venv_python)
            .args(["-m", "pip", "install", "-r"])
            .arg(requirements.display().to_string());
        self.checked(install).await?;

        Ok(())
    }

    async fn checked(&self, spec: CommandSpec) -> Result<()> {
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
