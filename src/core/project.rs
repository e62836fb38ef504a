use crate::utils::error::{PystrapError, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_VENV_DIR: &str = ".venv";
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";
pub const DEFAULT_ENTRY_MODULE: &str = "app.main";

/// Files whose presence marks a directory as the project root.
const ROOT_MARKERS: [&str; 2] = ["requirements.txt", "pyproject.toml"];

/// Interpreter used to create the virtual environment when none is given.
pub fn default_base_interpreter() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

/// Resolve the project root: an explicit path wins, otherwise walk upward
/// from the current directory to the first ancestor holding a root marker.
pub fn find_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            if path.is_dir() {
                Ok(path.to_path_buf())
            } else {
                Err(PystrapError::ConfigError {
                    message: format!("Project root '{}' is not a directory", path.display()),
                })
            }
        }
        None => {
            let start = std::env::current_dir()?;
            find_root_from(&start)
        }
    }
}

pub(crate) fn find_root_from(start: &Path) -> Result<PathBuf> {
    for dir in start.ancestors() {
        if ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file()) {
            return Ok(dir.to_path_buf());
        }
    }

    Err(PystrapError::ProjectRootNotFound {
        marker: ROOT_MARKERS.join(" or "),
        start: start.display().to_string(),
    })
}

/// All paths the installer and launcher care about, anchored at the project
/// root. Relative venv/requirements settings are joined onto the root;
/// absolute ones are taken as-is.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    venv_dir: PathBuf,
    requirements: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: PathBuf, venv_dir: &str, requirements: &str) -> Self {
        let venv_dir = anchor(&root, venv_dir);
        let requirements = anchor(&root, requirements);
        Self {
            root,
            venv_dir,
            requirements,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn venv_dir(&self) -> &Path {
        &self.venv_dir
    }

    pub fn requirements(&self) -> &Path {
        &self.requirements
    }

    pub fn venv_exists(&self) -> bool {
        self.venv_dir.is_dir()
    }

    /// The virtual environment's own interpreter binary.
    pub fn venv_python(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_dir.join("Scripts").join("python.exe")
        } else {
            self.venv_dir.join("bin").join("python")
        }
    }
}

fn anchor(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_root_from_walks_upward() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("requirements.txt"), "loguru\n").unwrap();

        let nested = root.join("app").join("controllers");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_root_from(&nested).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn test_find_root_from_accepts_pyproject_marker() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::write(root.join("pyproject.toml"), "[project]\n").unwrap();

        let found = find_root_from(root).unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn test_find_root_from_reports_start_dir_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let start = temp_dir.path().join("empty");
        std::fs::create_dir_all(&start).unwrap();

        let err = find_root_from(&start).unwrap_err();
        assert!(err.to_string().contains("requirements.txt"));
        assert!(err.to_string().contains(&start.display().to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_layout_joins_relative_paths_onto_root() {
        let layout = ProjectLayout::new(
            PathBuf::from("/srv/app"),
            DEFAULT_VENV_DIR,
            DEFAULT_REQUIREMENTS,
        );
        assert_eq!(layout.venv_dir(), Path::new("/srv/app/.venv"));
        assert_eq!(layout.requirements(), Path::new("/srv/app/requirements.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_layout_keeps_absolute_overrides() {
        let layout = ProjectLayout::new(
            PathBuf::from("/srv/app"),
            "/var/envs/app",
            DEFAULT_REQUIREMENTS,
        );
        assert_eq!(layout.venv_dir(), Path::new("/var/envs/app"));
    }

    #[cfg(unix)]
    #[test]
    fn test_venv_python_location() {
        let layout = ProjectLayout::new(PathBuf::from("/srv/app"), ".venv", "requirements.txt");
        assert_eq!(layout.venv_python(), Path::new("/srv/app/.venv/bin/python"));
    }
}
