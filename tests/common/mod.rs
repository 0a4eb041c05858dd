/// Shared test fixtures for running the detection cascade against real files
use hostfacts::error::{HostfactsError, Result};
use hostfacts::platform::FilesystemProbe;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Probe that re-roots the well-known `/etc` paths under a temp directory,
/// so tests exercise real filesystem I/O without touching the host's `/etc`.
pub struct RootedProbe {
    root: TempDir,
}

impl RootedProbe {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create probe root"),
        }
    }

    /// Write a release file at the given absolute path, rooted.
    pub fn write_file(&self, path: &str, contents: &str) -> &Self {
        let rooted = self.rooted(Path::new(path));
        if let Some(parent) = rooted.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&rooted, contents).expect("Failed to write release file");
        self
    }

    fn rooted(&self, path: &Path) -> PathBuf {
        let relative = path.strip_prefix("/").unwrap_or(path);
        self.root.path().join(relative)
    }
}

impl FilesystemProbe for RootedProbe {
    fn exists(&self, path: &Path) -> Result<bool> {
        self.rooted(path)
            .try_exists()
            .map_err(|source| HostfactsError::Probe {
                path: path.display().to_string(),
                source,
            })
    }

    fn read_all(&self, path: &Path) -> Result<String> {
        fs::read_to_string(self.rooted(path)).map_err(|source| HostfactsError::Probe {
            path: path.display().to_string(),
            source,
        })
    }
}
