// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Filesystem probing used by the detection cascade.
//!
//! The probe is a lightweight abstraction over the two filesystem queries
//! detection needs: existence checks and whole-file reads. Injecting it lets
//! tests run the cascade without touching the real `/etc`.

use crate::error::{HostfactsError, Result};
use std::fs;
use std::path::Path;

/// The two filesystem operations consumed by the detection cascade.
///
/// A missing file is not an error: `exists` answers `Ok(false)` for it.
/// Every other access failure (e.g. permission denied) is fatal and must
/// surface as an `Err` so the caller never mistakes it for absence.
pub trait FilesystemProbe {
    fn exists(&self, path: &Path) -> Result<bool>;
    fn read_all(&self, path: &Path) -> Result<String>;
}

/// Probe backed by `std::fs`, used outside of tests.
#[derive(Debug, Default)]
pub struct StdFilesystemProbe;

impl FilesystemProbe for StdFilesystemProbe {
    fn exists(&self, path: &Path) -> Result<bool> {
        path.try_exists().map_err(|source| HostfactsError::Probe {
            path: path.display().to_string(),
            source,
        })
    }

    fn read_all(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| HostfactsError::Probe {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_reports_present_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("debian_version");
        fs::write(&file, "5.0\n").unwrap();

        let probe = StdFilesystemProbe;
        assert!(probe.exists(&file).unwrap());
    }

    #[test]
    fn test_exists_reports_missing_file_without_error() {
        let temp_dir = TempDir::new().unwrap();
        let probe = StdFilesystemProbe;
        assert!(!probe.exists(&temp_dir.path().join("no-such-file")).unwrap());
    }

    #[test]
    fn test_read_all_returns_full_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("redhat-release");
        fs::write(&file, "CentOS release 5.3 (Final)\n").unwrap();

        let probe = StdFilesystemProbe;
        assert_eq!(
            probe.read_all(&file).unwrap(),
            "CentOS release 5.3 (Final)\n"
        );
    }

    #[test]
    fn test_read_all_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let probe = StdFilesystemProbe;
        let err = probe
            .read_all(&temp_dir.path().join("no-such-file"))
            .unwrap_err();
        assert!(matches!(err, HostfactsError::Probe { .. }));
    }
}
