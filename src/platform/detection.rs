//! Linux distribution detection.
//!
//! Identity comes from an ordered cascade: the LSB descriptor wins outright
//! when it carries an id, otherwise a fixed set of release files is probed
//! in precedence order and the first match determines both fields. No match
//! is a valid outcome, reported as an undetermined result rather than a
//! guessed value.

use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::platform::filesystem::FilesystemProbe;
use crate::platform::lsb::LsbDescriptor;

const DEBIAN_VERSION: &str = "/etc/debian_version";
const FEDORA_RELEASE: &str = "/etc/fedora-release";
const REDHAT_RELEASE: &str = "/etc/redhat-release";
const GENTOO_RELEASE: &str = "/etc/gentoo-release";
const SUSE_RELEASE: &str = "/etc/SuSE-release";

static REDHATISH_RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"release ([\d.]+)").expect("valid regex"));
static DIGIT_OR_DOT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+|\.+").expect("valid regex"));
static MAJOR_DOT_MINOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+").expect("valid regex"));

/// Platform identity handed to the fact sink.
///
/// Both fields absent means the host could not be identified; that is the
/// undetermined outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    pub platform: Option<String>,
    pub platform_version: Option<String>,
}

impl DetectionResult {
    pub fn is_undetermined(&self) -> bool {
        self.platform.is_none() && self.platform_version.is_none()
    }
}

/// One file-based detection branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReleaseRule {
    Debian,
    Fedora,
    Redhat,
    Gentoo,
    Suse,
}

/// Branches in precedence order. Evaluation stops at the first rule whose
/// release files are present.
const CASCADE: [ReleaseRule; 5] = [
    ReleaseRule::Debian,
    ReleaseRule::Fedora,
    ReleaseRule::Redhat,
    ReleaseRule::Gentoo,
    ReleaseRule::Suse,
];

impl ReleaseRule {
    fn platform(self) -> &'static str {
        match self {
            ReleaseRule::Debian => "debian",
            ReleaseRule::Fedora => "fedora",
            ReleaseRule::Redhat => "redhat",
            ReleaseRule::Gentoo => "gentoo",
            ReleaseRule::Suse => "suse",
        }
    }

    /// The file whose contents carry this distribution's version.
    fn release_file(self) -> &'static str {
        match self {
            ReleaseRule::Debian => DEBIAN_VERSION,
            ReleaseRule::Fedora => FEDORA_RELEASE,
            ReleaseRule::Redhat => REDHAT_RELEASE,
            ReleaseRule::Gentoo => GENTOO_RELEASE,
            ReleaseRule::Suse => SUSE_RELEASE,
        }
    }

    fn matches(self, probe: &dyn FilesystemProbe) -> Result<bool> {
        match self {
            // Fedora ships /etc/redhat-release too; both must be present for
            // the fedora branch so plain redhat hosts fall through to Redhat.
            ReleaseRule::Fedora => Ok(probe.exists(Path::new(FEDORA_RELEASE))?
                && probe.exists(Path::new(REDHAT_RELEASE))?),
            _ => probe.exists(Path::new(self.release_file())),
        }
    }

    fn version(self, probe: &dyn FilesystemProbe) -> Result<Option<String>> {
        let contents = probe.read_all(Path::new(self.release_file()))?;
        Ok(match self {
            ReleaseRule::Debian => Some(chomp(&contents).to_string()),
            ReleaseRule::Fedora | ReleaseRule::Redhat => parse_redhatish(&contents),
            // Every digit run and every dot run, concatenated in order of
            // appearance. Odd on multi-number strings, but kept as-is.
            ReleaseRule::Gentoo => Some(
                DIGIT_OR_DOT_RUN
                    .find_iter(&contents)
                    .map(|m| m.as_str())
                    .collect(),
            ),
            ReleaseRule::Suse => MAJOR_DOT_MINOR
                .find(&contents)
                .map(|m| m.as_str().to_string()),
        })
    }
}

/// Detect the host's distribution and version.
///
/// The LSB descriptor takes unconditional precedence: a non-empty id short
/// circuits every file check. Missing files and unparseable release text
/// yield absent fields; only a filesystem access failure (e.g. permission
/// denied) is returned as an error.
pub fn detect(lsb: &LsbDescriptor, probe: &dyn FilesystemProbe) -> Result<DetectionResult> {
    if let Some(id) = lsb.id.as_deref().filter(|id| !id.is_empty()) {
        debug!("platform '{id}' identified from LSB descriptor");
        return Ok(DetectionResult {
            platform: Some(id.to_lowercase()),
            platform_version: lsb.release.clone(),
        });
    }

    for rule in CASCADE {
        if rule.matches(probe)? {
            let platform = rule.platform();
            let file = rule.release_file();
            debug!("platform '{platform}' identified from {file}");
            return Ok(DetectionResult {
                platform: Some(platform.to_string()),
                platform_version: rule.version(probe)?,
            });
        }
    }

    debug!("no LSB id and no known release file; platform undetermined");
    Ok(DetectionResult::default())
}

/// Extract a version from redhat-style release text.
///
/// `Rawhide` anywhere in the text wins and maps to `"rawhide"`; otherwise
/// the digits-and-dots run following `release ` is captured. Text matching
/// neither yields no version.
pub fn parse_redhatish(contents: &str) -> Option<String> {
    let contents = chomp(contents);
    if contents.contains("Rawhide") {
        return Some("rawhide".to_string());
    }
    REDHATISH_RELEASE
        .captures(contents)
        .map(|caps| caps[1].to_string())
}

// Strips one final newline, nothing else.
fn chomp(contents: &str) -> &str {
    contents.strip_suffix('\n').unwrap_or(contents)
}
