//! Platform detection for Linux hosts.
//!
//! This module determines which distribution a host is running and which
//! version of it, for publication as the `platform` and `platform_version`
//! facts. Detection consumes an externally-sourced LSB descriptor and an
//! injectable filesystem probe, so it can run deterministically in tests.

pub mod detection;
pub mod filesystem;
pub mod lsb;

pub use detection::{DetectionResult, detect, parse_redhatish};
pub use filesystem::{FilesystemProbe, StdFilesystemProbe};
pub use lsb::LsbDescriptor;
