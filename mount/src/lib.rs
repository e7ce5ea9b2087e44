mod command;
mod error;
mod options;
mod syscall;

pub use command::{mount_all, mount_all_with, mount_command};
pub use error::MountError;
pub use options::{
    Lookup, OptionRule, Polarity, TranslatedOptions, lookup, split_options, translate,
};
pub use syscall::mount_fs;

pub use nix::mount::MsFlags;

use serde::{Deserialize, Serialize};

/// A serialized mount call. Components either emit or consume mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    /// Filesystem type, e.g. `ext4`, `tmpfs` or `overlay`.
    #[serde(rename = "type")]
    pub mount_type: String,
    /// Device path or source identifier.
    pub source: String,
    /// Mount point.
    pub target: String,
    /// fstab-style options, applied in order.
    #[serde(default)]
    pub options: Vec<String>,
}

impl Mount {
    pub fn new(mount_type: &str, source: &str, target: &str, options: Vec<String>) -> Self {
        Self {
            mount_type: mount_type.to_lowercase(),
            source: source.to_string(),
            target: target.to_string(),
            options,
        }
    }

    pub fn translate(&self) -> TranslatedOptions {
        translate(&self.options)
    }
}
