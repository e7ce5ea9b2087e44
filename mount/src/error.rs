use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MountError {
    #[error("mount failed: {0}")]
    MountFailed(String),

    #[error("command `{command}` failed: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("invalid mount specification: {0}")]
    InvalidSpec(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
