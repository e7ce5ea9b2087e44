use crate::Mount;
use crate::error::MountError;
use std::ffi::OsStr;
use std::process::{Command, Stdio};

const MOUNT_PROGRAM: &str = "mount";

/// Render a mount as arguments for the `mount` command line tool, program
/// name included.
pub fn mount_command(m: &Mount) -> Vec<String> {
    let mut args = vec![
        MOUNT_PROGRAM.to_string(),
        "-t".to_string(),
        m.mount_type.to_lowercase(),
        m.source.clone(),
        m.target.clone(),
    ];

    if !m.options.is_empty() {
        args.push("-o".to_string());
        args.push(m.options.join(","));
    }

    args
}

/// Mount each entry with the system `mount` tool, stopping at the first
/// failure.
pub fn mount_all(mounts: &[Mount]) -> Result<(), MountError> {
    mount_all_with(MOUNT_PROGRAM, mounts)
}

/// Like [`mount_all`], running `program` instead of `mount`.
pub fn mount_all_with(program: impl AsRef<OsStr>, mounts: &[Mount]) -> Result<(), MountError> {
    let program = program.as_ref();

    for m in mounts {
        let args = mount_command(m);
        let command = args.join(" ");

        tracing::info!("Running {:?} for {} on {}", program, m.source, m.target);

        let status = Command::new(program)
            .args(&args[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            tracing::warn!("`{}` exited with {}", command, status);
            return Err(MountError::CommandFailed { command, status });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmpfs() -> Mount {
        Mount::new(
            "tmpfs",
            "tmpfs",
            "/mnt/tmp",
            vec!["nosuid".to_string(), "size=64m".to_string()],
        )
    }

    #[test]
    fn test_mount_command() {
        let mut m = tmpfs();
        m.mount_type = "TMPFS".to_string();

        assert_eq!(
            mount_command(&m),
            vec!["mount", "-t", "tmpfs", "tmpfs", "/mnt/tmp", "-o", "nosuid,size=64m"]
        );
    }

    #[test]
    fn test_mount_command_keeps_options_verbatim() {
        let m = Mount::new(
            "ext4",
            "/dev/sda1",
            "/data",
            vec!["noatime".to_string(), "atime".to_string(), "defaults".to_string()],
        );

        assert_eq!(mount_command(&m)[6], "noatime,atime,defaults");
    }

    #[test]
    fn test_mount_command_without_options() {
        let m = Mount::new("proc", "proc", "/proc", vec![]);
        assert_eq!(mount_command(&m), vec!["mount", "-t", "proc", "proc", "/proc"]);
    }

    #[test]
    fn test_mount_all_empty() {
        assert!(mount_all_with("false", &[]).is_ok());
    }

    #[test]
    fn test_mount_all_success() {
        assert!(mount_all_with("true", &[tmpfs(), tmpfs()]).is_ok());
    }

    #[test]
    fn test_mount_all_stops_on_failure() {
        let err = mount_all_with("false", &[tmpfs(), tmpfs()]).unwrap_err();
        match err {
            MountError::CommandFailed { command, status } => {
                assert!(command.starts_with("mount -t tmpfs"));
                assert!(!status.success());
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_mount_all_missing_program() {
        let err = mount_all_with("/nonexistent/ross-mount-tool", &[tmpfs()]).unwrap_err();
        assert!(matches!(err, MountError::Io(_)));
    }
}
