use crate::utils::load_mounts;
use std::path::Path;

pub fn mount(
    file: &Path,
    target: Option<&Path>,
    mount_program: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mounts = load_mounts(file)?;

    tracing::info!("Mounting {} entries from {}", mounts.len(), file.display());

    match target {
        Some(target) => ross_mount::mount_fs(&mounts, target)?,
        None => ross_mount::mount_all_with(mount_program, &mounts)?,
    }

    println!("Mounted {} filesystem(s)", mounts.len());
    Ok(())
}
