use crate::Mount;
use crate::error::MountError;
use nix::mount::mount;
use std::path::Path;

/// Mount each entry onto `target` with the `mount(2)` primitive, stopping at
/// the first failure.
///
/// The options of every entry are folded into flags plus filesystem data; the
/// entry's own `target` is not consulted.
pub fn mount_fs(mounts: &[Mount], target: &Path) -> Result<(), MountError> {
    for m in mounts {
        if m.mount_type.is_empty() {
            return Err(MountError::InvalidSpec(format!(
                "missing filesystem type for source {}",
                m.source
            )));
        }

        let translated = m.translate();

        tracing::debug!(
            "Translated options {:?} to flags {:?}, data {:?}",
            m.options,
            translated.flags,
            translated.data
        );

        mount(
            Some(m.source.as_str()),
            target,
            Some(m.mount_type.as_str()),
            translated.flags,
            translated.data(),
        )
        .map_err(|e| {
            tracing::warn!("Mounting {} on {:?} failed: {}", m.source, target, e);
            MountError::MountFailed(format!(
                "{} mount of {} failed: {}",
                m.mount_type, m.source, e
            ))
        })?;

        tracing::info!("Mounted {} ({}) at {:?}", m.source, m.mount_type, target);
    }

    Ok(())
}
