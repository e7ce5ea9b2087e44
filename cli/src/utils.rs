use ross_mount::{Mount, MsFlags};
use std::path::Path;

pub fn load_mounts(path: &Path) -> Result<Vec<Mount>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read mounts file {}: {}", path.display(), e))?;

    let mounts: Vec<Mount> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse mounts file {}: {}", path.display(), e))?;

    Ok(mounts
        .into_iter()
        .map(|m| Mount::new(&m.mount_type, &m.source, &m.target, m.options))
        .collect())
}

pub fn format_flags(flags: MsFlags) -> String {
    if flags.is_empty() {
        return "none".to_string();
    }

    flags
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join("|")
}
