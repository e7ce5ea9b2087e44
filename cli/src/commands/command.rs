use crate::utils::load_mounts;
use ross_mount::mount_command;
use std::path::Path;

pub fn print_commands(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    for m in load_mounts(file)? {
        println!("{}", mount_command(&m).join(" "));
    }

    Ok(())
}
