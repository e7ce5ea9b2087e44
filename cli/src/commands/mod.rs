pub mod command;
pub mod mount;
pub mod translate;

pub use command::print_commands;
pub use mount::mount;
pub use translate::translate;
