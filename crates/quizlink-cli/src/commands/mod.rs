pub mod link;
pub mod next;
pub mod play;
pub mod setup;
pub mod show;

/// Error type shared by all commands
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
