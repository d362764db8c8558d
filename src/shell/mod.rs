//! Subprocess execution and execution-context detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{
    execute, CommandOptions, CommandResult, CommandRunner, CommandSpec, SystemRunner,
};
pub use mock::MockRunner;
pub use platform::is_ci;
