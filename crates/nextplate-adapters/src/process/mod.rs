//! Command runner adapters.

mod scripted;
mod shell;

pub use scripted::ScriptedRunner;
pub use shell::ShellRunner;
