//! Application layer for Nextplate.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Generator**: The fixed create-next-app invocation contract
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer but performs no I/O
//! itself; adapters in `nextplate-adapters` implement the ports.

pub mod generator;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::ScaffoldService;

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, FileCollector, ManifestEditor, Workdir, WorkdirProvider};
