//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `nextplate-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CommandRunner`: external generator execution
//!   - `WorkdirProvider` / `Workdir`: scoped temporary working directories
//!   - `FileCollector`: tree traversal into a `FileMap`
//!   - `ManifestEditor`: package manifest read-modify-write
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in the CLI / outer assembler, implemented by services)

pub mod output;

pub use output::{CommandRunner, FileCollector, ManifestEditor, Workdir, WorkdirProvider};
