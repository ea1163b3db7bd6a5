//! Nextplate Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Nextplate
//! scaffolding pipeline, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     nextplate-cli / outer assembler     │
//! │        (Drives the pipeline)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │     Generate → Merge → Collect →        │
//! │         Filter → Cleanup                │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (CommandRunner, WorkdirProvider,       │
//! │   FileCollector, ManifestEditor)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   nextplate-adapters (Infrastructure)   │
//! │ (ShellRunner, TempWorkdirs, FsCollector)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (FileMap, ModuleConfig, RouterMode)    │
//! │        No I/O Dependencies              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nextplate_core::{
//!     application::ScaffoldService,
//!     domain::{ModuleConfig, ScaffoldContext},
//! };
//!
//! // Wire the service with injected adapters, then run one scaffold:
//! // let service = ScaffoldService::new(runner, workdirs, collector, manifests);
//! // let files = service.scaffold(&config, &context)?;
//! # Ok::<(), nextplate_core::error::ScaffoldError>(())
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        generator,
        ports::{CommandRunner, FileCollector, ManifestEditor, Workdir, WorkdirProvider},
    };
    pub use crate::domain::{
        FileEntry, FileKind, FileMap, ModuleConfig, NpmDependencies, RouterMode, ScaffoldContext,
    };
    pub use crate::error::{ProcessError, ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
