//! Application services - use case orchestration.

mod scaffold_service;

pub use scaffold_service::ScaffoldService;
