//! Shared GUI backend facade for syscheck adapters.
//!
//! This crate provides `GuiBackend`, a platform-agnostic orchestration layer
//! that both a desktop shell and the Axum adapter delegate to. It ensures
//! feature parity and prevents drift between desktop and web UIs.
//!
//! # Architecture
//!
//! ```text
//! Adapters:     desktop shell     syscheck-axum
//!                    ↓                  ↓
//! Facade:            └── syscheck-gui ─┘
//!                        GuiBackend
//!                            ↓
//! Core:                syscheck-core
//! ```
//!
//! # Rules
//!
//! 1. **No adapter dependencies** - must not depend on axum, tower, or any
//!    UI toolkit
//! 2. **Pure orchestration** - all deps injected via `GuiDeps`
//! 3. **Trait-based injection** - uses port traits, not concrete impls
//! 4. **Semantic errors** - returns `GuiError`, adapters map to their own
//!    error types

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod backend;
mod deps;
mod diagnostics;
mod error;

// Primary exports
pub use backend::GuiBackend;
pub use deps::GuiDeps;
pub use diagnostics::DiagnosticsOps;
pub use error::GuiError;

// Re-export commonly used types from syscheck-core for convenience
pub use syscheck_core::{SystemSnapshot, TestReport};
