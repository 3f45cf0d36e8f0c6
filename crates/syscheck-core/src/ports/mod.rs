//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core check pipeline expects from its
//! surroundings. They contain no implementation details and use only domain
//! types.
//!
//! # Design Rules
//!
//! - No `sysinfo` or other probing-crate types in any signature
//! - No adapter (HTTP/GUI/CLI) concerns
//! - Delivery of results to continuation-style callers goes through
//!   `CompletionSink`, never through adapter callbacks baked into core

pub mod completion;
pub mod system_probe;

pub use completion::{ChannelSink, CompletionSink, NoopSink};
pub use system_probe::SystemProbePort;
