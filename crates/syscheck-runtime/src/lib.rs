//! OS-level probing for syscheck.
//!
//! Core defines the `SystemProbePort` trait; this crate owns the active
//! implementation that actually queries the host.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod system;

pub use system::DefaultSystemProbe;
