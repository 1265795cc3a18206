//! guardcpy: a bounds-checked `memcpy` core for a hardened allocator runtime.
//!
//! Every copy request is cross-checked against live allocation metadata
//! supplied by an allocator-registered [`oracle::BoundsOracle`] before any
//! byte moves. A request that would run past the end of its allocation
//! terminates the process, either silently (fail-fast) or with a one-line
//! stack-formatted diagnostic; a request that passes is dispatched to a
//! width-classified copy engine competitive with an unchecked bulk copy.
//!
//! The core never allocates, on any path, including the failure path: it may
//! run while the calling thread holds allocator-internal locks, and once an
//! overflow is detected the heap itself is suspect.

pub mod align;
pub mod config;
pub mod engine;
pub mod memcpy;
pub mod oracle;
pub mod report;
pub mod validate;

#[cfg(feature = "override")]
pub mod abi;
