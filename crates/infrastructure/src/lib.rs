//! Subwatch Infrastructure Layer
//!
//! Adapters for the application ports: the crt.sh name source, the
//! line-oriented baseline files, the system DNS resolver and every
//! notification sink.
pub mod dns;
pub mod sinks;
pub mod sources;
pub mod storage;
