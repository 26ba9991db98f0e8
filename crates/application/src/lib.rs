//! Subwatch Application Layer
//!
//! Ports describe what the pipeline needs from the outside world; use cases
//! sequence one discovery run on top of them.
pub mod ports;
pub mod services;
pub mod use_cases;
