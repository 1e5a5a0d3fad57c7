//! Logging setup.
//!
//! The library itself only talks to the `log` facade. Binaries and tests that
//! want output call `init_logging` once.

mod init;

pub use init::{GL_CALL_FILTER, LoggingConfig, init_logging};
