//! Transport errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connect was attempted without a configured port name
    #[error("Port name is not set")]
    PortNameNotSet,

    /// The driver connect call did not yield a usable handle
    #[error("Connecting to \"{port}\" failed")]
    ConnectFailed { port: String },

    /// Driver read/write/baud-rate call failed on an active connection
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Port enumeration failed (distinct from "no ports available")
    #[error("Port enumeration failed: {0}")]
    Enumeration(String),

    /// Other platform-binding failure, e.g. the native driver library
    /// is missing or failed to initialize
    #[error("Driver error: {0}")]
    Driver(String),
}
