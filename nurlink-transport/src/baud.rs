//! Reader module baud rates
//!
//! The named values are the rates the reader firmware supports; the
//! driver is the authority on what the host platform accepts, so nothing
//! here validates them.

/// Reader baud rate, 9600 bps.
pub const BAUDRATE_9600: u32 = 9_600;

/// Reader baud rate, 38400 bps.
pub const BAUDRATE_38400: u32 = 38_400;

/// Reader baud rate, 115200 bps.
pub const BAUDRATE_115200: u32 = 115_200;

/// Reader baud rate, 230400 bps.
pub const BAUDRATE_230400: u32 = 230_400;

/// Reader baud rate, 500000 bps.
pub const BAUDRATE_500000: u32 = 500_000;

/// Reader baud rate, 1000000 bps.
pub const BAUDRATE_1000000: u32 = 1_000_000;

/// Reader baud rate, 1500000 bps (use with care).
pub const BAUDRATE_1500000: u32 = 1_500_000;

/// Default reader baud rate, currently [`BAUDRATE_115200`].
///
/// The configured rate is restored to this value on disconnect.
pub const DEFAULT_BAUDRATE: u32 = BAUDRATE_115200;
