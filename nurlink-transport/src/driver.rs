//! Platform driver boundary
//!
//! The transport never touches a serial port directly; every byte-level
//! operation goes through [`SerialDriver`], implemented once per target
//! platform on top of the native serial bindings. Tests substitute a
//! double for the whole boundary.

use nurlink_types::SerialPortInfo;

use crate::error::Result;

/// Raw connection handle returned by the platform driver.
pub type RawHandle = i64;

/// Handle value meaning "no connection".
///
/// A handle of `0` is likewise treated as invalid; use
/// [`handle_is_valid`] rather than comparing against this constant.
pub const INVALID_HANDLE: RawHandle = -1;

/// Whether a handle refers to an open connection.
pub fn handle_is_valid(handle: RawHandle) -> bool {
    handle != INVALID_HANDLE && handle != 0
}

/// Low-level serial port driver
///
/// One implementation exists per target platform. All calls are blocking;
/// any timeout behavior belongs to the implementation, never to the
/// transport above it.
#[cfg_attr(test, mockall::automock)]
pub trait SerialDriver: Send + Sync {
    /// Initialize the driver for this process
    ///
    /// Idempotent; must be called once before any transport is
    /// constructed. Fails when the platform binding is unavailable
    /// (e.g. the native library cannot be loaded).
    fn initialize(&self) -> Result<()>;

    /// Enumerate the serial ports available on this system
    ///
    /// An empty list means no ports are available; `Err` means the
    /// enumeration itself failed.
    fn enumerate(&self) -> Result<Vec<SerialPortInfo>>;

    /// Open `port_name` at `baudrate`
    ///
    /// A failed open may be reported either as `Err` or by returning a
    /// handle for which [`handle_is_valid`] is false.
    fn connect(&self, port_name: &str, baudrate: u32) -> Result<RawHandle>;

    /// Close the connection behind `handle`, best-effort
    fn disconnect(&self, handle: RawHandle);

    /// Current baud rate of the open port
    fn baudrate(&self, handle: RawHandle) -> Result<u32>;

    /// Change the baud rate of the open port
    ///
    /// The driver decides which values are valid for the platform.
    fn set_baudrate(&self, handle: RawHandle, baudrate: u32) -> Result<bool>;

    /// Read up to `buf.len()` bytes; returns the number read (may be 0)
    fn read(&self, handle: RawHandle, buf: &mut [u8]) -> Result<usize>;

    /// Write `buf` to the port; returns the number of bytes written
    fn write(&self, handle: RawHandle, buf: &[u8]) -> Result<usize>;

    /// Driver-level view of whether `handle` is still connected
    fn is_connected(&self, handle: RawHandle) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_validity() {
        assert!(!handle_is_valid(INVALID_HANDLE));
        assert!(!handle_is_valid(0));
        assert!(handle_is_valid(1));
        assert!(handle_is_valid(42));
        assert!(handle_is_valid(-2)); // odd, but not a reserved value
    }
}
