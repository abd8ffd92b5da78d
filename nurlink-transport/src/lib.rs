//! Transport layer for NUR reader modules
//!
//! Provides the serial byte-stream transport the reader protocol stack
//! runs on, on top of a platform-supplied [`SerialDriver`].

pub mod baud;
pub mod driver;
pub mod enumerate;
pub mod error;
pub mod serial;

pub use driver::{handle_is_valid, RawHandle, SerialDriver, INVALID_HANDLE};
pub use enumerate::{enumerate_ports, enumerate_ports_ex};
pub use error::{Error, Result};
pub use serial::SerialTransport;

/// Transport trait for the reader protocol stack
///
/// One implementation exists per transport medium; this crate provides
/// the serial one. Implementations are shareable across threads:
/// `read_data` and `write_data` may be called while another thread is
/// inside `disconnect`, and must then return their benign short-circuit
/// values instead of touching the medium.
pub trait ReaderTransport: Send + Sync {
    /// Open the transport; no-op when already connected
    fn connect(&self) -> Result<()>;

    /// Close the transport, best-effort and idempotent
    ///
    /// Always leaves the transport logically disconnected, whatever the
    /// underlying medium reports.
    fn disconnect(&self);

    /// Whether the transport is connected and not tearing down
    fn is_connected(&self) -> bool;

    /// Read into `buf`, up to its full length
    ///
    /// Returns the byte count (possibly 0), `Ok(0)` while a disconnect is
    /// in progress, or `Ok(-1)` when the channel is unusable (never
    /// connected, or the handle is invalid). The sentinel keeps idle
    /// polling loops free of error construction; genuine I/O failures on
    /// an active connection are `Err`.
    fn read_data(&self, buf: &mut [u8]) -> Result<i32>;

    /// Write the first `len` bytes of `buf`
    ///
    /// Returns `Ok(len)` when the write was accepted — including during a
    /// disconnect, where the bytes are silently dropped so caller
    /// accounting survives teardown — or `Ok(-1)` when the channel is
    /// unusable. The return value never reports bytes-on-wire.
    ///
    /// # Panics
    ///
    /// Panics when `len > buf.len()`.
    fn write_data(&self, buf: &[u8], len: usize) -> Result<i32>;

    /// Hook for protocol-level acknowledgment suppression
    ///
    /// Returns whether the transport negotiated ack suppression; media
    /// without that capability return `false`.
    fn disable_ack(&self) -> bool;

    /// Current baud rate as reported by the medium
    ///
    /// Fails when not connected.
    fn get_baudrate(&self) -> Result<u32>;

    /// Change the medium's baud rate; no local validation
    ///
    /// Fails when not connected or the value is rejected downstream.
    fn set_baudrate(&self, baudrate: u32) -> Result<bool>;
}
