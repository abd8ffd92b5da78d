//! Native serial transport
//!
//! Connection life-cycle state machine and write framing for one serial
//! port. All byte-level work is delegated to a [`SerialDriver`]; this
//! layer decides when the channel is safe to use and applies the
//! transfer-boundary padding the reader firmware expects.
//!
//! # Concurrency
//!
//! One instance may be shared across threads (typically one reader, one
//! writer, one control thread issuing connect/disconnect). There are no
//! locks: teardown is signalled cooperatively through the `disconnecting`
//! flag, which [`disconnect`](SerialTransport::disconnect) stores with
//! Release ordering strictly before touching the driver, so a read or
//! write that starts during teardown observes the flag and backs off
//! instead of using a handle that is being torn down. A call already
//! blocked inside the driver can still race the teardown; the worst
//! outcome is an I/O error surfaced to that caller. Callers are expected
//! to serialize `connect`/`disconnect` with respect to each other.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU32, Ordering};

use bytes::{BufMut, BytesMut};
use tracing::{debug, trace, warn};

use nurlink_types::SerialPortInfo;

use crate::baud::DEFAULT_BAUDRATE;
use crate::driver::{handle_is_valid, INVALID_HANDLE, SerialDriver};
use crate::error::{Error, Result};
use crate::ReaderTransport;

/// Byte appended to writes that land exactly on a transfer boundary.
pub const FLUSH_PAD_BYTE: u8 = 0xFF;

/// The serial bridge forwards data in 64-byte transfers. A write whose
/// length is an exact multiple stalls in the bridge until one more byte
/// arrives, so such writes are padded with [`FLUSH_PAD_BYTE`].
const TRANSFER_BOUNDARY: usize = 64;

#[derive(Debug)]
struct TransportState {
    handle: AtomicI64,
    connected: AtomicBool,
    disconnecting: AtomicBool,
    baudrate: AtomicU32,
}

/// Serial transport for NUR reader modules
///
/// Construction performs no driver contact; the port is opened by
/// [`connect`](ReaderTransport::connect) and closed by
/// [`disconnect`](ReaderTransport::disconnect).
pub struct SerialTransport {
    driver: Arc<dyn SerialDriver>,
    open_name: String,
    friendly_name: String,
    state: TransportState,
}

impl SerialTransport {
    /// Create a transport for `open_name` at `baudrate`
    pub fn new(
        driver: Arc<dyn SerialDriver>,
        open_name: impl Into<String>,
        baudrate: u32,
    ) -> Self {
        let open_name = open_name.into();
        Self {
            driver,
            friendly_name: open_name.clone(),
            open_name,
            state: TransportState {
                handle: AtomicI64::new(INVALID_HANDLE),
                connected: AtomicBool::new(false),
                disconnecting: AtomicBool::new(false),
                baudrate: AtomicU32::new(baudrate),
            },
        }
    }

    /// Create a transport for `open_name` at [`DEFAULT_BAUDRATE`]
    pub fn new_default(driver: Arc<dyn SerialDriver>, open_name: impl Into<String>) -> Self {
        Self::new(driver, open_name, DEFAULT_BAUDRATE)
    }

    /// Create a transport from an enumerated port descriptor
    ///
    /// Keeps the descriptor's friendly name for display.
    pub fn from_port(driver: Arc<dyn SerialDriver>, port: &SerialPortInfo, baudrate: u32) -> Self {
        let mut transport = Self::new(driver, port.open_name.clone(), baudrate);
        transport.friendly_name = port.friendly_name.clone();
        transport
    }

    /// Platform name this transport opens the port with
    pub fn port_name(&self) -> &str {
        &self.open_name
    }

    /// Human-readable port name
    pub fn friendly_name(&self) -> &str {
        &self.friendly_name
    }

    /// Currently configured baud rate
    ///
    /// This is the rate the next [`connect`](ReaderTransport::connect)
    /// will open the port with; it is set at construction and restored to
    /// [`DEFAULT_BAUDRATE`] on disconnect.
    pub fn baudrate(&self) -> u32 {
        self.state.baudrate.load(Ordering::Acquire)
    }

    fn handle(&self) -> i64 {
        self.state.handle.load(Ordering::Acquire)
    }

    fn disconnecting(&self) -> bool {
        self.state.disconnecting.load(Ordering::Acquire)
    }

    /// Channel is not usable for I/O: either never connected or the
    /// handle is not valid.
    fn channel_unusable(&self) -> bool {
        !self.state.connected.load(Ordering::Acquire) || !handle_is_valid(self.handle())
    }
}

impl ReaderTransport for SerialTransport {
    fn connect(&self) -> Result<()> {
        if self.is_connected() {
            return Ok(());
        }

        if self.open_name.is_empty() {
            return Err(Error::PortNameNotSet);
        }

        self.state.disconnecting.store(false, Ordering::Release);

        let baudrate = self.baudrate();
        debug!("Connecting to {} at {} bps...", self.open_name, baudrate);

        let handle = self.driver.connect(&self.open_name, baudrate)?;
        self.state.handle.store(handle, Ordering::Release);
        self.state
            .connected
            .store(handle_is_valid(handle), Ordering::Release);

        if !self.is_connected() {
            return Err(Error::ConnectFailed {
                port: self.open_name.clone(),
            });
        }

        debug!("Connected to {}", self.open_name);
        Ok(())
    }

    fn disconnect(&self) {
        // Must be visible before the driver teardown starts so in-flight
        // reads and writes back off instead of using the dying handle.
        self.state.disconnecting.store(true, Ordering::Release);

        if self.state.connected.load(Ordering::Acquire) {
            debug!("Disconnecting from {}...", self.open_name);
            self.driver.disconnect(self.handle());
        }

        self.state.handle.store(INVALID_HANDLE, Ordering::Release);
        self.state.connected.store(false, Ordering::Release);
        self.state.baudrate.store(DEFAULT_BAUDRATE, Ordering::Release);
    }

    fn is_connected(&self) -> bool {
        self.state.connected.load(Ordering::Acquire) && !self.disconnecting()
    }

    fn read_data(&self, buf: &mut [u8]) -> Result<i32> {
        if self.disconnecting() {
            return Ok(0);
        }

        if self.channel_unusable() {
            return Ok(-1);
        }

        let read = self.driver.read(self.handle(), buf)?;

        if read > 0 {
            trace!("Read {} bytes: {:02X?}", read, &buf[..read.min(16)]);
        }

        Ok(read as i32)
    }

    fn write_data(&self, buf: &[u8], len: usize) -> Result<i32> {
        if self.disconnecting() {
            return Ok(len as i32);
        }

        if self.channel_unusable() {
            return Ok(-1);
        }

        let payload = &buf[..len];
        trace!("Writing {} bytes: {:02X?}", len, &payload[..len.min(16)]);

        if len > 0 && len % TRANSFER_BOUNDARY == 0 {
            let mut padded = BytesMut::with_capacity(len + 1);
            padded.put_slice(payload);
            padded.put_u8(FLUSH_PAD_BYTE);
            self.driver.write(self.handle(), &padded)?;
        } else {
            self.driver.write(self.handle(), payload)?;
        }

        Ok(len as i32)
    }

    fn disable_ack(&self) -> bool {
        false
    }

    fn get_baudrate(&self) -> Result<u32> {
        self.driver.baudrate(self.handle())
    }

    fn set_baudrate(&self, baudrate: u32) -> Result<bool> {
        self.driver.set_baudrate(self.handle(), baudrate)
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        if self.is_connected() {
            warn!("Serial transport for {} dropped while still connected", self.open_name);
        }
    }
}
