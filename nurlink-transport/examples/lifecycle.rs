//! Transport lifecycle walkthrough against an in-memory loopback driver
//!
//! Shows the full connect / write / read / disconnect sequence without
//! reader hardware: everything written to the port is read back.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use nurlink_transport::baud::DEFAULT_BAUDRATE;
use nurlink_transport::{
    enumerate_ports_ex, handle_is_valid, RawHandle, ReaderTransport, Result, SerialDriver,
    SerialTransport,
};
use nurlink_types::SerialPortInfo;

/// Loopback driver: one fake port, writes are queued and read back.
struct LoopbackDriver {
    queue: Mutex<VecDeque<u8>>,
}

impl LoopbackDriver {
    fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
        }
    }
}

impl SerialDriver for LoopbackDriver {
    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn enumerate(&self) -> Result<Vec<SerialPortInfo>> {
        Ok(vec![SerialPortInfo::new("loop0", "Loopback port", 0)])
    }

    fn connect(&self, _port_name: &str, _baudrate: u32) -> Result<RawHandle> {
        Ok(1)
    }

    fn disconnect(&self, _handle: RawHandle) {
        self.queue.lock().unwrap().clear();
    }

    fn baudrate(&self, _handle: RawHandle) -> Result<u32> {
        Ok(DEFAULT_BAUDRATE)
    }

    fn set_baudrate(&self, _handle: RawHandle, _baudrate: u32) -> Result<bool> {
        Ok(true)
    }

    fn read(&self, handle: RawHandle, buf: &mut [u8]) -> Result<usize> {
        if !self.is_connected(handle) {
            return Ok(0);
        }
        let mut queue = self.queue.lock().unwrap();
        let n = buf.len().min(queue.len());
        for slot in &mut buf[..n] {
            *slot = queue.pop_front().unwrap();
        }
        Ok(n)
    }

    fn write(&self, handle: RawHandle, buf: &[u8]) -> Result<usize> {
        if !self.is_connected(handle) {
            return Ok(0);
        }
        self.queue.lock().unwrap().extend(buf);
        Ok(buf.len())
    }

    fn is_connected(&self, handle: RawHandle) -> bool {
        handle_is_valid(handle)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let driver: Arc<dyn SerialDriver> = Arc::new(LoopbackDriver::new());
    driver.initialize()?;

    for port in enumerate_ports_ex(driver.as_ref())? {
        println!("Found port: {}", port);
    }

    let transport = SerialTransport::new_default(Arc::clone(&driver), "loop0");

    transport.connect()?;
    println!("✓ Connected to {}", transport.port_name());

    // A 64-byte payload lands on the transfer boundary and is padded on
    // the wire; the loopback reads back 65 bytes.
    let payload = [0x42u8; 64];
    let accepted = transport.write_data(&payload, payload.len())?;
    println!("✓ Wrote {} bytes", accepted);

    let mut buf = [0u8; 128];
    let read = transport.read_data(&mut buf)?;
    println!(
        "✓ Read {} bytes back (last byte 0x{:02X})",
        read,
        buf[read as usize - 1]
    );

    transport.disconnect();
    println!("✓ Disconnected");

    Ok(())
}
