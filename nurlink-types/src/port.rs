//! Serial port descriptors

use std::fmt;

/// Port number value used when enumeration could not assign one.
pub const PORT_NUMBER_UNASSIGNED: i32 = -1;

/// Information about one enumerable serial port
///
/// Produced by port enumeration; carries the platform-specific name the
/// port is opened with plus a human-readable name for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialPortInfo {
    /// Name the platform driver uses to open the port (e.g. "COM3",
    /// "/dev/ttyUSB0")
    pub open_name: String,

    /// Human-readable name, e.g. "Communications port 1"
    pub friendly_name: String,

    /// Port ordinal assigned during enumeration; [`PORT_NUMBER_UNASSIGNED`]
    /// when the platform does not provide one
    pub port_number: i32,
}

impl SerialPortInfo {
    /// Create a descriptor with all three fields
    pub fn new(
        open_name: impl Into<String>,
        friendly_name: impl Into<String>,
        port_number: i32,
    ) -> Self {
        Self {
            open_name: open_name.into(),
            friendly_name: friendly_name.into(),
            port_number,
        }
    }

    /// Create a descriptor from an open name alone
    ///
    /// The friendly name defaults to the open name and no port number is
    /// assigned.
    pub fn from_open_name(open_name: impl Into<String>) -> Self {
        let open_name = open_name.into();
        Self {
            friendly_name: open_name.clone(),
            open_name,
            port_number: PORT_NUMBER_UNASSIGNED,
        }
    }
}

impl fmt::Display for SerialPortInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.port_number == PORT_NUMBER_UNASSIGNED {
            write!(f, "{} ({})", self.friendly_name, self.open_name)
        } else {
            write!(
                f,
                "{} ({}, #{})",
                self.friendly_name, self.open_name, self.port_number
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new() {
        let port = SerialPortInfo::new("/dev/ttyUSB0", "USB Serial Port", 0);
        assert_eq!(port.open_name, "/dev/ttyUSB0");
        assert_eq!(port.friendly_name, "USB Serial Port");
        assert_eq!(port.port_number, 0);
    }

    #[test]
    fn test_from_open_name() {
        let port = SerialPortInfo::from_open_name("COM3");
        assert_eq!(port.open_name, "COM3");
        assert_eq!(port.friendly_name, "COM3");
        assert_eq!(port.port_number, PORT_NUMBER_UNASSIGNED);
    }

    #[test]
    fn test_display() {
        let port = SerialPortInfo::new("COM1", "Communications port 1", 1);
        assert_eq!(port.to_string(), "Communications port 1 (COM1, #1)");

        let port = SerialPortInfo::from_open_name("/dev/ttyACM0");
        assert_eq!(port.to_string(), "/dev/ttyACM0 (/dev/ttyACM0)");
    }
}
