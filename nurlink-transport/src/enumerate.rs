//! Port enumeration
//!
//! Stateless wrappers over the driver's enumeration call. An empty list
//! means no ports are available; enumeration failure is an error.

use nurlink_types::SerialPortInfo;
use tracing::debug;

use crate::driver::SerialDriver;
use crate::error::Result;

/// Enumerate available serial ports as open names
pub fn enumerate_ports(driver: &dyn SerialDriver) -> Result<Vec<String>> {
    let ports = enumerate_ports_ex(driver)?;
    Ok(ports.into_iter().map(|port| port.open_name).collect())
}

/// Enumerate available serial ports with full descriptors
pub fn enumerate_ports_ex(driver: &dyn SerialDriver) -> Result<Vec<SerialPortInfo>> {
    let ports = driver.enumerate()?;
    debug!("Enumerated {} serial port(s)", ports.len());
    Ok(ports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockSerialDriver;
    use crate::error::Error;

    #[test]
    fn test_no_ports_is_empty_not_error() {
        let mut driver = MockSerialDriver::new();
        driver.expect_enumerate().times(1).returning(|| Ok(Vec::new()));

        let ports = enumerate_ports(&driver).unwrap();
        assert!(ports.is_empty());
    }

    #[test]
    fn test_open_names_in_enumeration_order() {
        let mut driver = MockSerialDriver::new();
        driver.expect_enumerate().times(1).returning(|| {
            Ok(vec![
                SerialPortInfo::new("COM1", "Communications port 1", 1),
                SerialPortInfo::new("COM3", "Reader on COM3", 3),
            ])
        });

        let names = enumerate_ports(&driver).unwrap();
        assert_eq!(names, vec!["COM1".to_string(), "COM3".to_string()]);
    }

    #[test]
    fn test_descriptors_pass_through() {
        let mut driver = MockSerialDriver::new();
        driver.expect_enumerate().times(1).returning(|| {
            Ok(vec![SerialPortInfo::new("/dev/ttyUSB0", "USB Serial", 0)])
        });

        let ports = enumerate_ports_ex(&driver).unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].open_name, "/dev/ttyUSB0");
        assert_eq!(ports[0].friendly_name, "USB Serial");
        assert_eq!(ports[0].port_number, 0);
    }

    #[test]
    fn test_enumeration_failure_is_an_error() {
        let mut driver = MockSerialDriver::new();
        driver
            .expect_enumerate()
            .times(1)
            .returning(|| Err(Error::Enumeration("udev unavailable".into())));

        assert!(matches!(
            enumerate_ports(&driver),
            Err(Error::Enumeration(_))
        ));
    }
}
