//! Type definitions for nurlink

pub mod port;

pub use port::SerialPortInfo;
