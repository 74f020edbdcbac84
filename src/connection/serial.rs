//! Implements [`Transport`] over a serial port via the `serialport` crate.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::{DataBits, Parity, SerialPort, StopBits};

use super::Transport;

/// `serialport` requires a finite read timeout; sensor responses normally
/// arrive within the session's response delay, so a minute means the port is
/// dead.
pub const READ_TIMEOUT: Duration = Duration::from_secs(60);

/// Opens a serial port with the OI's framing: 8 data bits, no parity, one
/// stop bit.
pub fn open(path: &str, baud_rate: u32) -> serialport::Result<Box<dyn SerialPort>> {
    serialport::new(path, baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .timeout(READ_TIMEOUT)
        .open()
}

impl Transport for Box<dyn SerialPort> {
    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        Write::write_all(self, data)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<()> {
        Read::read_exact(self, buf)
    }

    fn baud_rate(&self) -> io::Result<u32> {
        SerialPort::baud_rate(self.as_ref()).map_err(io::Error::from)
    }
}
