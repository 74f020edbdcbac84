//! Implements the serial session for talking to a robot.
//!
//! The OI is a half-duplex request/response protocol: the robot cannot
//! process interleaved commands, so a [`Roomba`] serializes every exchange
//! through one mutex around the underlying [`Transport`].

use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use chrono::{Datelike, NaiveDateTime, Timelike};
use log::{debug, log_enabled, Level};
use thiserror::Error;

use crate::commands::{
    BaudCode, Buttons, Clean, Control, DigitLedsAscii, Drive, DriveDirect, DrivePwm, Full,
    LedFlags, Leds, Max, MotorState, Motors, MotorsPwm, Note, PauseResumeStream, Play, Power,
    PressButtons, QueryList, Safe, SeekDock, Sensors, SetBaud, SetDayTime, Song, Spot, Start,
    Stream, Weekday,
};
use crate::decode::DecodeError;
use crate::encode::{Encode, EncodeError};
use crate::hexdump;
use crate::packets::{lookup, Packet, UnknownPacketId};

#[cfg(feature = "serial")]
pub mod serial;

/// Delay after `start` while the robot plays its wake-up beep.
pub const START_SETTLE: Duration = Duration::from_millis(500);

/// Delay after commands that change the OI mode or baud rate.
pub const MODE_CHANGE_SETTLE: Duration = Duration::from_millis(50);

/// Delay after ordinary commands.
pub const COMMAND_SETTLE: Duration = Duration::from_millis(25);

/// Default pause between writing a request and reading its response.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(100);

/// The OI streams a sensor frame every 15 ms.
const STREAM_INTERVAL_SECS: f64 = 0.015;

/// A blocking byte transport to the robot, typically a serial port.
///
/// `read` must fill the whole buffer or fail; the session never handles
/// partial reads. `baud_rate` is only used to bound `stream` requests.
pub trait Transport {
    fn write(&mut self, data: &[u8]) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
    fn read(&mut self, buf: &mut [u8]) -> io::Result<()>;
    fn baud_rate(&self) -> io::Result<u32>;
}

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    UnknownPacket(#[from] UnknownPacketId),

    #[error("{requested} bytes of stream data requested; at {baud} baud the limit is {limit}")]
    PayloadTooLarge {
        requested: usize,
        limit: usize,
        baud: u32,
    },

    /// Transport errors are surfaced as-is and never retried; resending a
    /// motor command the robot may already have executed is unsafe.
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),
}

/// A session with a robot over the Open Interface.
///
/// One method per OI command. Methods that expect a response (`sensors`,
/// `query_list`) hold the transport lock across the whole exchange so
/// commands from other threads cannot interleave.
pub struct Roomba<T: Transport> {
    transport: Mutex<T>,
    response_delay: Duration,
}

impl<T: Transport> Roomba<T> {
    pub fn new(transport: T) -> Self {
        Self::with_response_delay(transport, DEFAULT_RESPONSE_DELAY)
    }

    /// Creates a session with a non-default request/response delay.
    ///
    /// The OI gives no data-ready indication, so the delay is a fixed
    /// constant rather than an adaptive wait.
    pub fn with_response_delay(transport: T, response_delay: Duration) -> Self {
        Self {
            transport: Mutex::new(transport),
            response_delay,
        }
    }

    pub fn into_inner(self) -> T {
        self.transport
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // A panic while holding the lock poisons it; the transport itself holds
    // no session state, so the lock is always safe to reclaim.
    fn lock(&self) -> MutexGuard<'_, T> {
        self.transport.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Writes raw bytes to the robot and flushes.
    pub fn write(&self, data: &[u8]) -> Result<(), ConnectionError> {
        dump("writing", data);
        let mut transport = self.lock();
        transport.write(data)?;
        transport.flush()?;
        Ok(())
    }

    /// Reads exactly `size` bytes from the robot.
    pub fn read(&self, size: usize) -> Result<Vec<u8>, ConnectionError> {
        let mut data = vec![0u8; size];
        {
            let mut transport = self.lock();
            transport.read(&mut data)?;
        }
        dump("read", &data);
        Ok(data)
    }

    /// Writes a request and reads its `size`-byte response as one atomic
    /// exchange: the lock is held across the write, the response delay, and
    /// the read.
    pub fn write_and_read(&self, data: &[u8], size: usize) -> Result<Vec<u8>, ConnectionError> {
        let mut transport = self.lock();
        dump("writing", data);
        transport.write(data)?;
        transport.flush()?;
        thread::sleep(self.response_delay);
        let mut response = vec![0u8; size];
        transport.read(&mut response)?;
        dump("read", &response);
        Ok(response)
    }

    /// Encodes a command, writes it, then waits out its settle delay.
    fn command(&self, command: impl Encode, settle: Duration) -> Result<(), ConnectionError> {
        let frame = command.encode()?;
        self.write(&frame)?;
        thread::sleep(settle);
        Ok(())
    }

    /// Starts the OI. Must be called before any other command.
    pub fn start(&self) -> Result<(), ConnectionError> {
        self.command(Start, START_SETTLE)
    }

    /// Sets the OI's baud rate from a rate in bits per second.
    pub fn set_baud_rate(&self, rate: u32) -> Result<(), ConnectionError> {
        self.set_baud(BaudCode::from_rate(rate)?)
    }

    pub fn set_baud(&self, code: BaudCode) -> Result<(), ConnectionError> {
        self.command(SetBaud { code }, MODE_CHANGE_SETTLE)
    }

    /// Enables control of the robot. Prefer [`safe`](Self::safe); the effect
    /// is identical.
    pub fn control(&self) -> Result<(), ConnectionError> {
        self.command(Control, MODE_CHANGE_SETTLE)
    }

    /// Puts the OI into Safe mode.
    pub fn safe(&self) -> Result<(), ConnectionError> {
        self.command(Safe, MODE_CHANGE_SETTLE)
    }

    /// Puts the OI into Full mode, turning off the cliff, wheel-drop, and
    /// internal charger safety features.
    pub fn full(&self) -> Result<(), ConnectionError> {
        self.command(Full, MODE_CHANGE_SETTLE)
    }

    /// Powers down the robot.
    pub fn power(&self) -> Result<(), ConnectionError> {
        self.command(Power, MODE_CHANGE_SETTLE)
    }

    /// Starts a spot cleaning cycle.
    pub fn spot(&self) -> Result<(), ConnectionError> {
        self.command(Spot, COMMAND_SETTLE)
    }

    /// Starts the default cleaning cycle.
    pub fn clean(&self) -> Result<(), ConnectionError> {
        self.command(Clean, COMMAND_SETTLE)
    }

    /// Starts a max cleaning cycle.
    pub fn max(&self) -> Result<(), ConnectionError> {
        self.command(Max, COMMAND_SETTLE)
    }

    /// Sends the robot to its dock.
    pub fn seek_dock(&self) -> Result<(), ConnectionError> {
        self.command(SeekDock, COMMAND_SETTLE)
    }

    /// Drives at `velocity` mm/s, turning at `radius` mm.
    pub fn drive(&self, velocity: i16, radius: i16) -> Result<(), ConnectionError> {
        self.command(Drive { velocity, radius }, COMMAND_SETTLE)
    }

    /// Drives the wheels at independent velocities in mm/s.
    pub fn drive_direct(
        &self,
        left_velocity: i16,
        right_velocity: i16,
    ) -> Result<(), ConnectionError> {
        self.command(
            DriveDirect {
                left_velocity,
                right_velocity,
            },
            COMMAND_SETTLE,
        )
    }

    /// Drives the wheels with raw PWM duty cycles.
    pub fn drive_pwm(&self, left_pwm: i16, right_pwm: i16) -> Result<(), ConnectionError> {
        self.command(DrivePwm { left_pwm, right_pwm }, COMMAND_SETTLE)
    }

    /// Turns the cleaning motors on or off.
    pub fn motors(
        &self,
        main_brush: MotorState,
        side_brush: MotorState,
        vacuum: MotorState,
    ) -> Result<(), ConnectionError> {
        self.command(
            Motors {
                main_brush,
                side_brush,
                vacuum,
            },
            COMMAND_SETTLE,
        )
    }

    /// Drives the cleaning motors with raw PWM duty cycles.
    pub fn motors_pwm(
        &self,
        main_brush: i8,
        side_brush: i8,
        vacuum: u8,
    ) -> Result<(), ConnectionError> {
        self.command(
            MotorsPwm {
                main_brush,
                side_brush,
                vacuum,
            },
            COMMAND_SETTLE,
        )
    }

    /// Sets the Clean/Power button color/intensity and the indicator LEDs.
    pub fn leds(&self, color: u8, intensity: u8, flags: LedFlags) -> Result<(), ConnectionError> {
        self.command(
            Leds {
                color,
                intensity,
                flags,
            },
            COMMAND_SETTLE,
        )
    }

    /// Defines a song in one of the five song slots.
    pub fn song(&self, song: u8, notes: Vec<Note>) -> Result<(), ConnectionError> {
        self.command(Song { song, notes }, COMMAND_SETTLE)
    }

    /// Plays a previously defined song.
    pub fn play(&self, song: u8) -> Result<(), ConnectionError> {
        self.command(Play { song }, COMMAND_SETTLE)
    }

    /// Queries one sensor packet and decodes it.
    pub fn sensors(&self, id: u8) -> Result<Packet, ConnectionError> {
        let descriptor = lookup(id)?;
        let frame = Sensors { id }.encode()?;
        let data = self.write_and_read(&frame, descriptor.size())?;
        Ok(descriptor.decode(&data, 0)?)
    }

    /// Queries a list of sensor packets, decoded in request order.
    pub fn query_list(&self, ids: &[u8]) -> Result<Vec<Packet>, ConnectionError> {
        let frame = QueryList { ids: ids.to_vec() }.encode()?;
        let mut descriptors = Vec::with_capacity(ids.len());
        let mut total = 0;
        for &id in ids {
            let descriptor = lookup(id)?;
            total += descriptor.size();
            descriptors.push(descriptor);
        }
        let data = self.write_and_read(&frame, total)?;
        let mut packets = Vec::with_capacity(descriptors.len());
        let mut offset = 0;
        for descriptor in descriptors {
            packets.push(descriptor.decode(&data, offset)?);
            offset += descriptor.size();
        }
        Ok(packets)
    }

    /// Asks the robot to stream the given sensor packets every 15 ms.
    ///
    /// Returns the size in bytes of each stream frame the robot will send:
    /// header byte, count byte, one id byte per packet, the packet payloads,
    /// and a checksum byte.
    pub fn stream(&self, ids: &[u8]) -> Result<usize, ConnectionError> {
        let frame = Stream { ids: ids.to_vec() }.encode()?;
        let mut payload = 0;
        for &id in ids {
            payload += lookup(id)?.size();
        }
        let baud = self.lock().baud_rate()?;
        // 10 bits per byte on the wire, one frame per 15 ms.
        let limit = (baud as f64 / 10.0 * STREAM_INTERVAL_SECS) as usize;
        if payload > limit {
            return Err(ConnectionError::PayloadTooLarge {
                requested: payload,
                limit,
                baud,
            });
        }
        self.write(&frame)?;
        thread::sleep(COMMAND_SETTLE);
        Ok(1 + 1 + ids.len() + payload + 1)
    }

    /// Pauses or resumes the stream requested with [`stream`](Self::stream).
    pub fn pause_resume_stream(&self, resume: bool) -> Result<(), ConnectionError> {
        self.command(PauseResumeStream { resume }, COMMAND_SETTLE)
    }

    /// Writes four printable-ASCII characters to the segment display.
    pub fn digit_leds_ascii(&self, digits: &str) -> Result<(), ConnectionError> {
        self.command(
            DigitLedsAscii {
                digits: digits.to_string(),
            },
            COMMAND_SETTLE,
        )
    }

    /// Simulates pressing one or more of the robot's buttons.
    pub fn buttons(&self, buttons: Buttons) -> Result<(), ConnectionError> {
        self.command(PressButtons { buttons }, COMMAND_SETTLE)
    }

    /// Sets the robot's internal week day and time.
    pub fn set_day_time(&self, day: Weekday, hour: u8, minute: u8) -> Result<(), ConnectionError> {
        self.command(SetDayTime { day, hour, minute }, COMMAND_SETTLE)
    }

    /// Sets the robot's clock from a calendar timestamp.
    pub fn set_date_time(&self, date_time: NaiveDateTime) -> Result<(), ConnectionError> {
        self.set_day_time(
            date_time.weekday().into(),
            date_time.hour() as u8,
            date_time.minute() as u8,
        )
    }
}

fn dump(direction: &str, data: &[u8]) {
    if !log_enabled!(Level::Debug) {
        return;
    }
    debug!("{direction} {} bytes:", data.len());
    for line in hexdump::lines(data) {
        debug!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use chrono::NaiveDate;

    use super::*;
    use crate::packets::{ChargingState, OiMode};

    struct MockTransport {
        written: Vec<u8>,
        pending: VecDeque<u8>,
        baud: u32,
    }

    impl MockTransport {
        fn new(pending: &[u8]) -> Self {
            Self {
                written: Vec::new(),
                pending: pending.iter().copied().collect(),
                baud: 115200,
            }
        }
    }

    impl Transport for MockTransport {
        fn write(&mut self, data: &[u8]) -> io::Result<()> {
            self.written.extend_from_slice(data);
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }

        fn read(&mut self, buf: &mut [u8]) -> io::Result<()> {
            for byte in buf.iter_mut() {
                *byte = self
                    .pending
                    .pop_front()
                    .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?;
            }
            Ok(())
        }

        fn baud_rate(&self) -> io::Result<u32> {
            Ok(self.baud)
        }
    }

    fn session(pending: &[u8]) -> Roomba<MockTransport> {
        Roomba::with_response_delay(MockTransport::new(pending), Duration::ZERO)
    }

    fn written(roomba: Roomba<MockTransport>) -> Vec<u8> {
        roomba.into_inner().written
    }

    #[test]
    fn safe_writes_frame() {
        let roomba = session(&[]);
        roomba.safe().unwrap();
        assert_eq!(written(roomba), vec![131]);
    }

    #[test]
    fn drive_writes_frame() {
        let roomba = session(&[]);
        roomba.drive(-200, 500).unwrap();
        assert_eq!(written(roomba), vec![0x89, 0xff, 0x38, 0x01, 0xf4]);
    }

    #[test]
    fn invalid_drive_writes_nothing() {
        let roomba = session(&[]);
        assert!(matches!(
            roomba.drive(5000, 500).unwrap_err(),
            ConnectionError::Encode(EncodeError::OutOfRange { .. })
        ));
        assert!(matches!(
            roomba.drive(-200, 5000).unwrap_err(),
            ConnectionError::Encode(EncodeError::OutOfRange { .. })
        ));
        assert!(written(roomba).is_empty());
    }

    #[test]
    fn sensors_round_trip() {
        let roomba = session(&[2]);
        let packet = roomba.sensors(35).unwrap();
        assert_eq!(packet.id, 35);
        assert_eq!(packet.data.oi_mode(), Some(OiMode::Safe));
        assert_eq!(written(roomba), vec![142, 35]);
    }

    #[test]
    fn sensors_unknown_id_writes_nothing() {
        let roomba = session(&[]);
        assert!(matches!(
            roomba.sensors(99).unwrap_err(),
            ConnectionError::UnknownPacket(UnknownPacketId(99))
        ));
        assert!(written(roomba).is_empty());
    }

    #[test]
    fn sensors_group_round_trip() {
        let roomba = session(&[
            0x02, 0x42, 0x68, 0xf0, 0x60, 0x16, 0x13, 0x88, 0x27, 0x10,
        ]);
        let packet = roomba.sensors(3).unwrap();
        assert_eq!(
            packet.data.constituent(21).unwrap().data.charging_state(),
            Some(ChargingState::FullCharging)
        );
        assert_eq!(
            packet.data.constituent(23).unwrap().data.as_i16(),
            Some(-4000)
        );
    }

    #[test]
    fn query_list_decodes_in_request_order() {
        let roomba = session(&[2, 42]);
        let packets = roomba.query_list(&[35, 15]).unwrap();
        assert_eq!(packets.len(), 2);
        assert_eq!(packets[0].id, 35);
        assert_eq!(packets[0].data.oi_mode(), Some(OiMode::Safe));
        assert_eq!(packets[1].id, 15);
        assert_eq!(packets[1].data.as_u8(), Some(42));
        assert_eq!(written(roomba), vec![149, 2, 35, 15]);
    }

    #[test]
    fn query_list_unknown_id_writes_nothing() {
        let roomba = session(&[]);
        assert!(roomba.query_list(&[35, 99]).is_err());
        assert!(written(roomba).is_empty());
    }

    #[test]
    fn stream_predicts_frame_size() {
        let roomba = session(&[]);
        // Header + count + two ids + 2 + 1 payload bytes + checksum.
        assert_eq!(roomba.stream(&[29, 13]).unwrap(), 8);
        assert_eq!(written(roomba), vec![148, 2, 29, 13]);
    }

    #[test]
    fn stream_rejects_oversized_payload() {
        let mut transport = MockTransport::new(&[]);
        transport.baud = 300;
        let roomba = Roomba::with_response_delay(transport, Duration::ZERO);
        // At 300 baud the 15 ms budget cannot fit a single byte.
        let err = roomba.stream(&[29]).unwrap_err();
        assert!(matches!(
            err,
            ConnectionError::PayloadTooLarge {
                requested: 2,
                limit: 0,
                baud: 300
            }
        ));
        assert!(written(roomba).is_empty());
    }

    #[test]
    fn short_read_surfaces_transport_error() {
        let roomba = session(&[0x02]);
        let err = roomba.sensors(3).unwrap_err();
        assert!(matches!(err, ConnectionError::Transport(_)));
    }

    #[test]
    fn set_date_time_derives_day_and_time() {
        let roomba = session(&[]);
        // 2023-06-18 was a Sunday.
        let date_time = NaiveDate::from_ymd_opt(2023, 6, 18)
            .unwrap()
            .and_hms_opt(13, 45, 20)
            .unwrap();
        roomba.set_date_time(date_time).unwrap();
        assert_eq!(written(roomba), vec![168, 0, 13, 45]);
    }

    #[test]
    fn digit_leds_round_trip() {
        let roomba = session(&[]);
        roomba.digit_leds_ascii("ab1!").unwrap();
        assert_eq!(written(roomba), vec![164, b'a', b'b', b'1', b'!']);
    }

    #[test]
    fn buttons_round_trip() {
        let roomba = session(&[]);
        roomba.buttons(Buttons::CLEAN | Buttons::DOCK).unwrap();
        assert_eq!(written(roomba), vec![165, 0b0000_0101]);
    }
}
