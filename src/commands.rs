//! OI command frames.
//!
//! Every command the driver can issue is a plain struct implementing
//! [`Encode`]. Arguments are validated against the bounds in the OI hardware
//! specification before any bytes are produced.

use bitflags::bitflags;

use crate::encode::{check_range, Encode, EncodeError};

/// Command opcodes defined by the OI.
///
/// A few opcodes (`SchedulingLeds`, `DigitLedsRaw`, `Schedule`) are listed for
/// completeness but have no frame type yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    /// Must be sent before any other command is accepted.
    Start = 128,
    Baud = 129,
    /// Identical in effect to `Safe`; kept for older firmware.
    Control = 130,
    Safe = 131,
    Full = 132,
    Power = 133,
    Spot = 134,
    Clean = 135,
    Max = 136,
    Drive = 137,
    Motors = 138,
    Leds = 139,
    Song = 140,
    Play = 141,
    Sensors = 142,
    SeekDock = 143,
    MotorsPwm = 144,
    DriveDirect = 145,
    DrivePwm = 146,
    Stream = 148,
    QueryList = 149,
    PauseResumeStream = 150,
    SchedulingLeds = 162,
    DigitLedsRaw = 163,
    DigitLedsAscii = 164,
    Buttons = 165,
    Schedule = 167,
    SetDayTime = 168,
}

/// The twelve baud rates the OI supports, as the codes the `Baud` command
/// takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BaudCode {
    B300 = 0,
    B600 = 1,
    B1200 = 2,
    B2400 = 3,
    B4800 = 4,
    B9600 = 5,
    B14400 = 6,
    /// Can also be selected at power-on.
    B19200 = 7,
    B28800 = 8,
    B38400 = 9,
    B57600 = 10,
    /// The default for modern Roombas.
    B115200 = 11,
}

impl BaudCode {
    /// Maps a baud rate in bits per second to its OI code.
    pub fn from_rate(rate: u32) -> Result<Self, EncodeError> {
        Ok(match rate {
            300 => Self::B300,
            600 => Self::B600,
            1200 => Self::B1200,
            2400 => Self::B2400,
            4800 => Self::B4800,
            9600 => Self::B9600,
            14400 => Self::B14400,
            19200 => Self::B19200,
            28800 => Self::B28800,
            38400 => Self::B38400,
            57600 => Self::B57600,
            115200 => Self::B115200,
            _ => return Err(EncodeError::UnsupportedBaudRate(rate)),
        })
    }
}

/// Week days as the OI clock counts them (Sunday is 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

/// Requested state for one of the cleaning motors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorState {
    Off,
    /// On, in the motor's default direction.
    Default,
    /// On, in the opposite direction. Not available for the vacuum.
    Opposite,
}

bitflags! {
    /// LEDs addressed by the `Leds` command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LedFlags: u8 {
        const DEBRIS = 0b0000_0001;
        const SPOT = 0b0000_0010;
        const DOCK = 0b0000_0100;
        const CHECK_ROBOT = 0b0000_1000;
    }
}

bitflags! {
    /// Buttons addressed by the `Buttons` command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const CLEAN = 1 << 0;
        const SPOT = 1 << 1;
        const DOCK = 1 << 2;
        const MINUTE = 1 << 3;
        const HOUR = 1 << 4;
        const DAY = 1 << 5;
        const SCHEDULE = 1 << 6;
        const CLOCK = 1 << 7;
    }
}

macro_rules! opcode_only_commands {
    ($($(#[$attr:meta])* $name:ident => $opcode:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name;

            impl Encode for $name {
                fn encode(&self) -> Result<Vec<u8>, EncodeError> {
                    Ok(vec![Opcode::$opcode as u8])
                }
            }
        )*
    };
}

opcode_only_commands! {
    /// Starts the OI. Must be the first command after power-on.
    Start => Start,
    /// Enables control of the robot. Equivalent to [`Safe`].
    Control => Control,
    /// Puts the OI into Safe mode. The robot reverts to Passive on a safety
    /// condition.
    Safe => Safe,
    /// Puts the OI into Full mode, disabling the cliff, wheel-drop, and
    /// charger safety features.
    Full => Full,
    /// Powers down the robot.
    Power => Power,
    /// Starts a spot cleaning cycle.
    Spot => Spot,
    /// Starts the default cleaning cycle.
    Clean => Clean,
    /// Starts a max cleaning cycle.
    Max => Max,
    /// Sends the robot to its dock.
    SeekDock => SeekDock,
}

/// Changes the OI's baud rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBaud {
    pub code: BaudCode,
}

impl Encode for SetBaud {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(vec![Opcode::Baud as u8, self.code as u8])
    }
}

/// Drives at an average velocity (mm/s), turning at the given radius (mm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drive {
    pub velocity: i16,
    pub radius: i16,
}

impl Encode for Drive {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        check_range("velocity", self.velocity.into(), -500, 500)?;
        check_range("radius", self.radius.into(), -2000, 2000)?;
        let mut frame = vec![Opcode::Drive as u8];
        frame.extend(self.velocity.to_be_bytes());
        frame.extend(self.radius.to_be_bytes());
        Ok(frame)
    }
}

/// Turns the cleaning motors on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motors {
    pub main_brush: MotorState,
    pub side_brush: MotorState,
    pub vacuum: MotorState,
}

impl Encode for Motors {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut bits = 0u8;
        match self.main_brush {
            MotorState::Off => {}
            MotorState::Default => bits |= 0b0000_0100,
            MotorState::Opposite => bits |= 0b0001_0100,
        }
        match self.side_brush {
            MotorState::Off => {}
            MotorState::Default => bits |= 0b0000_0001,
            MotorState::Opposite => bits |= 0b0000_1001,
        }
        match self.vacuum {
            MotorState::Off => {}
            MotorState::Default => bits |= 0b0000_0010,
            MotorState::Opposite => return Err(EncodeError::VacuumDirection),
        }
        Ok(vec![Opcode::Motors as u8, bits])
    }
}

/// Sets the Clean/Power button color and intensity and the indicator LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leds {
    /// 0 is green, 255 is red.
    pub color: u8,
    pub intensity: u8,
    pub flags: LedFlags,
}

impl Encode for Leds {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(vec![
            Opcode::Leds as u8,
            self.flags.bits(),
            self.color,
            self.intensity,
        ])
    }
}

/// One note of a song: a MIDI note number and a duration in 1/64ths of a
/// second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub number: u8,
    pub duration: u8,
}

/// Defines a song of 1 to 16 notes in one of the five song slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub song: u8,
    pub notes: Vec<Note>,
}

impl Encode for Song {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        check_range("song", self.song.into(), 0, 4)?;
        if self.notes.is_empty() || self.notes.len() > 16 {
            return Err(EncodeError::SongLength(self.notes.len()));
        }
        for note in &self.notes {
            check_range("note number", note.number.into(), 31, 127)?;
        }
        let mut frame = Vec::with_capacity(3 + 2 * self.notes.len());
        frame.push(Opcode::Song as u8);
        frame.push(self.song);
        frame.push(self.notes.len() as u8);
        for note in &self.notes {
            frame.push(note.number);
            frame.push(note.duration);
        }
        Ok(frame)
    }
}

/// Plays a previously defined song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub song: u8,
}

impl Encode for Play {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        check_range("song", self.song.into(), 0, 4)?;
        Ok(vec![Opcode::Play as u8, self.song])
    }
}

/// Requests one sensor packet.
///
/// The id is not checked here; the session validates it against the packet
/// registry before the frame is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensors {
    pub id: u8,
}

impl Encode for Sensors {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(vec![Opcode::Sensors as u8, self.id])
    }
}

/// Drives the cleaning motors with raw PWM duty cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorsPwm {
    pub main_brush: i8,
    pub side_brush: i8,
    /// The vacuum only runs forward.
    pub vacuum: u8,
}

impl Encode for MotorsPwm {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        check_range("main brush PWM", self.main_brush.into(), -127, 127)?;
        check_range("side brush PWM", self.side_brush.into(), -127, 127)?;
        check_range("vacuum PWM", self.vacuum.into(), 0, 127)?;
        Ok(vec![
            Opcode::MotorsPwm as u8,
            self.main_brush as u8,
            self.side_brush as u8,
            self.vacuum,
        ])
    }
}

/// Drives the wheels at independent velocities (mm/s).
///
/// On the wire the right velocity precedes the left one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveDirect {
    pub left_velocity: i16,
    pub right_velocity: i16,
}

impl Encode for DriveDirect {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        check_range("left velocity", self.left_velocity.into(), -500, 500)?;
        check_range("right velocity", self.right_velocity.into(), -500, 500)?;
        let mut frame = vec![Opcode::DriveDirect as u8];
        frame.extend(self.right_velocity.to_be_bytes());
        frame.extend(self.left_velocity.to_be_bytes());
        Ok(frame)
    }
}

/// Drives the wheels with raw PWM duty cycles.
///
/// On the wire the right PWM precedes the left one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrivePwm {
    pub left_pwm: i16,
    pub right_pwm: i16,
}

impl Encode for DrivePwm {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        check_range("left PWM", self.left_pwm.into(), -255, 255)?;
        check_range("right PWM", self.right_pwm.into(), -255, 255)?;
        let mut frame = vec![Opcode::DrivePwm as u8];
        frame.extend(self.right_pwm.to_be_bytes());
        frame.extend(self.left_pwm.to_be_bytes());
        Ok(frame)
    }
}

/// Requests a sensor packet stream every 15 ms.
///
/// Ids and payload throughput are validated by the session, which knows the
/// registry and the transport's baud rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    pub ids: Vec<u8>,
}

impl Encode for Stream {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        check_range("packet count", self.ids.len() as i32, 0, 255)?;
        let mut frame = Vec::with_capacity(2 + self.ids.len());
        frame.push(Opcode::Stream as u8);
        frame.push(self.ids.len() as u8);
        frame.extend(&self.ids);
        Ok(frame)
    }
}

/// Requests a one-shot list of sensor packets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryList {
    pub ids: Vec<u8>,
}

impl Encode for QueryList {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        check_range("packet count", self.ids.len() as i32, 0, 255)?;
        let mut frame = Vec::with_capacity(2 + self.ids.len());
        frame.push(Opcode::QueryList as u8);
        frame.push(self.ids.len() as u8);
        frame.extend(&self.ids);
        Ok(frame)
    }
}

/// Pauses or resumes the stream requested with [`Stream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseResumeStream {
    pub resume: bool,
}

impl Encode for PauseResumeStream {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(vec![Opcode::PauseResumeStream as u8, self.resume as u8])
    }
}

/// Writes four printable-ASCII characters to the seven-segment display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitLedsAscii {
    pub digits: String,
}

impl Encode for DigitLedsAscii {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let bytes = self.digits.as_bytes();
        if bytes.len() != 4 {
            return Err(EncodeError::DigitLength(self.digits.chars().count()));
        }
        for &byte in bytes {
            if !(32..=126).contains(&byte) {
                return Err(EncodeError::DigitCharacter(byte));
            }
        }
        let mut frame = vec![Opcode::DigitLedsAscii as u8];
        frame.extend(bytes);
        Ok(frame)
    }
}

/// Simulates pressing one or more of the robot's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressButtons {
    pub buttons: Buttons,
}

impl Encode for PressButtons {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(vec![Opcode::Buttons as u8, self.buttons.bits()])
    }
}

/// Sets the robot's internal week day and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDayTime {
    pub day: Weekday,
    pub hour: u8,
    pub minute: u8,
}

impl Encode for SetDayTime {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        check_range("hour", self.hour.into(), 0, 23)?;
        check_range("minute", self.minute.into(), 0, 59)?;
        Ok(vec![
            Opcode::SetDayTime as u8,
            self.day as u8,
            self.hour,
            self.minute,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_frame() {
        assert_eq!(Start.encode().unwrap(), vec![128]);
    }

    #[test]
    fn mode_frames() {
        assert_eq!(Control.encode().unwrap(), vec![130]);
        assert_eq!(Safe.encode().unwrap(), vec![131]);
        assert_eq!(Full.encode().unwrap(), vec![132]);
        assert_eq!(Power.encode().unwrap(), vec![133]);
        assert_eq!(Spot.encode().unwrap(), vec![134]);
        assert_eq!(Clean.encode().unwrap(), vec![135]);
        assert_eq!(Max.encode().unwrap(), vec![136]);
        assert_eq!(SeekDock.encode().unwrap(), vec![143]);
    }

    #[test]
    fn baud_frame() {
        let cmd = SetBaud {
            code: BaudCode::from_rate(57600).unwrap(),
        };
        assert_eq!(cmd.encode().unwrap(), vec![129, 10]);
    }

    #[test]
    fn unsupported_baud_rate() {
        assert_eq!(
            BaudCode::from_rate(12345).unwrap_err(),
            EncodeError::UnsupportedBaudRate(12345)
        );
    }

    #[test]
    fn drive_frame() {
        let cmd = Drive {
            velocity: -200,
            radius: 500,
        };
        assert_eq!(cmd.encode().unwrap(), vec![0x89, 0xff, 0x38, 0x01, 0xf4]);
    }

    #[test]
    fn drive_out_of_range() {
        let err = Drive {
            velocity: 5000,
            radius: 500,
        }
        .encode()
        .unwrap_err();
        assert!(matches!(
            err,
            EncodeError::OutOfRange {
                name: "velocity",
                value: 5000,
                ..
            }
        ));
        let err = Drive {
            velocity: -200,
            radius: 5000,
        }
        .encode()
        .unwrap_err();
        assert!(matches!(
            err,
            EncodeError::OutOfRange {
                name: "radius",
                value: 5000,
                ..
            }
        ));
    }

    #[test]
    fn motors_default_bits() {
        let cmd = Motors {
            main_brush: MotorState::Default,
            side_brush: MotorState::Default,
            vacuum: MotorState::Default,
        };
        assert_eq!(cmd.encode().unwrap(), vec![138, 0b0000_0111]);
    }

    #[test]
    fn motors_opposite_bits() {
        let cmd = Motors {
            main_brush: MotorState::Opposite,
            side_brush: MotorState::Opposite,
            vacuum: MotorState::Default,
        };
        assert_eq!(cmd.encode().unwrap(), vec![138, 0b0001_1111]);
    }

    #[test]
    fn motors_vacuum_opposite_rejected() {
        let cmd = Motors {
            main_brush: MotorState::Off,
            side_brush: MotorState::Off,
            vacuum: MotorState::Opposite,
        };
        assert_eq!(cmd.encode().unwrap_err(), EncodeError::VacuumDirection);
    }

    #[test]
    fn leds_frame() {
        let cmd = Leds {
            color: 0x40,
            intensity: 0xff,
            flags: LedFlags::CHECK_ROBOT | LedFlags::DEBRIS,
        };
        assert_eq!(cmd.encode().unwrap(), vec![139, 0b0000_1001, 0x40, 0xff]);
    }

    #[test]
    fn song_frame() {
        let cmd = Song {
            song: 2,
            notes: vec![
                Note {
                    number: 60,
                    duration: 32,
                },
                Note {
                    number: 64,
                    duration: 16,
                },
            ],
        };
        assert_eq!(cmd.encode().unwrap(), vec![140, 2, 2, 60, 32, 64, 16]);
    }

    #[test]
    fn song_validation() {
        let no_notes = Song {
            song: 0,
            notes: vec![],
        };
        assert_eq!(no_notes.encode().unwrap_err(), EncodeError::SongLength(0));

        let too_long = Song {
            song: 0,
            notes: vec![
                Note {
                    number: 60,
                    duration: 8
                };
                17
            ],
        };
        assert_eq!(too_long.encode().unwrap_err(), EncodeError::SongLength(17));

        let bad_note = Song {
            song: 0,
            notes: vec![Note {
                number: 30,
                duration: 8,
            }],
        };
        assert!(matches!(
            bad_note.encode().unwrap_err(),
            EncodeError::OutOfRange {
                name: "note number",
                value: 30,
                ..
            }
        ));

        let bad_song = Song {
            song: 5,
            notes: vec![Note {
                number: 60,
                duration: 8,
            }],
        };
        assert!(matches!(
            bad_song.encode().unwrap_err(),
            EncodeError::OutOfRange { name: "song", .. }
        ));
    }

    #[test]
    fn play_frame() {
        assert_eq!(Play { song: 3 }.encode().unwrap(), vec![141, 3]);
        assert!(Play { song: 5 }.encode().is_err());
    }

    #[test]
    fn sensors_frame() {
        assert_eq!(Sensors { id: 35 }.encode().unwrap(), vec![142, 35]);
    }

    #[test]
    fn motors_pwm_frame() {
        let cmd = MotorsPwm {
            main_brush: -10,
            side_brush: 20,
            vacuum: 127,
        };
        assert_eq!(cmd.encode().unwrap(), vec![144, 0xf6, 20, 127]);
    }

    #[test]
    fn motors_pwm_full_reverse_rejected() {
        // -128 fits in an i8 but not in the OI's symmetric range.
        let cmd = MotorsPwm {
            main_brush: -128,
            side_brush: 0,
            vacuum: 0,
        };
        assert!(matches!(
            cmd.encode().unwrap_err(),
            EncodeError::OutOfRange {
                name: "main brush PWM",
                value: -128,
                ..
            }
        ));
    }

    #[test]
    fn drive_direct_swaps_sides_on_the_wire() {
        let cmd = DriveDirect {
            left_velocity: 300,
            right_velocity: 150,
        };
        assert_eq!(cmd.encode().unwrap(), vec![0x91, 0x00, 0x96, 0x01, 0x2c]);
    }

    #[test]
    fn drive_pwm_swaps_sides_on_the_wire() {
        let cmd = DrivePwm {
            left_pwm: -255,
            right_pwm: 255,
        };
        assert_eq!(cmd.encode().unwrap(), vec![0x92, 0x00, 0xff, 0xff, 0x01]);
    }

    #[test]
    fn stream_frame() {
        let cmd = Stream { ids: vec![29, 13] };
        assert_eq!(cmd.encode().unwrap(), vec![148, 2, 29, 13]);
    }

    #[test]
    fn query_list_frame() {
        let cmd = QueryList { ids: vec![35, 15] };
        assert_eq!(cmd.encode().unwrap(), vec![149, 2, 35, 15]);
    }

    #[test]
    fn too_many_stream_ids() {
        let cmd = Stream { ids: vec![7; 256] };
        assert!(matches!(
            cmd.encode().unwrap_err(),
            EncodeError::OutOfRange {
                name: "packet count",
                value: 256,
                ..
            }
        ));
    }

    #[test]
    fn pause_resume_frames() {
        assert_eq!(
            PauseResumeStream { resume: true }.encode().unwrap(),
            vec![150, 1]
        );
        assert_eq!(
            PauseResumeStream { resume: false }.encode().unwrap(),
            vec![150, 0]
        );
    }

    #[test]
    fn digit_leds_frame() {
        let cmd = DigitLedsAscii {
            digits: "abcd".into(),
        };
        assert_eq!(cmd.encode().unwrap(), vec![164, b'a', b'b', b'c', b'd']);
    }

    #[test]
    fn digit_leds_validation() {
        let short = DigitLedsAscii {
            digits: "abc".into(),
        };
        assert_eq!(short.encode().unwrap_err(), EncodeError::DigitLength(3));

        let tab = DigitLedsAscii {
            digits: "ab\tc".into(),
        };
        assert_eq!(tab.encode().unwrap_err(), EncodeError::DigitCharacter(9));
    }

    #[test]
    fn buttons_frame() {
        let cmd = PressButtons {
            buttons: Buttons::CLOCK | Buttons::DAY | Buttons::MINUTE | Buttons::SPOT,
        };
        assert_eq!(cmd.encode().unwrap(), vec![165, 0b1010_1010]);
    }

    #[test]
    fn set_day_time_frame() {
        let cmd = SetDayTime {
            day: Weekday::Wednesday,
            hour: 13,
            minute: 45,
        };
        assert_eq!(cmd.encode().unwrap(), vec![168, 3, 13, 45]);
    }

    #[test]
    fn set_day_time_validation() {
        let cmd = SetDayTime {
            day: Weekday::Sunday,
            hour: 24,
            minute: 0,
        };
        assert!(matches!(
            cmd.encode().unwrap_err(),
            EncodeError::OutOfRange { name: "hour", .. }
        ));
        let cmd = SetDayTime {
            day: Weekday::Sunday,
            hour: 0,
            minute: 60,
        };
        assert!(matches!(
            cmd.encode().unwrap_err(),
            EncodeError::OutOfRange { name: "minute", .. }
        ));
    }

    #[test]
    fn weekday_from_chrono_remaps_sunday() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sat), Weekday::Saturday);
    }
}
