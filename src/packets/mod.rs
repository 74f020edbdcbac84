//! OI sensor packet definitions.
//!
//! Every packet the OI can report is described by a [`Descriptor`]: its
//! numeric id, fixed wire size, and field [`Layout`]. Atomic packets decode a
//! flag byte, a single integer field, or an enumerated byte; group packets
//! concatenate other packets and decode them at successively advancing
//! offsets. The full table lives in [`table`] and is reachable through
//! [`lookup`].

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::decode::{read_i16, read_i8, read_u16, read_u8, DecodeError};

mod table;

pub use table::DESCRIPTORS;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("packet id {0} is unknown")]
pub struct UnknownPacketId(pub u8);

/// The Roomba charging states reported by packet 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargingState {
    NotCharging,
    ReconditioningCharging,
    FullCharging,
    TrickleCharging,
    Waiting,
    ChargingFaultCondition,
    /// Reported for any raw value the OI specification does not define.
    Unknown,
}

impl ChargingState {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::NotCharging,
            1 => Self::ReconditioningCharging,
            2 => Self::FullCharging,
            3 => Self::TrickleCharging,
            4 => Self::Waiting,
            5 => Self::ChargingFaultCondition,
            _ => Self::Unknown,
        }
    }
}

/// The OI modes reported by packet 35.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OiMode {
    Off,
    Passive,
    Safe,
    Full,
    /// Reported for any raw value the OI specification does not define.
    Unknown,
}

impl OiMode {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Off,
            1 => Self::Passive,
            2 => Self::Safe,
            3 => Self::Full,
            _ => Self::Unknown,
        }
    }
}

/// One named single-bit flag within a flag-byte packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDef {
    pub name: &'static str,
    pub mask: u8,
}

/// Wire layout of a packet. One decode routine exists per variant.
#[derive(Debug, Clone, Copy)]
pub enum Layout {
    /// Independent boolean fields packed into one byte.
    Flags(&'static [FlagDef]),
    UnsignedByte(&'static str),
    SignedByte(&'static str),
    /// 16-bit big-endian.
    UnsignedWord(&'static str),
    /// 16-bit big-endian, sign-extended.
    SignedWord(&'static str),
    ChargingState,
    OiMode,
    /// Ordered constituents, decoded by sequential offset advance.
    Group(&'static [&'static Descriptor]),
}

/// Describes one packet id: wire size plus decode rule.
#[derive(Debug)]
pub struct Descriptor {
    id: u8,
    name: &'static str,
    size: usize,
    layout: Layout,
}

impl Descriptor {
    pub(crate) const fn flags(id: u8, name: &'static str, flags: &'static [FlagDef]) -> Self {
        Self {
            id,
            name,
            size: 1,
            layout: Layout::Flags(flags),
        }
    }

    pub(crate) const fn unsigned_byte(id: u8, name: &'static str, field: &'static str) -> Self {
        Self {
            id,
            name,
            size: 1,
            layout: Layout::UnsignedByte(field),
        }
    }

    pub(crate) const fn signed_byte(id: u8, name: &'static str, field: &'static str) -> Self {
        Self {
            id,
            name,
            size: 1,
            layout: Layout::SignedByte(field),
        }
    }

    pub(crate) const fn unsigned_word(id: u8, name: &'static str, field: &'static str) -> Self {
        Self {
            id,
            name,
            size: 2,
            layout: Layout::UnsignedWord(field),
        }
    }

    pub(crate) const fn signed_word(id: u8, name: &'static str, field: &'static str) -> Self {
        Self {
            id,
            name,
            size: 2,
            layout: Layout::SignedWord(field),
        }
    }

    pub(crate) const fn charging_state(id: u8, name: &'static str) -> Self {
        Self {
            id,
            name,
            size: 1,
            layout: Layout::ChargingState,
        }
    }

    pub(crate) const fn oi_mode(id: u8, name: &'static str) -> Self {
        Self {
            id,
            name,
            size: 1,
            layout: Layout::OiMode,
        }
    }

    pub(crate) const fn group(
        id: u8,
        name: &'static str,
        size: usize,
        members: &'static [&'static Descriptor],
    ) -> Self {
        Self {
            id,
            name,
            size,
            layout: Layout::Group(members),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Byte width of this packet on the wire.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Decodes this packet from `data` starting at `offset`.
    ///
    /// Purely functional; the caller is expected to have read exactly
    /// [`size`](Self::size) bytes, and a shorter buffer fails with
    /// [`DecodeError::UnexpectedEnd`].
    pub fn decode(&self, data: &[u8], offset: usize) -> Result<Packet, DecodeError> {
        let data = match self.layout {
            Layout::Flags(flags) => {
                let byte = read_u8(data, offset)?;
                PacketData::Flags(
                    flags
                        .iter()
                        .map(|flag| FlagValue {
                            name: flag.name,
                            set: byte & flag.mask != 0,
                        })
                        .collect(),
                )
            }
            Layout::UnsignedByte(field) => PacketData::UnsignedByte {
                field,
                value: read_u8(data, offset)?,
            },
            Layout::SignedByte(field) => PacketData::SignedByte {
                field,
                value: read_i8(data, offset)?,
            },
            Layout::UnsignedWord(field) => PacketData::UnsignedWord {
                field,
                value: read_u16(data, offset)?,
            },
            Layout::SignedWord(field) => PacketData::SignedWord {
                field,
                value: read_i16(data, offset)?,
            },
            Layout::ChargingState => {
                PacketData::ChargingState(ChargingState::from_raw(read_u8(data, offset)?))
            }
            Layout::OiMode => PacketData::OiMode(OiMode::from_raw(read_u8(data, offset)?)),
            Layout::Group(members) => {
                let mut packets = Vec::with_capacity(members.len());
                let mut cursor = offset;
                for member in members {
                    packets.push(member.decode(data, cursor)?);
                    cursor += member.size;
                }
                PacketData::Group(packets)
            }
        };
        Ok(Packet {
            id: self.id,
            name: self.name,
            data,
        })
    }
}

/// A decoded boolean field from a flag-byte packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagValue {
    pub name: &'static str,
    pub set: bool,
}

/// A decoded sensor packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub id: u8,
    pub name: &'static str,
    pub data: PacketData,
}

/// The decoded fields of one packet, tagged by layout pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacketData {
    Flags(Vec<FlagValue>),
    UnsignedByte { field: &'static str, value: u8 },
    SignedByte { field: &'static str, value: i8 },
    UnsignedWord { field: &'static str, value: u16 },
    SignedWord { field: &'static str, value: i16 },
    ChargingState(ChargingState),
    OiMode(OiMode),
    Group(Vec<Packet>),
}

impl PacketData {
    /// Looks up a boolean field of a flag-byte packet by name.
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self {
            Self::Flags(flags) => flags.iter().find(|flag| flag.name == name).map(|f| f.set),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> Option<u8> {
        match *self {
            Self::UnsignedByte { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match *self {
            Self::SignedByte { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<u16> {
        match *self {
            Self::UnsignedWord { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match *self {
            Self::SignedWord { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn charging_state(&self) -> Option<ChargingState> {
        match *self {
            Self::ChargingState(state) => Some(state),
            _ => None,
        }
    }

    pub fn oi_mode(&self) -> Option<OiMode> {
        match *self {
            Self::OiMode(mode) => Some(mode),
            _ => None,
        }
    }

    /// Looks up a constituent of a group packet by packet id.
    pub fn constituent(&self, id: u8) -> Option<&Packet> {
        match self {
            Self::Group(packets) => packets.iter().find(|packet| packet.id == id),
            _ => None,
        }
    }
}

/// Looks up the descriptor for `id`.
///
/// The registry is built once on first use and never mutated afterwards.
pub fn lookup(id: u8) -> Result<&'static Descriptor, UnknownPacketId> {
    static INDEX: OnceLock<HashMap<u8, &'static Descriptor>> = OnceLock::new();
    let index = INDEX.get_or_init(|| {
        DESCRIPTORS
            .iter()
            .map(|descriptor| (descriptor.id, *descriptor))
            .collect()
    });
    index.get(&id).copied().ok_or(UnknownPacketId(id))
}
