use derive_more::Display;

use crate::error::BadArgument;

/// EDS version.
pub type EdsVersion = u16;
/// Subsystem.
pub type Subsystem = u16;
/// System (spacecraft id).
pub type System = u16;
/// CCSDS version number.
pub type CcsdsVersion = u16;
/// Application process identifier.
pub type ApId = u16;
/// Sequence count.
pub type SequenceCount = u16;

macro_rules! impl_try_from_u8 {
    ($ty:ident, $field:literal, $($variant:ident),*) => {
        impl TryFrom<u8> for $ty {
            type Error = BadArgument;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                $(
                    if value == $ty::$variant as u8 {
                        return Ok($ty::$variant);
                    }
                )*
                Err(BadArgument::InvalidEnum {
                    field: $field,
                    value,
                })
            }
        }

        impl $ty {
            pub(crate) const fn validate(self) -> Result<Self, BadArgument> {
                match self {
                    $ty::Invalid => Err(BadArgument::InvalidEnum {
                        field: $field,
                        value: $ty::Invalid as u8,
                    }),
                    v => Ok(v),
                }
            }
        }
    };
}

/// Byte order of the message payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum Endian {
    /// Invalid value.
    Invalid = 0,
    /// Big endian.
    Big = 1,
    /// Little endian.
    Little = 2,
}
impl_try_from_u8!(Endian, "endian", Invalid, Big, Little);

impl Endian {
    /// The byte order of the target platform.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        }
    }
}

/// Marks original or replayed telemetry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum PlaybackFlag {
    /// Invalid value.
    Invalid = 0,
    /// Original message.
    Original = 1,
    /// Played back from storage.
    Playback = 2,
}
impl_try_from_u8!(PlaybackFlag, "playback flag", Invalid, Original, Playback);

/// Packet type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum MsgType {
    /// Invalid value.
    Invalid = 0,
    /// Command packet.
    Command = 1,
    /// Telemetry packet.
    Telemetry = 2,
}
impl_try_from_u8!(MsgType, "message type", Invalid, Command, Telemetry);

/// Sequence (segmentation) flags of the primary header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum SegmentationFlag {
    /// Invalid value.
    Invalid = 0,
    /// Continuation segment.
    Continue = 1,
    /// First segment.
    First = 2,
    /// Last segment.
    Last = 3,
    /// Complete packet.
    Unsegmented = 4,
}
impl_try_from_u8!(
    SegmentationFlag,
    "segmentation flag",
    Invalid,
    Continue,
    First,
    Last,
    Unsegmented
);

impl SegmentationFlag {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => SegmentationFlag::Continue,
            0b01 => SegmentationFlag::First,
            0b10 => SegmentationFlag::Last,
            _ => SegmentationFlag::Unsegmented,
        }
    }

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            SegmentationFlag::Continue => 0b00,
            SegmentationFlag::First => 0b01,
            SegmentationFlag::Last => 0b10,
            SegmentationFlag::Unsegmented | SegmentationFlag::Invalid => 0b11,
        }
    }
}
