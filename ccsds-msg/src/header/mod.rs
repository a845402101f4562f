mod extended;
mod init;
mod primary;

pub use init::init;
pub use primary::next_sequence_count;

use zerocopy::{
    byteorder::{BigEndian, U16},
    FromBytes, FromZeros, Immutable, IntoBytes, KnownLayout, Unaligned,
};

use crate::error::BadArgument;

#[bitfield_struct::bitfield(u16)]
#[derive(PartialEq, Eq)]
pub(crate) struct StreamIdWord {
    #[bits(11)]
    pub(crate) apid: u16,
    pub(crate) has_secondary_header: bool,
    pub(crate) is_command: bool,
    #[bits(3)]
    pub(crate) ccsds_version: u8,
}

#[bitfield_struct::bitfield(u16)]
#[derive(PartialEq, Eq)]
pub(crate) struct SequenceWord {
    #[bits(14)]
    pub(crate) count: u16,
    #[bits(2)]
    pub(crate) segmentation: u8,
}

#[bitfield_struct::bitfield(u16)]
#[derive(PartialEq, Eq)]
pub(crate) struct SubsystemWord {
    #[bits(9)]
    pub(crate) subsystem: u16,
    pub(crate) playback: bool,
    pub(crate) little_endian: bool,
    #[bits(5)]
    pub(crate) eds_version: u8,
}

/// CCSDS space packet header with the extended secondary header.
///
/// The header is a view over caller-owned bytes (see [`Message::view`] and [`Message::view_mut`]).
/// All words are big endian on the wire.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq, KnownLayout, IntoBytes, FromBytes, Immutable, Unaligned)]
pub struct Message {
    stream_id: U16<BigEndian>,
    sequence: U16<BigEndian>,
    length: U16<BigEndian>,
    subsystem: U16<BigEndian>,
    system: U16<BigEndian>,
}

impl Message {
    /// The size of the message header in bytes.
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Views the head of `bytes` as a message header.
    pub fn view(bytes: &[u8]) -> Result<&Self, BadArgument> {
        Self::ref_from_prefix(bytes)
            .map(|(msg, _)| msg)
            .map_err(|_| BadArgument::BufferTooShort(bytes.len(), Self::SIZE))
    }

    /// Views the head of `bytes` as a mutable message header.
    pub fn view_mut(bytes: &mut [u8]) -> Result<&mut Self, BadArgument> {
        let len = bytes.len();
        Self::mut_from_prefix(bytes)
            .map(|(msg, _)| msg)
            .map_err(|_| BadArgument::BufferTooShort(len, Self::SIZE))
    }

    /// Creates a header with every byte set to `byte`.
    #[must_use]
    pub fn filled(byte: u8) -> Self {
        let mut msg = Self::new_zeroed();
        msg.as_mut_bytes().fill(byte);
        msg
    }

    pub(crate) fn stream_id_word(&self) -> StreamIdWord {
        StreamIdWord::from_bits(self.stream_id.get())
    }

    pub(crate) fn update_stream_id_word(&mut self, f: impl FnOnce(StreamIdWord) -> StreamIdWord) {
        self.stream_id.set(f(self.stream_id_word()).into_bits());
    }

    pub(crate) fn raw_stream_id(&self) -> u16 {
        self.stream_id.get()
    }

    pub(crate) fn set_raw_stream_id(&mut self, raw: u16) {
        self.stream_id.set(raw);
    }

    pub(crate) fn sequence_word(&self) -> SequenceWord {
        SequenceWord::from_bits(self.sequence.get())
    }

    pub(crate) fn update_sequence_word(&mut self, f: impl FnOnce(SequenceWord) -> SequenceWord) {
        self.sequence.set(f(self.sequence_word()).into_bits());
    }

    pub(crate) fn raw_length(&self) -> u16 {
        self.length.get()
    }

    pub(crate) fn set_raw_length(&mut self, raw: u16) {
        self.length.set(raw);
    }

    pub(crate) fn subsystem_word(&self) -> SubsystemWord {
        SubsystemWord::from_bits(self.subsystem.get())
    }

    pub(crate) fn update_subsystem_word(&mut self, f: impl FnOnce(SubsystemWord) -> SubsystemWord) {
        self.subsystem.set(f(self.subsystem_word()).into_bits());
    }

    pub(crate) fn raw_system(&self) -> u16 {
        self.system.get()
    }

    pub(crate) fn set_raw_system(&mut self, raw: u16) {
        self.system.set(raw);
    }
}

impl core::fmt::Display for Message {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.as_bytes().iter().enumerate().try_for_each(|(i, b)| {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", b)
        })
    }
}
