use bitflags::bitflags;

use crate::header::Message;

bitflags! {
    /// Set of header fields.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HeaderFields: u16 {
        /// CCSDS version number.
        const CCSDS_VERSION = 1 << 0;
        /// Packet type.
        const MSG_TYPE = 1 << 1;
        /// Secondary header flag.
        const HAS_SECONDARY_HEADER = 1 << 2;
        /// Application process identifier.
        const APID = 1 << 3;
        /// Segmentation flag.
        const SEGMENTATION_FLAG = 1 << 4;
        /// Sequence count.
        const SEQUENCE_COUNT = 1 << 5;
        /// Length.
        const LENGTH = 1 << 6;
        /// EDS version.
        const EDS_VERSION = 1 << 7;
        /// Byte order flag.
        const ENDIAN = 1 << 8;
        /// Playback flag.
        const PLAYBACK_FLAG = 1 << 9;
        /// Subsystem.
        const SUBSYSTEM = 1 << 10;
        /// System (spacecraft id).
        const SYSTEM = 1 << 11;

        /// Fields of the primary header.
        const PRIMARY = Self::CCSDS_VERSION.bits()
            | Self::MSG_TYPE.bits()
            | Self::HAS_SECONDARY_HEADER.bits()
            | Self::APID.bits()
            | Self::SEGMENTATION_FLAG.bits()
            | Self::SEQUENCE_COUNT.bits()
            | Self::LENGTH.bits();
        /// Fields of the extended header.
        const EXTENDED = Self::EDS_VERSION.bits()
            | Self::ENDIAN.bits()
            | Self::PLAYBACK_FLAG.bits()
            | Self::SUBSYSTEM.bits()
            | Self::SYSTEM.bits();
    }
}

impl Message {
    // (field, raw bits, all-ones value)
    fn raw_fields(&self) -> [(HeaderFields, u16, u16); 12] {
        let stream_id = self.stream_id_word();
        let sequence = self.sequence_word();
        let subsystem = self.subsystem_word();
        [
            (HeaderFields::CCSDS_VERSION, stream_id.ccsds_version() as _, 0x7),
            (HeaderFields::MSG_TYPE, stream_id.is_command() as _, 0x1),
            (HeaderFields::HAS_SECONDARY_HEADER, stream_id.has_secondary_header() as _, 0x1),
            (HeaderFields::APID, stream_id.apid(), 0x7FF),
            (HeaderFields::SEGMENTATION_FLAG, sequence.segmentation() as _, 0x3),
            (HeaderFields::SEQUENCE_COUNT, sequence.count(), 0x3FFF),
            (HeaderFields::LENGTH, self.raw_length(), 0xFFFF),
            (HeaderFields::EDS_VERSION, subsystem.eds_version() as _, 0x1F),
            (HeaderFields::ENDIAN, subsystem.little_endian() as _, 0x1),
            (HeaderFields::PLAYBACK_FLAG, subsystem.playback() as _, 0x1),
            (HeaderFields::SUBSYSTEM, subsystem.subsystem(), 0x1FF),
            (HeaderFields::SYSTEM, self.raw_system(), 0xFFFF),
        ]
    }

    /// Returns the fields whose bits are not all zero.
    #[must_use]
    pub fn non_zero_fields(&self) -> HeaderFields {
        self.raw_fields()
            .into_iter()
            .filter(|&(_, bits, _)| bits != 0)
            .fold(HeaderFields::empty(), |acc, (field, _, _)| acc | field)
    }

    /// Returns the fields whose bits are not all one.
    #[must_use]
    pub fn non_max_fields(&self) -> HeaderFields {
        self.raw_fields()
            .into_iter()
            .filter(|&(_, bits, max)| bits != max)
            .fold(HeaderFields::empty(), |acc, (field, _, _)| acc | field)
    }

    /// Returns the fields that differ from `other`.
    #[must_use]
    pub fn changed_fields(&self, other: &Message) -> HeaderFields {
        self.raw_fields()
            .into_iter()
            .zip(other.raw_fields())
            .filter(|((_, lhs, _), (_, rhs, _))| lhs != rhs)
            .fold(HeaderFields::empty(), |acc, ((field, _, _), _)| acc | field)
    }
}
