use crate::{
    error::{check_max, BadArgument},
    params::{APID_MAX, CCSDS_VERSION_MAX, MESSAGE_SIZE_MAX, MESSAGE_SIZE_OFFSET, SEQUENCE_COUNT_MAX},
    types::{ApId, CcsdsVersion, MsgType, SegmentationFlag, SequenceCount},
};

use super::Message;

/// Returns the sequence count following `count`, wrapping to zero after [`SEQUENCE_COUNT_MAX`].
#[must_use]
pub const fn next_sequence_count(count: SequenceCount) -> SequenceCount {
    if count < SEQUENCE_COUNT_MAX {
        count + 1
    } else {
        0
    }
}

impl Message {
    /// Returns the CCSDS version number.
    #[must_use]
    pub fn ccsds_version(&self) -> CcsdsVersion {
        self.stream_id_word().ccsds_version() as _
    }

    /// Sets the CCSDS version number.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::OutOfRange`] if `version` exceeds [`CCSDS_VERSION_MAX`].
    pub fn set_ccsds_version(&mut self, version: CcsdsVersion) -> Result<(), BadArgument> {
        let version = check_max("CCSDS version", version, CCSDS_VERSION_MAX)?;
        self.update_stream_id_word(|w| w.with_ccsds_version(version as _));
        Ok(())
    }

    /// Returns the packet type.
    #[must_use]
    pub fn msg_type(&self) -> MsgType {
        if self.stream_id_word().is_command() {
            MsgType::Command
        } else {
            MsgType::Telemetry
        }
    }

    /// Sets the packet type.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::InvalidEnum`] if `ty` is [`MsgType::Invalid`].
    pub fn set_msg_type(&mut self, ty: MsgType) -> Result<(), BadArgument> {
        let ty = ty.validate()?;
        self.update_stream_id_word(|w| w.with_is_command(ty == MsgType::Command));
        Ok(())
    }

    /// Returns `true` if the secondary header flag is set.
    #[must_use]
    pub fn has_secondary_header(&self) -> bool {
        self.stream_id_word().has_secondary_header()
    }

    /// Sets the secondary header flag.
    pub fn set_has_secondary_header(&mut self, has_secondary_header: bool) {
        self.update_stream_id_word(|w| w.with_has_secondary_header(has_secondary_header));
    }

    /// Returns the application process identifier.
    #[must_use]
    pub fn apid(&self) -> ApId {
        self.stream_id_word().apid()
    }

    /// Sets the application process identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::OutOfRange`] if `apid` exceeds [`APID_MAX`].
    pub fn set_apid(&mut self, apid: ApId) -> Result<(), BadArgument> {
        let apid = check_max("APID", apid, APID_MAX)?;
        self.update_stream_id_word(|w| w.with_apid(apid));
        Ok(())
    }

    /// Returns the segmentation flag.
    #[must_use]
    pub fn segmentation_flag(&self) -> SegmentationFlag {
        SegmentationFlag::from_bits(self.sequence_word().segmentation())
    }

    /// Sets the segmentation flag.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::InvalidEnum`] if `flag` is [`SegmentationFlag::Invalid`].
    pub fn set_segmentation_flag(&mut self, flag: SegmentationFlag) -> Result<(), BadArgument> {
        let flag = flag.validate()?;
        self.update_sequence_word(|w| w.with_segmentation(flag.into_bits()));
        Ok(())
    }

    /// Returns the sequence count.
    #[must_use]
    pub fn sequence_count(&self) -> SequenceCount {
        self.sequence_word().count()
    }

    /// Sets the sequence count.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::OutOfRange`] if `count` exceeds [`SEQUENCE_COUNT_MAX`].
    pub fn set_sequence_count(&mut self, count: SequenceCount) -> Result<(), BadArgument> {
        let count = check_max("sequence count", count, SEQUENCE_COUNT_MAX)?;
        self.update_sequence_word(|w| w.with_count(count));
        Ok(())
    }

    /// Returns the total message size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.raw_length() as usize + MESSAGE_SIZE_OFFSET
    }

    /// Sets the total message size in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::SizeOutOfRange`] if `size` is outside
    /// [`MESSAGE_SIZE_OFFSET`]..=[`MESSAGE_SIZE_MAX`].
    pub fn set_size(&mut self, size: usize) -> Result<(), BadArgument> {
        if !(MESSAGE_SIZE_OFFSET..=MESSAGE_SIZE_MAX).contains(&size) {
            return Err(BadArgument::SizeOutOfRange(
                size,
                MESSAGE_SIZE_OFFSET,
                MESSAGE_SIZE_MAX,
            ));
        }
        self.set_raw_length((size - MESSAGE_SIZE_OFFSET) as u16);
        Ok(())
    }
}
