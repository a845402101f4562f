use derive_more::Display;

use crate::{
    config::PlatformConfig,
    error::BadArgument,
    header::Message,
    params::{
        V2_DEFAULT_SUBSYSTEM_MASK, V2_MSG_ID_APID_MASK, V2_MSG_ID_SUBSYSTEM_MASK,
        V2_MSG_ID_SUBSYSTEM_SHIFT, V2_MSG_ID_TYPE_MASK,
    },
};

/// Software bus message id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{:#06X}", _0)]
#[repr(transparent)]
pub struct MsgId(u32);

impl MsgId {
    /// Creates a new [`MsgId`] from a raw value.
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the message id does not exceed the highest valid message id of `config`.
    ///
    /// Values wider than 16 bits are never valid.
    #[must_use]
    pub const fn is_valid(&self, config: &PlatformConfig) -> bool {
        self.0 <= config.highest_valid_msg_id_value()
    }
}

/// Layout of the message id inside the header.
///
/// - V1: the message id is the whole stream id word (packet type, secondary header flag, and APID).
/// - V2: bits 0-6 are the low APID bits, bit 7 is the packet type, and bits 8-15 are the low subsystem bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum HeaderVersion {
    /// Message id is the stream id.
    V1,
    /// Message id is spread over the stream id and the subsystem.
    V2,
}

impl HeaderVersion {
    /// Subsystem bits that keep the platform default after a message id is set.
    #[must_use]
    pub const fn default_subsystem_mask(&self) -> u16 {
        match self {
            HeaderVersion::V1 => crate::params::SUBSYSTEM_MAX,
            HeaderVersion::V2 => V2_DEFAULT_SUBSYSTEM_MASK,
        }
    }

    fn encode(&self, msg: &mut Message, msg_id: MsgId) {
        let value = msg_id.value();
        match self {
            HeaderVersion::V1 => msg.set_raw_stream_id(value as u16),
            HeaderVersion::V2 => {
                msg.update_stream_id_word(|w| {
                    w.with_is_command(value & V2_MSG_ID_TYPE_MASK != 0)
                        .with_apid(
                            (w.apid() & !(V2_MSG_ID_APID_MASK as u16))
                                | (value & V2_MSG_ID_APID_MASK) as u16,
                        )
                });
                msg.update_subsystem_word(|w| {
                    w.with_subsystem(
                        (w.subsystem() & V2_DEFAULT_SUBSYSTEM_MASK)
                            | ((value >> V2_MSG_ID_SUBSYSTEM_SHIFT) & V2_MSG_ID_SUBSYSTEM_MASK) as u16,
                    )
                });
            }
        }
    }

    fn decode(&self, msg: &Message) -> MsgId {
        match self {
            HeaderVersion::V1 => MsgId(msg.raw_stream_id() as u32),
            HeaderVersion::V2 => {
                let stream_id = msg.stream_id_word();
                let subsystem = msg.subsystem_word().subsystem() as u32;
                let ty = if stream_id.is_command() {
                    V2_MSG_ID_TYPE_MASK
                } else {
                    0
                };
                MsgId(
                    ((subsystem & V2_MSG_ID_SUBSYSTEM_MASK) << V2_MSG_ID_SUBSYSTEM_SHIFT)
                        | ty
                        | (stream_id.apid() as u32 & V2_MSG_ID_APID_MASK),
                )
            }
        }
    }
}

impl Message {
    /// Returns the message id encoded in the header.
    #[must_use]
    pub fn msg_id(&self, config: &PlatformConfig) -> MsgId {
        config.header_version().decode(self)
    }

    /// Encodes the message id into the header.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::InvalidMsgId`] if `msg_id` exceeds the highest valid message id of `config`
    /// or does not fit in 16 bits.
    pub fn set_msg_id(&mut self, config: &PlatformConfig, msg_id: MsgId) -> Result<(), BadArgument> {
        if !msg_id.is_valid(config) {
            return Err(BadArgument::InvalidMsgId(
                msg_id.value(),
                config.highest_valid_msg_id_value(),
            ));
        }
        config.header_version().encode(self, msg_id);
        Ok(())
    }
}
