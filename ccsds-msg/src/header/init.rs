use zerocopy::{FromZeros, IntoBytes};

use crate::{
    config::PlatformConfig,
    error::BadArgument,
    msg_id::MsgId,
    types::SegmentationFlag,
};

use super::Message;

/// Initializes the message header at the head of `buf`.
///
/// If `clear` is `true`, the first `size` bytes of `buf` (at most the whole buffer) are zeroed first.
/// Otherwise, bits not written by the defaults, the message id, or the size keep their previous values.
///
/// # Errors
///
/// Returns [`BadArgument`] if `buf` cannot hold a message header or if the message id, the size,
/// or a default in `config` is invalid. `buf` is left unmodified in that case.
pub fn init(
    buf: &mut [u8],
    config: &PlatformConfig,
    msg_id: MsgId,
    size: usize,
    clear: bool,
) -> Result<(), BadArgument> {
    let msg = Message::view(buf)?;
    let header = msg.initialized(config, msg_id, size, clear)?;
    if clear {
        let len = size.min(buf.len());
        buf[..len].fill(0);
    }
    buf[..Message::SIZE].copy_from_slice(header.as_bytes());
    Ok(())
}

impl Message {
    /// Initializes the header with the message id, the size, and the defaults of `config`.
    ///
    /// If `clear` is `true`, the header is zeroed first.
    /// Otherwise, bits not written by the defaults, the message id, or the size keep their previous values.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument`] if the message id, the size, or a default in `config` is invalid.
    /// The header is left unmodified in that case.
    pub fn init(
        &mut self,
        config: &PlatformConfig,
        msg_id: MsgId,
        size: usize,
        clear: bool,
    ) -> Result<(), BadArgument> {
        *self = self.initialized(config, msg_id, size, clear)?;
        Ok(())
    }

    fn initialized(
        &self,
        config: &PlatformConfig,
        msg_id: MsgId,
        size: usize,
        clear: bool,
    ) -> Result<Self, BadArgument> {
        let mut msg = if clear {
            Self::new_zeroed()
        } else {
            self.clone()
        };
        msg.apply_defaults(config)?;
        // The message id owns part of the defaulted bits, so it goes after the defaults.
        msg.set_msg_id(config, msg_id)?;
        msg.set_size(size)?;

        tracing::trace!(
            msg_id = %msg_id,
            size,
            clear,
            header_version = %config.header_version(),
            "message header initialized"
        );
        Ok(msg)
    }

    pub(crate) fn apply_defaults(&mut self, config: &PlatformConfig) -> Result<(), BadArgument> {
        self.set_has_secondary_header(true);
        self.set_ccsds_version(config.ccsds_version())?;
        self.set_apid(config.default_apid())?;
        self.set_segmentation_flag(SegmentationFlag::Unsegmented)?;

        self.set_eds_version(config.eds_version())?;
        self.set_endian(config.endian())?;
        self.set_subsystem(config.default_subsystem())?;
        self.set_system(config.spacecraft_id());
        Ok(())
    }
}
