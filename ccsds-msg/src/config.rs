use getset::CopyGetters;
use zerocopy::FromZeros;

use crate::{
    error::BadArgument,
    header::Message,
    msg_id::{HeaderVersion, MsgId},
    params::*,
    types::{ApId, CcsdsVersion, EdsVersion, Endian, Subsystem, System},
};

/// Platform and mission constants consumed by the message header codec.
///
/// [`PlatformConfig::DEFAULT`] is assembled from [`params`](crate::params).
/// The V2 message id layout is the default if the `msgid_v2` feature is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct PlatformConfig {
    /// The message id layout.
    header_version: HeaderVersion,
    /// The default EDS version.
    eds_version: EdsVersion,
    /// The default subsystem.
    default_subsystem: Subsystem,
    /// The default APID.
    default_apid: ApId,
    /// The spacecraft id.
    spacecraft_id: System,
    /// The CCSDS version number.
    ccsds_version: CcsdsVersion,
    /// The byte order of this platform.
    endian: Endian,
    /// The highest valid message id.
    highest_valid_msg_id: MsgId,
}

impl PlatformConfig {
    /// The configuration of this platform.
    pub const DEFAULT: Self = Self::new(if cfg!(feature = "msgid_v2") {
        HeaderVersion::V2
    } else {
        HeaderVersion::V1
    });

    /// Creates a configuration with the platform defaults for the given message id layout.
    #[must_use]
    pub const fn new(header_version: HeaderVersion) -> Self {
        Self {
            header_version,
            eds_version: DEFAULT_EDS_VERSION,
            default_subsystem: DEFAULT_SUBSYSTEM,
            default_apid: DEFAULT_APID,
            spacecraft_id: MISSION_SPACECRAFT_ID,
            ccsds_version: MISSION_CCSDS_VERSION,
            endian: Endian::native(),
            highest_valid_msg_id: MsgId::from_value(match header_version {
                HeaderVersion::V1 => HIGHEST_VALID_MSG_ID_V1,
                HeaderVersion::V2 => HIGHEST_VALID_MSG_ID_V2,
            }),
        }
    }

    /// Sets the default EDS version.
    #[must_use]
    pub const fn with_eds_version(mut self, eds_version: EdsVersion) -> Self {
        self.eds_version = eds_version;
        self
    }

    /// Sets the default subsystem.
    #[must_use]
    pub const fn with_default_subsystem(mut self, subsystem: Subsystem) -> Self {
        self.default_subsystem = subsystem;
        self
    }

    /// Sets the default APID.
    #[must_use]
    pub const fn with_default_apid(mut self, apid: ApId) -> Self {
        self.default_apid = apid;
        self
    }

    /// Sets the spacecraft id.
    #[must_use]
    pub const fn with_spacecraft_id(mut self, spacecraft_id: System) -> Self {
        self.spacecraft_id = spacecraft_id;
        self
    }

    /// Sets the CCSDS version number.
    #[must_use]
    pub const fn with_ccsds_version(mut self, version: CcsdsVersion) -> Self {
        self.ccsds_version = version;
        self
    }

    /// Sets the byte order of this platform.
    #[must_use]
    pub const fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Sets the highest valid message id.
    #[must_use]
    pub const fn with_highest_valid_msg_id(mut self, msg_id: MsgId) -> Self {
        self.highest_valid_msg_id = msg_id;
        self
    }

    // Message ids wider than the 16 bits the header can carry are never valid.
    pub(crate) const fn highest_valid_msg_id_value(&self) -> u32 {
        let value = self.highest_valid_msg_id.value();
        if value > u16::MAX as u32 {
            u16::MAX as u32
        } else {
            value
        }
    }

    /// Checks that every default fits in its header field.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument`] if the highest valid message id does not fit in 16 bits
    /// or if a default does not fit in its header field.
    pub fn validate(&self) -> Result<(), BadArgument> {
        if self.highest_valid_msg_id.value() > u16::MAX as u32 {
            return Err(BadArgument::OutOfRange {
                field: "highest valid message id",
                value: self.highest_valid_msg_id.value(),
                max: u16::MAX as _,
            });
        }
        Message::new_zeroed().apply_defaults(self)
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let config = PlatformConfig::default();
        assert_eq!(PlatformConfig::DEFAULT, config);
        #[cfg(feature = "msgid_v2")]
        assert_eq!(HeaderVersion::V2, config.header_version());
        #[cfg(not(feature = "msgid_v2"))]
        assert_eq!(HeaderVersion::V1, config.header_version());
        assert_eq!(DEFAULT_EDS_VERSION, config.eds_version());
        assert_eq!(DEFAULT_SUBSYSTEM, config.default_subsystem());
        assert_eq!(MISSION_SPACECRAFT_ID, config.spacecraft_id());
        assert_eq!(Endian::native(), config.endian());
        assert_eq!(Ok(()), config.validate());
    }

    #[rstest::rstest]
    #[case(HIGHEST_VALID_MSG_ID_V1, HeaderVersion::V1)]
    #[case(HIGHEST_VALID_MSG_ID_V2, HeaderVersion::V2)]
    fn highest_valid_msg_id(#[case] expected: u32, #[case] version: HeaderVersion) {
        assert_eq!(
            expected,
            PlatformConfig::new(version).highest_valid_msg_id().value()
        );
    }

    #[rstest::rstest]
    #[case(Ok(()), PlatformConfig::DEFAULT.with_eds_version(EDS_VERSION_MAX))]
    #[case(Err(BadArgument::OutOfRange { field: "EDS version", value: 0x20, max: 0x1F }), PlatformConfig::DEFAULT.with_eds_version(0x20))]
    #[case(Err(BadArgument::OutOfRange { field: "subsystem", value: 0x200, max: 0x1FF }), PlatformConfig::DEFAULT.with_default_subsystem(0x200))]
    #[case(Err(BadArgument::OutOfRange { field: "APID", value: 0x800, max: 0x7FF }), PlatformConfig::DEFAULT.with_default_apid(0x800))]
    #[case(Err(BadArgument::OutOfRange { field: "CCSDS version", value: 0x8, max: 0x7 }), PlatformConfig::DEFAULT.with_ccsds_version(0x8))]
    #[case(Err(BadArgument::InvalidEnum { field: "endian", value: 0 }), PlatformConfig::DEFAULT.with_endian(Endian::Invalid))]
    #[case(Err(BadArgument::OutOfRange { field: "highest valid message id", value: 0x10000, max: 0xFFFF }), PlatformConfig::DEFAULT.with_highest_valid_msg_id(MsgId::from_value(0x10000)))]
    fn validate(#[case] expected: Result<(), BadArgument>, #[case] config: PlatformConfig) {
        assert_eq!(expected, config.validate());
    }
}
