/// The maximum value of the EDS version field (5 bits).
pub const EDS_VERSION_MAX: u16 = 0x1F;
/// The maximum value of the subsystem field (9 bits).
pub const SUBSYSTEM_MAX: u16 = 0x1FF;
/// The maximum value of the system (spacecraft id) field (16 bits).
pub const SYSTEM_MAX: u16 = 0xFFFF;
/// The maximum value of the CCSDS version field (3 bits).
pub const CCSDS_VERSION_MAX: u16 = 0x7;
/// The maximum value of the APID field (11 bits).
pub const APID_MAX: u16 = 0x7FF;
/// The maximum value of the sequence count field (14 bits).
pub const SEQUENCE_COUNT_MAX: u16 = 0x3FFF;

/// Subsystem bits that are not owned by a V2 message id.
pub const V2_DEFAULT_SUBSYSTEM_MASK: u16 = 0x100;
#[doc(hidden)]
pub const V2_MSG_ID_APID_MASK: u32 = 0x7F;
#[doc(hidden)]
pub const V2_MSG_ID_TYPE_MASK: u32 = 0x80;
#[doc(hidden)]
pub const V2_MSG_ID_SUBSYSTEM_SHIFT: u32 = 8;
#[doc(hidden)]
pub const V2_MSG_ID_SUBSYSTEM_MASK: u32 = 0xFF;

/// The length field stores the total message size minus this offset.
pub const MESSAGE_SIZE_OFFSET: usize = 7;
/// The maximum total message size.
pub const MESSAGE_SIZE_MAX: usize = u16::MAX as usize + MESSAGE_SIZE_OFFSET;

/// The default EDS version of this platform.
pub const DEFAULT_EDS_VERSION: u16 = 1;
/// The default subsystem of this platform.
pub const DEFAULT_SUBSYSTEM: u16 = 0;
/// The default APID of this platform.
pub const DEFAULT_APID: u16 = 0;
/// The spacecraft id of this mission.
pub const MISSION_SPACECRAFT_ID: u16 = 0x42;
/// The CCSDS version number of this mission.
pub const MISSION_CCSDS_VERSION: u16 = 0;

/// The highest valid message id with the V1 message id layout.
pub const HIGHEST_VALID_MSG_ID_V1: u32 = 0x1FFF;
/// The highest valid message id with the V2 message id layout.
pub const HIGHEST_VALID_MSG_ID_V2: u32 = 0xFFFF;
