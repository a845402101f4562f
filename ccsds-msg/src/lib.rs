#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Codec for CCSDS space packet headers with the extended secondary header.
//!
//! The codec works on caller-owned bytes. Every setter validates its input before touching the header,
//! so a rejected call leaves the header byte-for-byte unmodified.
//!
//! ```
//! use ccsds_msg::{Endian, Message, MsgId, PlatformConfig};
//!
//! let config = PlatformConfig::DEFAULT;
//! let mut buf = [0u8; 16];
//! ccsds_msg::init(&mut buf, &config, MsgId::from_value(0x18), 16, true).unwrap();
//!
//! let msg = Message::view_mut(&mut buf).unwrap();
//! msg.set_endian(Endian::Big).unwrap();
//! assert!(msg.set_eds_version(0x20).is_err());
//! assert_eq!(config.eds_version(), msg.eds_version());
//! assert_eq!(16, msg.size());
//! ```

/// Platform configuration.
pub mod config;
/// Error type.
pub mod error;
/// Message header and field accessors.
pub mod header;
/// Field diagnostics.
pub mod inspect;
/// Message id and header version.
pub mod msg_id;
/// Field widths and platform constants.
pub mod params;
/// Field value types.
pub mod types;

#[doc(inline)]
pub use {
    config::PlatformConfig,
    error::BadArgument,
    header::{init, next_sequence_count, Message},
    inspect::HeaderFields,
    msg_id::{HeaderVersion, MsgId},
    types::*,
};
