use thiserror::Error;

/// An error produced by the message header codec.
///
/// Every variant is a rejected call: the header is left byte-for-byte unmodified.
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum BadArgument {
    /// The byte buffer cannot hold a message header.
    #[error("Buffer length ({0}) is shorter than the message header ({1})")]
    BufferTooShort(usize, usize),
    /// A numeric field value does not fit in the field.
    #[error("{field} ({value:#X}) is out of range ([0, {max:#X}])")]
    OutOfRange {
        /// Name of the field.
        field: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum representable value.
        max: u32,
    },
    /// An enumerated field value is not a defined member.
    #[error("{value} is not a valid {field}")]
    InvalidEnum {
        /// Name of the field.
        field: &'static str,
        /// The rejected raw value.
        value: u8,
    },
    /// The message id exceeds the highest valid message id.
    #[error("Message id ({0:#X}) exceeds the highest valid message id ({1:#X})")]
    InvalidMsgId(u32, u32),
    /// The total message size cannot be expressed by the length field.
    #[error("Message size ({0}) is out of range ([{1}, {2}])")]
    SizeOutOfRange(usize, usize, usize),
}

pub(crate) const fn check_max(field: &'static str, value: u16, max: u16) -> Result<u16, BadArgument> {
    if value > max {
        return Err(BadArgument::OutOfRange {
            field,
            value: value as u32,
            max: max as u32,
        });
    }
    Ok(value)
}
