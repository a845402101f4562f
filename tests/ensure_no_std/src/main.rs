#![no_std]
#![no_main]

use ccsds_msg::{Message, MsgId, PlatformConfig};

#[panic_handler]
fn panic(_panic: &core::panic::PanicInfo<'_>) -> ! {
    loop {}
}

#[unsafe(no_mangle)]
fn main() {
    let mut buf = [0u8; 16];
    if ccsds_msg::init(
        &mut buf,
        &PlatformConfig::DEFAULT,
        MsgId::from_value(0),
        Message::SIZE,
        true,
    )
    .is_err()
    {
        panic!();
    }
}
