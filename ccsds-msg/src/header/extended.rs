use crate::{
    error::{check_max, BadArgument},
    params::{EDS_VERSION_MAX, SUBSYSTEM_MAX},
    types::{EdsVersion, Endian, PlaybackFlag, Subsystem, System},
};

use super::Message;

impl Message {
    /// Returns the EDS version.
    #[must_use]
    pub fn eds_version(&self) -> EdsVersion {
        self.subsystem_word().eds_version() as _
    }

    /// Sets the EDS version.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::OutOfRange`] if `version` exceeds [`EDS_VERSION_MAX`].
    pub fn set_eds_version(&mut self, version: EdsVersion) -> Result<(), BadArgument> {
        let version = check_max("EDS version", version, EDS_VERSION_MAX)?;
        self.update_subsystem_word(|w| w.with_eds_version(version as _));
        Ok(())
    }

    /// Returns the byte order flag.
    #[must_use]
    pub fn endian(&self) -> Endian {
        if self.subsystem_word().little_endian() {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    /// Sets the byte order flag.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::InvalidEnum`] if `endian` is [`Endian::Invalid`].
    pub fn set_endian(&mut self, endian: Endian) -> Result<(), BadArgument> {
        let endian = endian.validate()?;
        self.update_subsystem_word(|w| w.with_little_endian(endian == Endian::Little));
        Ok(())
    }

    /// Returns the playback flag.
    #[must_use]
    pub fn playback_flag(&self) -> PlaybackFlag {
        if self.subsystem_word().playback() {
            PlaybackFlag::Playback
        } else {
            PlaybackFlag::Original
        }
    }

    /// Sets the playback flag.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::InvalidEnum`] if `flag` is [`PlaybackFlag::Invalid`].
    pub fn set_playback_flag(&mut self, flag: PlaybackFlag) -> Result<(), BadArgument> {
        let flag = flag.validate()?;
        self.update_subsystem_word(|w| w.with_playback(flag == PlaybackFlag::Playback));
        Ok(())
    }

    /// Returns the subsystem.
    #[must_use]
    pub fn subsystem(&self) -> Subsystem {
        self.subsystem_word().subsystem()
    }

    /// Sets the subsystem.
    ///
    /// With the V2 message id layout the low eight bits are shared with the message id.
    ///
    /// # Errors
    ///
    /// Returns [`BadArgument::OutOfRange`] if `subsystem` exceeds [`SUBSYSTEM_MAX`].
    pub fn set_subsystem(&mut self, subsystem: Subsystem) -> Result<(), BadArgument> {
        let subsystem = check_max("subsystem", subsystem, SUBSYSTEM_MAX)?;
        self.update_subsystem_word(|w| w.with_subsystem(subsystem));
        Ok(())
    }

    /// Returns the system (spacecraft id).
    #[must_use]
    pub fn system(&self) -> System {
        self.raw_system()
    }

    /// Sets the system (spacecraft id). Every [`System`] value fits in the field.
    pub fn set_system(&mut self, system: System) {
        self.set_raw_system(system);
    }
}

#[cfg(test)]
mod tests {
    use zerocopy::FromZeros;

    use crate::{inspect::HeaderFields, params::SYSTEM_MAX};

    use super::*;

    fn assert_only(field: HeaderFields, msg: &Message, fill: u8) {
        let changed = msg.changed_fields(&Message::filled(fill));
        assert!(!changed.intersects(!field), "{:?} changed", changed);
    }

    #[rstest::rstest]
    #[case(EDS_VERSION_MAX + 1)]
    #[case(0xFFFF)]
    fn eds_version_out_of_range(#[case] version: EdsVersion) {
        let mut msg = Message::new_zeroed();
        assert_eq!(
            Err(BadArgument::OutOfRange {
                field: "EDS version",
                value: version as _,
                max: EDS_VERSION_MAX as _
            }),
            msg.set_eds_version(version)
        );
        assert!(msg.non_zero_fields().is_empty());
    }

    #[rstest::rstest]
    #[case(0x00, 0)]
    #[case(0xFF, EDS_VERSION_MAX)]
    fn eds_version_baseline(#[case] fill: u8, #[case] expected: EdsVersion) {
        assert_eq!(expected, Message::filled(fill).eds_version());
    }

    #[rstest::rstest]
    fn eds_version_round_trip(#[values(0x00, 0xFF)] fill: u8) -> anyhow::Result<()> {
        for version in 0..=EDS_VERSION_MAX {
            let mut msg = Message::filled(fill);
            msg.set_eds_version(version)?;
            assert_eq!(version, msg.eds_version());
            assert_only(HeaderFields::EDS_VERSION, &msg, fill);
        }
        Ok(())
    }

    #[rstest::rstest]
    #[case(EDS_VERSION_MAX, HeaderFields::empty())]
    #[case(EDS_VERSION_MAX / 2, HeaderFields::EDS_VERSION)]
    #[case(0, HeaderFields::EDS_VERSION)]
    fn eds_version_all_ones(#[case] version: EdsVersion, #[case] expected: HeaderFields) -> anyhow::Result<()> {
        let mut msg = Message::filled(0xFF);
        msg.set_eds_version(version)?;
        assert_eq!(expected, msg.non_max_fields());
        Ok(())
    }

    #[rstest::rstest]
    #[case(Endian::Big, 0x00)]
    #[case(Endian::Little, 0xFF)]
    fn endian_baseline(#[case] expected: Endian, #[case] fill: u8) {
        assert_eq!(expected, Message::filled(fill).endian());
    }

    #[rstest::rstest]
    #[case(Endian::Big, 0x00, HeaderFields::empty())]
    #[case(Endian::Little, 0x00, HeaderFields::ENDIAN)]
    #[case(Endian::Big, 0xFF, HeaderFields::ENDIAN)]
    #[case(Endian::Little, 0xFF, HeaderFields::empty())]
    fn test_set_endian(#[case] endian: Endian, #[case] fill: u8, #[case] changed: HeaderFields) -> anyhow::Result<()> {
        let mut msg = Message::filled(fill);
        msg.set_endian(endian)?;
        assert_eq!(endian, msg.endian());
        assert_eq!(changed, msg.changed_fields(&Message::filled(fill)));
        Ok(())
    }

    #[test]
    fn endian_invalid() {
        let mut msg = Message::new_zeroed();
        assert_eq!(
            Err(BadArgument::InvalidEnum {
                field: "endian",
                value: 0
            }),
            msg.set_endian(Endian::Invalid)
        );
        assert_eq!(
            Err(BadArgument::InvalidEnum {
                field: "endian",
                value: 3
            }),
            Endian::try_from(Endian::Little as u8 + 1).and_then(|endian| msg.set_endian(endian))
        );
        assert!(msg.non_zero_fields().is_empty());
    }

    #[rstest::rstest]
    #[case(PlaybackFlag::Original, 0x00)]
    #[case(PlaybackFlag::Playback, 0xFF)]
    fn playback_flag_baseline(#[case] expected: PlaybackFlag, #[case] fill: u8) {
        assert_eq!(expected, Message::filled(fill).playback_flag());
    }

    #[rstest::rstest]
    #[case(PlaybackFlag::Original, 0x00, HeaderFields::empty())]
    #[case(PlaybackFlag::Playback, 0x00, HeaderFields::PLAYBACK_FLAG)]
    #[case(PlaybackFlag::Original, 0xFF, HeaderFields::PLAYBACK_FLAG)]
    #[case(PlaybackFlag::Playback, 0xFF, HeaderFields::empty())]
    fn playback_flag(
        #[case] flag: PlaybackFlag,
        #[case] fill: u8,
        #[case] changed: HeaderFields,
    ) -> anyhow::Result<()> {
        let mut msg = Message::filled(fill);
        msg.set_playback_flag(flag)?;
        assert_eq!(flag, msg.playback_flag());
        assert_eq!(changed, msg.changed_fields(&Message::filled(fill)));
        Ok(())
    }

    #[test]
    fn playback_flag_invalid() {
        let mut msg = Message::filled(0xFF);
        assert_eq!(
            Err(BadArgument::InvalidEnum {
                field: "playback flag",
                value: 0
            }),
            msg.set_playback_flag(PlaybackFlag::Invalid)
        );
        assert!(PlaybackFlag::try_from(PlaybackFlag::Playback as u8 + 1)
            .and_then(|flag| msg.set_playback_flag(flag))
            .is_err());
        assert!(msg.non_max_fields().is_empty());
    }

    #[rstest::rstest]
    #[case(SUBSYSTEM_MAX + 1)]
    #[case(0xFFFF)]
    fn subsystem_out_of_range(#[case] subsystem: Subsystem) {
        let mut msg = Message::new_zeroed();
        assert_eq!(
            Err(BadArgument::OutOfRange {
                field: "subsystem",
                value: subsystem as _,
                max: SUBSYSTEM_MAX as _
            }),
            msg.set_subsystem(subsystem)
        );
        assert!(msg.non_zero_fields().is_empty());
    }

    #[rstest::rstest]
    fn subsystem_round_trip(#[values(0x00, 0xFF)] fill: u8) -> anyhow::Result<()> {
        for subsystem in 0..=SUBSYSTEM_MAX {
            let mut msg = Message::filled(fill);
            msg.set_subsystem(subsystem)?;
            assert_eq!(subsystem, msg.subsystem());
            assert_only(HeaderFields::SUBSYSTEM, &msg, fill);
        }
        Ok(())
    }

    #[rstest::rstest]
    #[case(0, HeaderFields::empty())]
    #[case(SUBSYSTEM_MAX / 2, HeaderFields::SUBSYSTEM)]
    #[case(SUBSYSTEM_MAX, HeaderFields::SUBSYSTEM)]
    fn subsystem_all_zeros(#[case] subsystem: Subsystem, #[case] expected: HeaderFields) -> anyhow::Result<()> {
        let mut msg = Message::new_zeroed();
        msg.set_subsystem(subsystem)?;
        assert_eq!(expected, msg.non_zero_fields());
        Ok(())
    }

    #[rstest::rstest]
    fn system_round_trip(#[values(0x00, 0xFF)] fill: u8) {
        for system in 0..=SYSTEM_MAX {
            let mut msg = Message::filled(fill);
            msg.set_system(system);
            assert_eq!(system, msg.system());
            assert_only(HeaderFields::SYSTEM, &msg, fill);
        }
    }

    #[rstest::rstest]
    #[case(0x00, 0)]
    #[case(0xFF, SYSTEM_MAX)]
    fn system_baseline(#[case] fill: u8, #[case] expected: System) {
        assert_eq!(expected, Message::filled(fill).system());
    }
}
