// libultralight/src/card/operations/activation.rs

use log::{debug, warn};

use crate::card::CardInfo;
use crate::device::{Selection, Ultralight};
use crate::protocol::{Command, Response};
use crate::types::{CascadeLevel, Storage, TagType, Uid, UidPart, Version};
use crate::{Error, Result};

impl Ultralight {
    /// REQA: detect an idle tag in the field.
    pub fn request(&mut self) -> Result<TagType> {
        self.ensure_initialized()?;
        self.poll(Command::Request)
    }

    /// WUPA: detect an idle or halted tag, after the configured delay.
    pub fn wake_up(&mut self) -> Result<TagType> {
        self.ensure_initialized()?;
        self.delay.delay_ms(self.wake_up_delay_ms);
        self.poll(Command::WakeUp)
    }

    fn poll(&mut self, cmd: Command) -> Result<TagType> {
        self.selection = Selection::Idle;
        let outcome = match self.execute(cmd) {
            Ok(Response::Atqa(_)) => Ok(TagType::Ultralight),
            Ok(other) => Err(Error::UnexpectedResponse(other.name())),
            Err(e) => Err(e),
        };
        self.tag_type = match &outcome {
            Ok(t) => *t,
            Err(_) => TagType::Invalid,
        };
        debug!("ultralight: tag type {:?}", self.tag_type);
        outcome
    }

    /// HLTA. The tag does not answer, so the exchange result is ignored.
    pub fn halt(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.selection = Selection::Idle;
        if let Err(e) = self.exchange(&Command::Halt) {
            debug!("ultralight: halt exchange ignored: {}", e);
        }
        Ok(())
    }

    /// ANTICOLLISION at cascade level 1.
    pub fn anticollision_cl1(&mut self) -> Result<UidPart> {
        self.anticollision(CascadeLevel::One)
    }

    /// Fails with `CascadeOutOfOrder` until `select_cl1` has succeeded.
    pub fn anticollision_cl2(&mut self) -> Result<UidPart> {
        self.anticollision(CascadeLevel::Two)
    }

    fn anticollision(&mut self, level: CascadeLevel) -> Result<UidPart> {
        self.ensure_initialized()?;
        self.selection.check_level(level)?;
        match self.execute(Command::Anticollision { level })? {
            Response::UidPart(part) => Ok(part),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }

    /// SELECT cascade level 1 with the part from `anticollision_cl1`.
    pub fn select_cl1(&mut self, part: UidPart) -> Result<()> {
        self.select(CascadeLevel::One, part).map(|_| ())
    }

    /// Select cascade level 2 and return the combined id.
    pub fn select_cl2(&mut self, part: UidPart) -> Result<Uid> {
        self.select(CascadeLevel::Two, part)?
            .uid()
            .ok_or(Error::CascadeOutOfOrder)
    }

    fn select(&mut self, level: CascadeLevel, part: UidPart) -> Result<Selection> {
        self.ensure_initialized()?;
        self.selection.check_level(level)?;
        match self.execute(Command::Select { level, part })? {
            Response::Sak(_) => {
                self.selection = self.selection.after_select(level, part)?;
                debug!("ultralight: selected {:?}", self.selection);
                Ok(self.selection)
            }
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }

    /// GET_VERSION. A known storage size also sets the end page.
    pub fn get_version(&mut self) -> Result<Version> {
        let version = match self.execute(Command::GetVersion)? {
            Response::Version(v) => v,
            other => return Err(Error::UnexpectedResponse(other.name())),
        };
        match Storage::from_storage_size(version.storage_size) {
            Some(storage) => {
                self.end_page = storage.end_page();
                debug!("ultralight: {:?}, end page {:#04x}", storage, self.end_page);
            }
            None => warn!(
                "ultralight: unknown storage size {:#04x}, end page left at {:#04x}",
                version.storage_size, self.end_page
            ),
        }
        Ok(version)
    }

    /// One pass of the full search sequence: REQA, both cascade levels,
    /// page 0 and GET_VERSION. Retrying is up to the caller.
    pub fn activate(&mut self) -> Result<CardInfo> {
        self.request()?;
        let cl1 = self.anticollision_cl1()?;
        self.select_cl1(cl1)?;
        let cl2 = self.anticollision_cl2()?;
        let uid = self.select_cl2(cl2)?;
        let serial = self.get_serial_number()?;
        let version = self.get_version()?;
        let storage = Storage::from_end_page(self.end_page);
        Ok(CardInfo::new(uid, serial, version, storage))
    }
}
