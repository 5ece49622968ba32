// libultralight/src/card/operations/security.rs

use log::debug;

use crate::constants::{
    DYNAMIC_LOCK_PAGE_OFFSET, PACK_PAGE_OFFSET, PASSWORD_PAGE_OFFSET, STATIC_LOCK_PAGE,
};
use crate::device::Ultralight;
use crate::protocol::{Command, Response};
use crate::types::{LockBytes, Pack, PageData, Password};
use crate::{Error, Result};

impl Ultralight {
    /// PWD_AUTH, then compare the returned PACK with `expected_pack`.
    pub fn authenticate(&mut self, password: Password, expected_pack: Pack) -> Result<()> {
        let pack = match self.execute(Command::PasswordAuth { password })? {
            Response::Pack(pack) => pack,
            other => return Err(Error::UnexpectedResponse(other.name())),
        };
        if pack != expected_pack {
            return Err(Error::PackMismatch {
                expected: *expected_pack.as_bytes(),
                actual: *pack.as_bytes(),
            });
        }
        debug!("ultralight: authenticated");
        Ok(())
    }

    /// Write PWD (page `end_page - 1`).
    pub fn set_password(&mut self, password: Password) -> Result<()> {
        self.ensure_initialized()?;
        let page = self.config_page(PASSWORD_PAGE_OFFSET);
        self.write_page(page, password.to_page())
    }

    /// Write PACK (page `end_page`, bytes `pack0 pack1 00 00`).
    pub fn set_pack(&mut self, pack: Pack) -> Result<()> {
        self.ensure_initialized()?;
        let page = self.config_page(PACK_PAGE_OFFSET);
        self.write_page(page, pack.to_page())
    }

    /// Write the static lock bytes (page 2, bytes 2..3) then the dynamic
    /// lock bytes (page `end_page - 4`, bytes 0..2).
    pub fn set_lock(&mut self, lock: LockBytes) -> Result<()> {
        self.ensure_initialized()?;
        let l = lock.as_bytes();
        self.write_page(STATIC_LOCK_PAGE, PageData::from_bytes([0, 0, l[0], l[1]]))?;
        let page = self.config_page(DYNAMIC_LOCK_PAGE_OFFSET);
        self.write_page(page, PageData::from_bytes([l[2], l[3], l[4], 0]))
    }

    /// Static lock bytes from page 2 and dynamic lock bytes from `end_page - 4`.
    pub fn get_lock(&mut self) -> Result<LockBytes> {
        self.ensure_initialized()?;
        let fixed = self.read_single_page(STATIC_LOCK_PAGE)?;
        let page = self.config_page(DYNAMIC_LOCK_PAGE_OFFSET);
        let dynamic = self.read_single_page(page)?;
        let f = fixed.as_bytes();
        let d = dynamic.as_bytes();
        Ok(LockBytes::from_bytes([f[2], f[3], d[0], d[1], d[2]]))
    }

    /// FAST_READ of exactly one page.
    pub(crate) fn read_single_page(&mut self, page: u8) -> Result<PageData> {
        match self.execute(Command::FastRead {
            start: page,
            stop: page,
        })? {
            Response::Pages(data) => PageData::try_from(&data[..]),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }
}
