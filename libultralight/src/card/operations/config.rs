// libultralight/src/card/operations/config.rs
//
// Configuration pages are updated read-modify-write: FAST_READ of the page,
// change only the targeted bits, WRITE of all four bytes. The two exchanges
// are not atomic.

use log::debug;

use crate::constants::{
    ACCESS_PAGE_OFFSET, AUTH_LIMIT_MASK, AUTH_LIMIT_MAX, AUTH0_BYTE, CONFIG_PAGE_OFFSET,
    MODULATION_BIT, VCTID_BYTE,
};
use crate::device::Ultralight;
use crate::types::{Access, ModulationMode, PageData};
use crate::{Error, Result};

impl Ultralight {
    fn read_config(&mut self, offset: u8) -> Result<(u8, [u8; 4])> {
        let page = self.config_page(offset);
        let data = self.read_single_page(page)?;
        Ok((page, *data.as_bytes()))
    }

    fn modify_config<F>(&mut self, offset: u8, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut [u8; 4]),
    {
        self.ensure_initialized()?;
        let (page, mut bytes) = self.read_config(offset)?;
        mutate(&mut bytes);
        debug!("ultralight: config page {:#04x} <- {:02x?}", page, bytes);
        self.write_page(page, PageData::from_bytes(bytes))
    }

    fn config_byte(&mut self, offset: u8, index: usize) -> Result<u8> {
        self.ensure_initialized()?;
        let (_, bytes) = self.read_config(offset)?;
        Ok(bytes[index])
    }

    /// CFG0 byte 0 bit 2.
    pub fn set_modulation_mode(&mut self, mode: ModulationMode) -> Result<()> {
        let mask = 1u8 << MODULATION_BIT;
        self.modify_config(CONFIG_PAGE_OFFSET, |b| {
            if mode.is_strong() {
                b[0] |= mask;
            } else {
                b[0] &= !mask;
            }
        })
    }

    /// Read the CFG0 MOD bit.
    pub fn get_modulation_mode(&mut self) -> Result<ModulationMode> {
        let b = self.config_byte(CONFIG_PAGE_OFFSET, 0)?;
        Ok(ModulationMode::from_bit(b & (1 << MODULATION_BIT) != 0))
    }

    /// AUTH0: first page protected by the password.
    pub fn set_protect_start_page(&mut self, page: u8) -> Result<()> {
        self.modify_config(CONFIG_PAGE_OFFSET, |b| b[AUTH0_BYTE] = page)
    }

    /// Read AUTH0.
    pub fn get_protect_start_page(&mut self) -> Result<u8> {
        self.config_byte(CONFIG_PAGE_OFFSET, AUTH0_BYTE)
    }

    /// Set or clear one ACCESS protection bit.
    pub fn set_access(&mut self, access: Access, enable: bool) -> Result<()> {
        let mask = 1u8 << access.bit();
        self.modify_config(ACCESS_PAGE_OFFSET, |b| {
            if enable {
                b[0] |= mask;
            } else {
                b[0] &= !mask;
            }
        })
    }

    /// Read one ACCESS protection bit.
    pub fn get_access(&mut self, access: Access) -> Result<bool> {
        let b = self.config_byte(ACCESS_PAGE_OFFSET, 0)?;
        Ok(b & (1 << access.bit()) != 0)
    }

    /// AUTHLIM: failed attempts before the password locks (0 disables).
    pub fn set_authenticate_limitation(&mut self, limit: u8) -> Result<()> {
        self.ensure_initialized()?;
        if limit > AUTH_LIMIT_MAX {
            return Err(Error::LimitOutOfRange(limit));
        }
        self.modify_config(ACCESS_PAGE_OFFSET, |b| {
            b[0] = (b[0] & !AUTH_LIMIT_MASK) | limit;
        })
    }

    /// Read AUTHLIM.
    pub fn get_authenticate_limitation(&mut self) -> Result<u8> {
        let b = self.config_byte(ACCESS_PAGE_OFFSET, 0)?;
        Ok(b & AUTH_LIMIT_MASK)
    }

    /// Write VCTID (ACCESS byte 1).
    pub fn set_virtual_card_type_identifier(&mut self, identifier: u8) -> Result<()> {
        self.modify_config(ACCESS_PAGE_OFFSET, |b| b[VCTID_BYTE] = identifier)
    }

    /// Read VCTID.
    pub fn get_virtual_card_type_identifier(&mut self) -> Result<u8> {
        self.config_byte(ACCESS_PAGE_OFFSET, VCTID_BYTE)
    }
}
