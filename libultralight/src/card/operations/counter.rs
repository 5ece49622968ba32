// libultralight/src/card/operations/counter.rs

use log::warn;

use crate::constants::{COUNTER_COUNT, COUNTER_MAX};
use crate::device::Ultralight;
use crate::protocol::{Command, Response};
use crate::{Error, Result};

fn check_counter_addr(addr: u8) -> Result<()> {
    if addr >= COUNTER_COUNT {
        return Err(Error::InvalidAddress(addr));
    }
    Ok(())
}

impl Ultralight {
    /// READ_CNT: current value of one-way counter `addr` (0..=2).
    pub fn read_counter(&mut self, addr: u8) -> Result<u32> {
        self.ensure_initialized()?;
        check_counter_addr(addr)?;
        match self.execute(Command::ReadCounter { addr })? {
            Response::Counter(v) => Ok(v),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }

    /// INCR_CNT. Only the low 24 bits of `value` are sent.
    pub fn increment_counter(&mut self, addr: u8, value: u32) -> Result<()> {
        self.ensure_initialized()?;
        check_counter_addr(addr)?;
        if value > COUNTER_MAX {
            warn!(
                "ultralight: counter increment {:#x} truncated to 24 bits",
                value
            );
        }
        match self.execute(Command::IncrementCounter { addr, value })? {
            Response::Ack => Ok(()),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }

    /// CHECK_TEARING_EVENT: 0xBD when the last counter update was complete.
    pub fn check_tearing_event(&mut self, addr: u8) -> Result<u8> {
        self.ensure_initialized()?;
        check_counter_addr(addr)?;
        match self.execute(Command::CheckTearingEvent { addr })? {
            Response::TearingFlag(flag) => Ok(flag),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }

    /// VCSL: returns the virtual card type identifier.
    pub fn vcsl(
        &mut self,
        installation_identifier: &[u8; 16],
        pcd_capabilities: &[u8; 4],
    ) -> Result<u8> {
        let cmd = Command::Vcsl {
            installation_identifier: *installation_identifier,
            pcd_capabilities: *pcd_capabilities,
        };
        match self.execute(cmd)? {
            Response::VirtualCardType(id) => Ok(id),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }
}
