// libultralight/src/card/operations/memory.rs

use crate::constants::{FAST_READ_MAX_PAGES, OTP_PAGE, PAGE_SIZE, SERIAL_PAGE};
use crate::device::Ultralight;
use crate::protocol::{Command, Response};
use crate::types::{Block, PageData, SerialNumber, Signature};
use crate::{Error, Result};

impl Ultralight {
    /// READ starting at `page`; the tag wraps around past the end page.
    pub fn read_four_pages(&mut self, page: u8) -> Result<Block> {
        match self.execute(Command::Read { page })? {
            Response::Block(block) => Ok(block),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }

    /// First page of a READ.
    pub fn read_page(&mut self, page: u8) -> Result<PageData> {
        self.read_four_pages(page)?
            .page(0)
            .ok_or(Error::UnexpectedResponse("read"))
    }

    /// FAST_READ pages `start..=stop` into `buf`, returning the bytes written.
    ///
    /// The range and buffer are checked before anything is sent: `stop`
    /// must not precede `start`, at most 15 pages may be requested and
    /// `buf` must hold 4 bytes per page.
    pub fn fast_read_pages(&mut self, start: u8, stop: u8, buf: &mut [u8]) -> Result<usize> {
        self.ensure_initialized()?;
        if stop < start {
            return Err(Error::InvalidRange { start, stop });
        }
        let pages = (stop - start) as usize + 1;
        if pages > FAST_READ_MAX_PAGES {
            return Err(Error::RangeTooLarge {
                pages,
                max: FAST_READ_MAX_PAGES,
            });
        }
        let needed = pages * PAGE_SIZE;
        if buf.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: buf.len(),
            });
        }

        match self.execute(Command::FastRead { start, stop })? {
            Response::Pages(data) => {
                buf[..data.len()].copy_from_slice(&data);
                Ok(data.len())
            }
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }

    /// `fast_read_pages` into a freshly allocated buffer.
    pub fn fast_read(&mut self, start: u8, stop: u8) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; FAST_READ_MAX_PAGES * PAGE_SIZE];
        let n = self.fast_read_pages(start, stop, &mut buf)?;
        buf.truncate(n);
        Ok(buf)
    }

    /// WRITE one page; the tag must ACK.
    pub fn write_page(&mut self, page: u8, data: PageData) -> Result<()> {
        match self.execute(Command::Write { page, data })? {
            Response::Ack => Ok(()),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }

    /// COMPATIBILITY_WRITE: address frame, then a 16-byte block of which the
    /// tag stores the first 4 bytes. Both frames must be acknowledged.
    pub fn compatibility_write_page(&mut self, page: u8, data: PageData) -> Result<()> {
        match self.execute(Command::CompatibilityWrite { page })? {
            Response::Ack => {}
            other => return Err(Error::UnexpectedResponse(other.name())),
        }
        let block = Block::compatibility(data);
        match self.execute(Command::CompatibilityWriteData { block })? {
            Response::Ack => Ok(()),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }

    /// Page 3.
    pub fn read_otp(&mut self) -> Result<PageData> {
        self.read_page(OTP_PAGE)
    }

    /// OTP bits can only be set, never cleared.
    pub fn write_otp(&mut self, data: PageData) -> Result<()> {
        self.write_page(OTP_PAGE, data)
    }

    /// Seven UID bytes from pages 0 and 1, without BCC0.
    pub fn get_serial_number(&mut self) -> Result<SerialNumber> {
        let block = self.read_four_pages(SERIAL_PAGE)?;
        let mut head = [0u8; 8];
        head.copy_from_slice(&block.as_bytes()[..8]);
        Ok(SerialNumber::from_pages(&head))
    }

    /// READ_SIG: 32-byte ECC originality signature.
    pub fn read_signature(&mut self) -> Result<Signature> {
        match self.execute(Command::ReadSignature)? {
            Response::Signature(sig) => Ok(sig),
            other => Err(Error::UnexpectedResponse(other.name())),
        }
    }
}
