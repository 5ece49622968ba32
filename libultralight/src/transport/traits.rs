// libultralight/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the RF front-end away from protocol/device logic.
pub trait Transport {
    /// Power up and configure the contactless front-end.
    fn open(&mut self) -> Result<()>;

    /// Shut the front-end down.
    fn close(&mut self) -> Result<()>;

    /// Send one frame and return the tag's answer, at most `max_len` bytes.
    /// Short frames (REQA/WUPA) are recognized by the transport from their
    /// single-byte length.
    fn transceive(&mut self, data: &[u8], max_len: usize) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn open(&mut self) -> Result<()> {
        (**self).open()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn transceive(&mut self, data: &[u8], max_len: usize) -> Result<Vec<u8>> {
        (**self).transceive(data, max_len)
    }
}
