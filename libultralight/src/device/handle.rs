// libultralight/src/device/handle.rs

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::constants::END_PAGE_UNKNOWN;
use crate::device::builder::UltralightBuilder;
use crate::device::selection::Selection;
use crate::protocol::codec;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::{Storage, TagType, Uid};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Session state for one tag, owning its transport and delay.
///
/// Built uninitialized; `init` opens the front-end and every other
/// operation fails with `Error::NotInitialized` until it has succeeded.
///
/// Commands are only reachable through the operations, which keep the
/// session state in step with the tag:
///
/// ```compile_fail
/// use libultralight::{Command, Ultralight};
///
/// fn bypass(tag: &mut Ultralight) {
///     let _ = tag.execute(Command::GetVersion);
/// }
/// ```
pub struct Ultralight {
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) delay: Box<dyn DelayNs>,
    pub(crate) wake_up_delay_ms: u32,
    pub(crate) initialized: bool,
    pub(crate) tag_type: TagType,
    pub(crate) end_page: u8,
    pub(crate) selection: Selection,
}

impl std::fmt::Debug for Ultralight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ultralight")
            .field("initialized", &self.initialized)
            .field("tag_type", &self.tag_type)
            .field("end_page", &self.end_page)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Ultralight {
    pub(crate) fn new(
        transport: Box<dyn Transport>,
        delay: Box<dyn DelayNs>,
        wake_up_delay_ms: u32,
    ) -> Self {
        Self {
            transport,
            delay,
            wake_up_delay_ms,
            initialized: false,
            tag_type: TagType::Invalid,
            end_page: END_PAGE_UNKNOWN,
            selection: Selection::Idle,
        }
    }

    /// Start building a handle.
    pub fn builder() -> UltralightBuilder {
        UltralightBuilder::new()
    }

    /// Open the front-end and reset the session state.
    pub fn init(&mut self) -> Result<()> {
        self.transport.open()?;
        self.tag_type = TagType::Invalid;
        self.end_page = END_PAGE_UNKNOWN;
        self.selection = Selection::Idle;
        self.initialized = true;
        debug!("ultralight: initialized");
        Ok(())
    }

    /// Close the front-end. The handle stays initialized if closing fails.
    pub fn deinit(&mut self) -> Result<()> {
        self.ensure_initialized()?;
        self.transport.close()?;
        self.initialized = false;
        debug!("ultralight: deinitialized");
        Ok(())
    }

    /// Whether `init` succeeded and `deinit` has not.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    /// Send a command and return the raw answer without validating it.
    pub(crate) fn exchange(&mut self, cmd: &Command) -> Result<Vec<u8>> {
        self.ensure_initialized()?;
        let frame = codec::encode_command_frame(cmd);
        let max_len = cmd.response_len();
        trace!("ultralight: tx {}", bytes_to_hex_spaced(&frame));
        let raw = self.transport.transceive(&frame, max_len)?;
        trace!("ultralight: rx {}", bytes_to_hex_spaced(&raw));
        Ok(raw)
    }

    /// Execute a command and return the validated Response. Session state
    /// (tag type, end page, selection) is left to the calling operation.
    pub(crate) fn execute(&mut self, cmd: Command) -> Result<Response> {
        let raw = self.exchange(&cmd)?;
        let response = codec::decode_response_frame(&cmd, &raw)?;
        Ok(response)
    }

    /// Raw pass-through to the transport for frames the driver does not
    /// build itself.
    pub fn transceive(&mut self, data: &[u8], max_len: usize) -> Result<Vec<u8>> {
        self.ensure_initialized()?;
        trace!("ultralight: raw tx {}", bytes_to_hex_spaced(data));
        let raw = self.transport.transceive(data, max_len)?;
        trace!("ultralight: raw rx {}", bytes_to_hex_spaced(&raw));
        Ok(raw)
    }

    /// Set the memory size explicitly instead of inferring it from GET_VERSION.
    pub fn set_storage(&mut self, storage: Storage) -> Result<()> {
        self.ensure_initialized()?;
        self.end_page = storage.end_page();
        debug!("ultralight: end page set to {:#04x}", self.end_page);
        Ok(())
    }

    /// Memory size, `None` while the end page is unknown.
    pub fn get_storage(&self) -> Result<Option<Storage>> {
        self.ensure_initialized()?;
        Ok(Storage::from_end_page(self.end_page))
    }

    /// Last valid page index; `END_PAGE_UNKNOWN` until known.
    pub fn end_page(&self) -> u8 {
        self.end_page
    }

    /// Type seen by the last REQA/WUPA.
    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// Cascade selection progress.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Full id once both cascade levels are selected.
    pub fn selected_uid(&self) -> Option<Uid> {
        self.selection.uid()
    }

    /// Page `offset` pages below the end page.
    pub(crate) fn config_page(&self, offset: u8) -> u8 {
        if self.end_page == END_PAGE_UNKNOWN {
            warn!(
                "ultralight: end page unknown, configuration page offset {} used anyway",
                offset
            );
        }
        self.end_page.wrapping_sub(offset)
    }
}
