// libultralight/src/device/selection.rs

use crate::types::{CascadeLevel, Uid, UidPart};
use crate::{Error, Result};

/// Progress of the two-level ISO14443A selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No cascade level selected since the last REQA/WUPA/HLTA.
    #[default]
    Idle,
    /// Cascade level 1 selected; holds its id bytes.
    Cascade1(UidPart),
    /// Both levels selected.
    Complete(Uid),
}

impl Selection {
    /// Reject cascade level 2 exchanges until level 1 is selected.
    pub fn check_level(&self, level: CascadeLevel) -> Result<()> {
        match (level, self) {
            (CascadeLevel::One, _) => Ok(()),
            (CascadeLevel::Two, Selection::Cascade1(_)) => Ok(()),
            (CascadeLevel::Two, _) => Err(Error::CascadeOutOfOrder),
        }
    }

    /// State after a successful SELECT at `level` with `part`.
    pub fn after_select(self, level: CascadeLevel, part: UidPart) -> Result<Selection> {
        match (level, self) {
            (CascadeLevel::One, _) => Ok(Selection::Cascade1(part)),
            (CascadeLevel::Two, Selection::Cascade1(cl1)) => {
                Ok(Selection::Complete(Uid::from_parts(cl1, part)))
            }
            (CascadeLevel::Two, _) => Err(Error::CascadeOutOfOrder),
        }
    }

    /// Combined id once both levels are selected.
    pub fn uid(&self) -> Option<Uid> {
        match self {
            Selection::Complete(uid) => Some(*uid),
            _ => None,
        }
    }

    /// Both cascade levels selected.
    pub fn is_complete(&self) -> bool {
        matches!(self, Selection::Complete(_))
    }
}
