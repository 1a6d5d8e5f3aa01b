use core::fmt;
use core::num::NonZeroU32;

use crate::error::{WcError, WcResult};

/// Compact, stable identifier for a word inside one graph.
///
/// Two equal words get distinct ids, which is what makes parallel
/// transitions individually consumable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordId(NonZeroU32);

impl WordId {
    /// Create an id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Create an id from a `usize` position, failing past `u32::MAX - 1`.
    pub fn try_from_usize(index: usize) -> WcResult<Self> {
        let index = u32::try_from(index)
            .ok()
            .filter(|&i| i < u32::MAX)
            .ok_or(WcError::IndexOob {
                what: "word id",
                index,
                len: u32::MAX as usize,
            })?;
        Ok(Self::from_index(index))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a slice position.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordId({})", self.index())
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}
