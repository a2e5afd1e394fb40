use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::{TimeError, prelude::*};

/// The local UTC offset a civil time is interpreted in.
///
/// Passed explicitly to every conversion; nothing in this crate reads the process
/// time zone. Serializes as seconds east of UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct LocalOffset(FixedOffset);

impl LocalOffset {
    /// Offset of zero, i.e. civil time is UTC
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// Creates an offset of `seconds` east of UTC.
    ///
    /// # Errors
    /// Returns `TimeError::InvalidOffset` unless `-86_400 < seconds < 86_400`.
    pub fn east(seconds: i32) -> Result<Self, TimeError> {
        FixedOffset::east_opt(seconds)
            .map(Self)
            .ok_or(TimeError::InvalidOffset(seconds))
    }

    /// Returns the wrapped chrono offset
    #[inline]
    pub const fn fixed(self) -> FixedOffset {
        self.0
    }

    /// Returns the number of seconds to add to UTC to get local time
    #[inline]
    pub fn local_minus_utc(self) -> i32 {
        self.0.local_minus_utc()
    }
}

impl Default for LocalOffset {
    fn default() -> Self {
        Self::utc()
    }
}

impl TryFrom<i32> for LocalOffset {
    type Error = TimeError;

    fn try_from(seconds: i32) -> Result<Self, Self::Error> {
        Self::east(seconds)
    }
}

impl From<LocalOffset> for i32 {
    fn from(offset: LocalOffset) -> Self {
        offset.local_minus_utc()
    }
}
