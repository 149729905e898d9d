// ============================================================================
// Boolean Option
// Population vs. sample selector for the dispersion statistics
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed two-valued option. `True` selects population formulas (divisor n),
/// `False` selects sample formulas (divisor n - 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum BooleanValue {
    #[default]
    False,
    True,
}

impl BooleanValue {
    pub const ALL: [BooleanValue; 2] = [BooleanValue::False, BooleanValue::True];

    #[inline]
    pub const fn to_underlying_value(self) -> bool {
        matches!(self, BooleanValue::True)
    }

    #[inline]
    pub const fn from_underlying_value(value: bool) -> Self {
        if value {
            BooleanValue::True
        } else {
            BooleanValue::False
        }
    }

    /// Whether population (rather than sample) statistics are selected.
    #[inline]
    pub const fn is_population(self) -> bool {
        self.to_underlying_value()
    }
}

impl From<bool> for BooleanValue {
    fn from(value: bool) -> Self {
        Self::from_underlying_value(value)
    }
}

impl From<BooleanValue> for bool {
    fn from(value: BooleanValue) -> Self {
        value.to_underlying_value()
    }
}

impl fmt::Display for BooleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BooleanValue::False => write!(f, "FALSE"),
            BooleanValue::True => write!(f, "TRUE"),
        }
    }
}
