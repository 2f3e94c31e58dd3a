use core::{convert::TryFrom, fmt};

use crate::{Error, Result, ShapeError};

/// Identifier of a dimension whose extent is not known yet.
///
/// The identifier is the negative value stored for the axis. Axes holding the
/// same identifier refer to the same symbol.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SymbolId(i64);

impl SymbolId {
    /// Returns `None` unless `raw` is negative.
    pub const fn new(raw: i64) -> Option<Self> {
        if raw < 0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", -(self.0 as i128))
    }
}

/// Extent of a single axis.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Dim {
    Known(u64),
    Symbolic(SymbolId),
}

impl Dim {
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub const fn is_symbolic(&self) -> bool {
        matches!(self, Self::Symbolic(_))
    }

    pub const fn known(self) -> Option<u64> {
        match self {
            Self::Known(extent) => Some(extent),
            Self::Symbolic(_) => None,
        }
    }

    pub const fn from_raw(raw: i64) -> Self {
        if raw < 0 {
            Self::Symbolic(SymbolId(raw))
        } else {
            Self::Known(raw as u64)
        }
    }

    /// Stored representation. Fails for known extents above `i64::MAX`,
    /// which would otherwise read back as symbolic.
    pub fn to_raw(self) -> Result<i64> {
        match self {
            Self::Known(extent) => {
                i64::try_from(extent).map_err(|_| ShapeError::ExtentTooLarge { extent }.into())
            }
            Self::Symbolic(id) => Ok(id.0),
        }
    }
}

impl From<i64> for Dim {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl TryFrom<Dim> for i64 {
    type Error = Error;

    fn try_from(dim: Dim) -> Result<Self> {
        dim.to_raw()
    }
}

impl From<SymbolId> for Dim {
    fn from(id: SymbolId) -> Self {
        Self::Symbolic(id)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(extent) => write!(f, "{}", extent),
            Self::Symbolic(id) => write!(f, "{}", id),
        }
    }
}
