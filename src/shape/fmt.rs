use core::fmt;

use super::{TensorShape, TensorShapeView};
use crate::Dim;

/// Writes `{2,3,4}`. The alternate form (`{:#}`) tags symbolic dimensions, as
/// in `{2,?1,4}`.
fn format_dims(dims: &[i64], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("{")?;
    for (i, &dim) in dims.iter().enumerate() {
        if i != 0 {
            f.write_str(",")?;
        }
        if f.alternate() {
            write!(f, "{}", Dim::from_raw(dim))?;
        } else {
            write!(f, "{}", dim)?;
        }
    }
    f.write_str("}")
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_dims(&self.dims, f)
    }
}

impl fmt::Display for TensorShapeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_dims(self.as_slice(), f)
    }
}
