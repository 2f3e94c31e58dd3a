use crate::{Result, ShapeError, UNKNOWN_SIZE};

/// Product of `dims[start..end]`, or [`UNKNOWN_SIZE`] if any of them is symbolic.
///
/// `start <= end <= dims.len()` must hold; callers validate the range.
pub fn size_of_range(dims: &[i64], start: usize, end: usize) -> i64 {
    debug_assert!(start <= end && end <= dims.len());

    let mut size = 1_i64;
    for &dim in &dims[start..end] {
        if dim < 0 {
            return UNKNOWN_SIZE;
        }
        size *= dim;
    }
    size
}

pub fn check_range(start: usize, end: usize, ndims: usize) -> Result<()> {
    if start > end || end > ndims {
        return Err(ShapeError::InvalidRange { start, end, ndims }.into());
    }
    Ok(())
}

pub fn check_axis(axis: usize, ndims: usize) -> Result<()> {
    if axis >= ndims {
        return Err(ShapeError::AxisOutOfRange { axis, ndims }.into());
    }
    Ok(())
}
