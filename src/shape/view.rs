#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::{ops::Index, slice};

use super::{Shape, TensorShape};
use crate::{routine, Result};

/// A shape borrowing its extents from existing storage.
///
/// A view is read-only and cannot outlive the storage it borrows.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TensorShapeView<'a> {
    dims: &'a [i64],
}

impl<'a> TensorShapeView<'a> {
    pub const fn new(dims: &'a [i64]) -> Self {
        Self { dims }
    }

    pub const fn as_slice(&self) -> &'a [i64] {
        self.dims
    }

    /// Borrows axes `start..end` without copying.
    pub fn subview(&self, start: usize, end: usize) -> Result<TensorShapeView<'a>> {
        routine::check_range(start, end, self.dims.len())?;
        Ok(Self::new(&self.dims[start..end]))
    }

    pub fn to_shape(&self) -> TensorShape {
        TensorShape::new(self.dims.to_vec())
    }
}

impl Shape for TensorShapeView<'_> {}

impl AsRef<[i64]> for TensorShapeView<'_> {
    fn as_ref(&self) -> &[i64] {
        self.dims
    }
}

impl Index<usize> for TensorShapeView<'_> {
    type Output = i64;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.dims[axis]
    }
}

impl<'a> From<&'a [i64]> for TensorShapeView<'a> {
    fn from(dims: &'a [i64]) -> Self {
        Self::new(dims)
    }
}

impl<'a> From<&'a Vec<i64>> for TensorShapeView<'a> {
    fn from(dims: &'a Vec<i64>) -> Self {
        Self::new(dims.as_slice())
    }
}

impl<'a> From<&'a TensorShape> for TensorShapeView<'a> {
    fn from(shape: &'a TensorShape) -> Self {
        shape.view()
    }
}

impl<'a> IntoIterator for TensorShapeView<'a> {
    type Item = &'a i64;
    type IntoIter = slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.iter()
    }
}

impl PartialEq<TensorShape> for TensorShapeView<'_> {
    fn eq(&self, other: &TensorShape) -> bool {
        self.dims() == other.dims()
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use alloc::vec;

    use super::TensorShapeView;
    use crate::{Result, Shape, TensorShape, UNKNOWN_SIZE};

    #[test]
    fn view_existing_dims() {
        let dims = vec![2_i64, 3, 4];
        let view = TensorShapeView::from(&dims);

        assert_eq!(view.as_slice().as_ptr(), dims.as_ptr());
        assert_eq!(view.ndims(), 3);
        assert_eq!(view.size(), 24);
        assert_eq!(view[1], 3);
        assert!(!view.is_scalar());
    }

    #[test]
    fn view_shares_shape_storage() {
        let shape = crate::shape![2, -1, 4];
        let view = shape.view();

        assert_eq!(view.dims().as_ptr(), shape.dims().as_ptr());
        assert_eq!(view, shape);
        assert_eq!(shape, view);
        assert_eq!(view.size(), UNKNOWN_SIZE);
    }

    #[test]
    fn subview_without_copy() -> Result<()> {
        let dims = [5_i64, 6, 7, 8];
        let view = TensorShapeView::new(&dims);
        let sub = view.subview(1, 3)?;

        assert_eq!(sub.as_slice(), &[6, 7]);
        assert_eq!(sub.as_slice().as_ptr(), dims[1..].as_ptr());
        assert!(view.subview(2, 5).is_err());

        Ok(())
    }

    #[test]
    fn convert_view_to_owned_shape() -> Result<()> {
        let dims = [5_i64, 6, 7, 8];
        let view = TensorShapeView::new(&dims);

        assert_eq!(view.to_shape(), crate::shape![5, 6, 7, 8]);
        assert_eq!(TensorShape::from(view), crate::shape![5, 6, 7, 8]);
        assert_eq!(view.slice_from(2)?, crate::shape![7, 8]);
        assert_eq!(view.size_to_dimension(2)?, 30);

        Ok(())
    }
}
