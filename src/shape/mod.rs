mod fmt;
mod view;
pub use view::TensorShapeView;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::{
    fmt::Debug,
    iter::FromIterator,
    ops::{Index, IndexMut},
    slice,
};

use num_traits::AsPrimitive;

use crate::{routine, Dim, Result, ShapeError};

/// Read-only operations shared by owned and borrowed shapes.
///
/// Axis 0 is the outermost one. Negative extents denote symbolic dimensions.
pub trait Shape: AsRef<[i64]> + Debug {
    fn dims(&self) -> &[i64] {
        self.as_ref()
    }

    fn ndims(&self) -> usize {
        self.dims().len()
    }

    fn iter(&self) -> slice::Iter<'_, i64> {
        self.dims().iter()
    }

    fn dim(&self, axis: usize) -> Result<i64> {
        routine::check_axis(axis, self.ndims())?;
        Ok(self.dims()[axis])
    }

    fn tagged_dim(&self, axis: usize) -> Result<Dim> {
        self.dim(axis).map(Dim::from_raw)
    }

    fn tagged_dims(&self) -> impl Iterator<Item = Dim> + '_ {
        self.dims().iter().copied().map(Dim::from_raw)
    }

    fn has_symbolic_dims(&self) -> bool {
        self.dims().iter().any(|&dim| dim < 0)
    }

    /// Copies the leading `min(dims.len(), self.ndims())` extents into `dims`
    /// and returns how many were written.
    fn copy_dims<T>(&self, dims: &mut [T]) -> usize
    where
        T: Copy + 'static,
        i64: AsPrimitive<T>,
    {
        let len = dims.len().min(self.ndims());
        for (dst, &src) in dims[..len].iter_mut().zip(self.dims()) {
            *dst = src.as_();
        }
        len
    }

    /// Product of the extents of axes `start..end`, or
    /// [`UNKNOWN_SIZE`](crate::UNKNOWN_SIZE) if one of them is symbolic.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > self.ndims()`.
    fn size_helper(&self, start: usize, end: usize) -> i64 {
        routine::size_of_range(self.dims(), start, end)
    }

    /// Total number of elements. Returns 1 for a shape with no dimensions and
    /// [`UNKNOWN_SIZE`](crate::UNKNOWN_SIZE) if any dimension is symbolic.
    ///
    /// The product is not checked for overflow: debug builds panic and release
    /// builds wrap once it exceeds `i64::MAX`.
    fn size(&self) -> i64 {
        self.size_helper(0, self.ndims())
    }

    fn known_size(&self) -> Option<u64> {
        u64::try_from(self.size()).ok()
    }

    /// Number of elements spanned by axes `0..dimension`. Returns 1 when
    /// `dimension` is 0.
    fn size_to_dimension(&self, dimension: usize) -> Result<i64> {
        routine::check_range(0, dimension, self.ndims())?;
        Ok(self.size_helper(0, dimension))
    }

    /// Number of elements spanned by axes `dimension..ndims`. Returns 1 when
    /// `dimension` equals the number of dimensions.
    fn size_from_dimension(&self, dimension: usize) -> Result<i64> {
        let ndims = self.ndims();
        routine::check_range(dimension, ndims, ndims)?;
        Ok(self.size_helper(dimension, ndims))
    }

    fn slice(&self, start: usize, end: usize) -> Result<TensorShape> {
        TensorShape::from_range(self.dims(), start, end)
    }

    fn slice_from(&self, start: usize) -> Result<TensorShape> {
        self.slice(start, self.ndims())
    }

    /// A shape without dimensions or with the single dimension `1`.
    fn is_scalar(&self) -> bool {
        matches!(self.dims(), [] | [1])
    }
}

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct TensorShape {
    dims: Vec<i64>,
}

impl TensorShape {
    pub fn new(dims: Vec<i64>) -> Self {
        Self { dims }
    }

    pub fn scalar() -> Self {
        Self::default()
    }

    /// Takes the first `dimension_count` values of `dims`, converting them with
    /// `as` semantics.
    pub fn from_dims<T>(dims: &[T], dimension_count: usize) -> Result<Self>
    where
        T: AsPrimitive<i64>,
    {
        if dimension_count > dims.len() {
            return Err(ShapeError::InsufficientDims {
                count: dimension_count,
                len: dims.len(),
            }
            .into());
        }

        let mut shape = Vec::with_capacity(dimension_count);
        shape.extend(dims[..dimension_count].iter().map(|&dim| dim.as_()));
        Ok(Self { dims: shape })
    }

    pub fn from_range(dims: &[i64], start: usize, end: usize) -> Result<Self> {
        routine::check_range(start, end, dims.len())?;
        Ok(Self {
            dims: dims[start..end].to_vec(),
        })
    }

    pub fn from_tagged<I>(dims: I) -> Result<Self>
    where
        I: IntoIterator<Item = Dim>,
    {
        Ok(Self {
            dims: dims
                .into_iter()
                .map(Dim::to_raw)
                .collect::<Result<Vec<_>>>()?,
        })
    }

    pub fn dim_mut(&mut self, axis: usize) -> Result<&mut i64> {
        routine::check_axis(axis, self.dims.len())?;
        Ok(&mut self.dims[axis])
    }

    pub fn set_dim<D>(&mut self, axis: usize, dim: D) -> Result<()>
    where
        D: Into<i64>,
    {
        *self.dim_mut(axis)? = dim.into();
        Ok(())
    }

    pub fn set_tagged_dim(&mut self, axis: usize, dim: Dim) -> Result<()> {
        let raw = dim.to_raw()?;
        *self.dim_mut(axis)? = raw;
        Ok(())
    }

    pub fn view(&self) -> TensorShapeView<'_> {
        TensorShapeView::new(&self.dims)
    }

    pub fn into_dims(self) -> Vec<i64> {
        self.dims
    }
}

impl Shape for TensorShape {}

impl AsRef<[i64]> for TensorShape {
    fn as_ref(&self) -> &[i64] {
        &self.dims
    }
}

impl Index<usize> for TensorShape {
    type Output = i64;

    fn index(&self, axis: usize) -> &Self::Output {
        &self.dims[axis]
    }
}

impl IndexMut<usize> for TensorShape {
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        &mut self.dims[axis]
    }
}

impl From<Vec<i64>> for TensorShape {
    fn from(dims: Vec<i64>) -> Self {
        Self::new(dims)
    }
}

impl<T> From<&[T]> for TensorShape
where
    T: AsPrimitive<i64>,
{
    fn from(dims: &[T]) -> Self {
        dims.iter().copied().collect()
    }
}

impl<T> From<&Vec<T>> for TensorShape
where
    T: AsPrimitive<i64>,
{
    fn from(dims: &Vec<T>) -> Self {
        Self::from(dims.as_slice())
    }
}

impl<T, const N: usize> From<[T; N]> for TensorShape
where
    T: AsPrimitive<i64>,
{
    fn from(dims: [T; N]) -> Self {
        dims.into_iter().collect()
    }
}

impl From<TensorShapeView<'_>> for TensorShape {
    fn from(view: TensorShapeView<'_>) -> Self {
        view.to_shape()
    }
}

impl From<TensorShape> for Vec<i64> {
    fn from(shape: TensorShape) -> Self {
        shape.dims
    }
}

impl<T> FromIterator<T> for TensorShape
where
    T: AsPrimitive<i64>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            dims: iter.into_iter().map(|dim| dim.as_()).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TensorShape {
    type Item = &'a i64;
    type IntoIter = slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.dims.iter()
    }
}

impl PartialEq<TensorShapeView<'_>> for TensorShape {
    fn eq(&self, other: &TensorShapeView<'_>) -> bool {
        self.dims() == other.dims()
    }
}
