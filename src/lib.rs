#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod dimension;
pub use dimension::{Dim, SymbolId};

mod error;
pub use error::{Error, Result, ShapeError};

mod routine;

mod shape;
pub use shape::{Shape, TensorShape, TensorShapeView};

/// Size reported when the counted dimensions include a symbolic one.
pub const UNKNOWN_SIZE: i64 = -1;

/// Creates a [`TensorShape`] from a list of extents.
///
/// ```
/// use tensor_shape::{shape, Shape};
///
/// let s = shape![2, -1, 4];
/// assert_eq!(s.ndims(), 3);
/// assert_eq!(s.size(), tensor_shape::UNKNOWN_SIZE);
/// ```
///
/// Extents must convert losslessly into `i64`, so floats are rejected:
///
/// ```compile_fail
/// let s = tensor_shape::shape![2.9, 3];
/// ```
#[macro_export]
macro_rules! shape {
    () => {
        $crate::TensorShape::scalar()
    };
    ($( $dim:expr ),+ $(,)?) => {
        $crate::TensorShape::from([$( <i64 as ::core::convert::From<_>>::from($dim) ),+])
    };
}
