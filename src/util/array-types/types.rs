/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

// ---------------------------------------------------------------------------

/// A column (or row) of 2 scalars.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct V2<X=f64>(pub [X; 2]);

/// A column (or row) of 3 scalars.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct V3<X=f64>(pub [X; 3]);

/// A column (or row) of 4 scalars.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct V4<X=f64>(pub [X; 4]);

// ---------------------------------------------------------------------------

// NOTE: Matrices are containers of *column* vectors.  `M3<V4<X>>` has three
//       columns, each holding four rows, so `m[c][r]` is the element in
//       column `c` and row `r`.
//
//       `Default` is deliberately not derived; see `methods_m`.

/// 2 columns of type `V`. The height is the length of `V`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct M2<V>(pub [V; 2]);

/// 3 columns of type `V`. The height is the length of `V`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct M3<V>(pub [V; 3]);

/// 4 columns of type `V`. The height is the length of `V`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct M4<V>(pub [V; 4]);

/// A square dense 2x2 matrix.
pub type M22<X=f64> = M2<V2<X>>;
/// A dense matrix with 2 columns and 3 rows.
pub type M23<X=f64> = M2<V3<X>>;
/// A dense matrix with 2 columns and 4 rows.
pub type M24<X=f64> = M2<V4<X>>;
/// A dense matrix with 3 columns and 2 rows.
pub type M32<X=f64> = M3<V2<X>>;
/// A square dense 3x3 matrix.
pub type M33<X=f64> = M3<V3<X>>;
/// A dense matrix with 3 columns and 4 rows.
///
/// This is the transpose type of `M43`.
pub type M34<X=f64> = M3<V4<X>>;
/// A dense matrix with 4 columns and 2 rows.
pub type M42<X=f64> = M4<V2<X>>;
/// A dense matrix with 4 columns and 3 rows.
pub type M43<X=f64> = M4<V3<X>>;
/// A square dense 4x4 matrix.
pub type M44<X=f64> = M4<V4<X>>;

// ---------------------------------------------------------------------------

/// Tag for constructors that are allowed to skip initialization.
///
/// The storage is still zero-filled; the tag only marks call sites that
/// promise to overwrite every element before reading any of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Uninitialized;

// ---------------------------------------------------------------------------
// Array-like access for vectors and matrices alike.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

gen_each!{
    [
        {V2 X 2} {V3 X 3} {V4 X 4}
        {M2 V 2} {M3 V 3} {M4 V 4}
    ]
    for_each!(
        {$Cn:ident $T:ident $n:tt}
    ) => {
        // Indexing goes through the array, so `m[i]` for `i >= $n` panics.
        impl<$T> Deref for $Cn<$T> {
            type Target = [$T; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl<$T> DerefMut for $Cn<$T> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        // `for col in &m` and friends; Deref alone does not provide IntoIterator.
        impl<'a, $T> IntoIterator for &'a $Cn<$T> {
            type Item = &'a $T;
            type IntoIter = Iter<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a, $T> IntoIterator for &'a mut $Cn<$T> {
            type Item = &'a mut $T;
            type IntoIter = IterMut<'a, $T>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // forward the debug impl without a surrounding "V3(...)", so that
        // the debug output of a matrix is just its nested array of columns
        impl<$T: fmt::Debug> fmt::Debug for $Cn<$T> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    }
}

// ---------------------------------------------------------------------------
