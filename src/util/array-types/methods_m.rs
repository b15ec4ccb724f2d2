/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size matrix types, compatible with `V2`/`V3`/`V4`
//!
//! This library uses a column-based formalism; matrices are conceptually
//! understood to be containers of column vectors.  `m[c][r]` is the element
//! in column `c` and row `r`, and a matrix with `c` columns of height `r`
//! is written `M![c, V![r, X]]` (e.g. `M34 = M3<V4>`).

use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;
use crate::types::*;
use crate::conv::{Unvee, Envee};
use crate::methods_v::{Never, TryMap};

use num_traits::{Zero, One, AsPrimitive};
use slice_of_array::prelude::*;
use failure::Fail;

/// Construct a matrix from a function of `(column, row)`.
///
/// The shape comes from type inference.  Use `M34::from_fn` and friends
/// to name it explicitly.
#[inline(always)]
pub fn from_fn<M: FromFn<F>, B, F>(f: F) -> M
where F: FnMut(usize, usize) -> B,
{ FromFn::from_fn(f) }

/// Wrap an array of columns.  The shape is taken from the array.
#[inline(always)]
pub fn from_array<A: IntoMatrix>(arr: A) -> A::Matrix
{ arr.into_matrix() }

/// Ones on the generalized diagonal, zeros elsewhere.
#[inline(always)]
pub fn eye<M: Eye>() -> M
{ Eye::eye() }

#[inline(always)]
pub fn zero<M: Zero + IsMatrix>() -> M
{ Zero::zero() }

/// Convert a matrix of one shape into another.
///
/// Elements where both shapes overlap are copied.  Every other element
/// is taken from the identity matrix of the output shape.
///
/// This is also available as `resize_from` on the matrix types.
#[inline(always)]
pub fn resize<M: ResizeFrom<A>, A>(m: &A) -> M
{ ResizeFrom::resize_from(m) }

// Methods that only need the column count.
gen_each!{
    @{Mn_n}
    impl_general_inherent_wrappers!(
        {$Mc:ident $c:tt}
    ) => {
        impl<V> $Mc<V> {
            /// Swap rows and columns.
            #[inline(always)]
            pub fn t(&self) -> TransposeT<Self>
            where Self: Transpose,
            { Transpose::t(self) }

            /// Cast into a plain `[[T; rows]; cols]`.
            #[inline(always)]
            pub fn into_array(self) -> ArrayT<Self>
            where Self: IntoArray,
            { IntoArray::into_array(self) }

            /// Cast into a plain `&[[T; rows]; cols]`.
            #[inline(always)]
            pub fn as_array(&self) -> &ArrayT<Self>
            where Self: IntoArray,
            { IntoArray::as_array(self) }

            /// Cast into a plain `&mut [[T; rows]; cols]`.
            #[inline(always)]
            pub fn as_array_mut(&mut self) -> &mut ArrayT<Self>
            where Self: IntoArray,
            { IntoArray::as_array_mut(self) }

            /// Construct from another matrix shape.  See the free function `mat::resize`.
            #[inline(always)]
            pub fn resize_from<A>(m: &A) -> Self
            where Self: ResizeFrom<A>,
            { ResizeFrom::resize_from(m) }

            /// The number of columns.
            ///
            /// This is the number of valid indices for `m[i]`.
            #[inline(always)]
            pub fn length(&self) -> usize
            { $c }
        }
    }
}

// Methods that also need the element type.
gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_general_inherent_wrappers_with_scalar!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
    ) => {
        impl<X> $Mc<$Vr<X>> {
            #[inline(always)]
            pub fn zero() -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Same as `mat::eye`.  This is also what `Default` produces.
            #[inline(always)]
            pub fn eye() -> Self
            where Self: Eye,
            { Eye::eye() }

            /// Put `s` on the generalized diagonal and zero everywhere else.
            #[inline]
            pub fn from_scalar(s: X) -> Self
            where X: Semiring + PrimitiveSemiring,
            { from_fn(|c, r| if c == r { s } else { X::zero() }) }

            /// Construct a matrix whose contents will be overwritten.
            ///
            /// The elements are zero; the tag only documents intent at the call site.
            #[inline(always)]
            pub fn new_uninitialized(_: Uninitialized) -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Same as `mat::from_fn`.
            #[inline(always)]
            pub fn from_fn<B, F>(f: F) -> Self
            where Self: FromFn<F>, F: FnMut(usize, usize) -> B,
            { FromFn::from_fn(f) }

            /// Get column `c`.  Panics if `c` is out of range.
            #[inline(always)]
            pub fn col(&self, c: usize) -> $Vr<X>
            where X: Copy,
            { self[c] }

            /// Get row `r` as a vector with one element per column.
            /// Panics if `r` is out of range.
            #[inline]
            pub fn row(&self, r: usize) -> V![$c, X]
            where X: Copy,
            { <V![$c, X]>::from_fn(|c| self[c][r]) }

            #[inline]
            pub fn map<B, F>(self, mut f: F) -> $Mc<$Vr<B>>
            where F: FnMut(X) -> B,
            { match self.try_map(|x| Ok::<_, Never>(f(x))) {
                Ok(m) => m,
                Err(never) => match never { },
            }}

            /// Map every scalar, stopping at the first error.
            #[inline]
            pub fn try_map<E, B, F>(self, mut f: F) -> Result<$Mc<$Vr<B>>, E>
            where F: FnMut(X) -> Result<B, E>,
            { TryMap::try_map(self, |col: $Vr<X>| col.try_map(&mut f)) }

            /// Map every scalar, stopping at the first `None`.
            #[inline]
            pub fn opt_map<B, F>(self, mut f: F) -> Option<$Mc<$Vr<B>>>
            where F: FnMut(X) -> Option<B>,
            { self.try_map(|x| f(x).ok_or(())).ok() }

            /// Elementwise `as` conversion.  Float to int truncates and saturates.
            #[inline]
            pub fn cast<Y>(self) -> $Mc<$Vr<Y>>
            where X: AsPrimitive<Y>, Y: Copy + 'static,
            { self.map(|x| x.as_()) }

            /// Add one to every element, then return the matrix.
            #[inline]
            pub fn incr(&mut self) -> &mut Self
            where X: Semiring + PrimitiveSemiring,
            { *self = &*self + X::one(); self }

            /// Subtract one from every element, then return the matrix.
            #[inline]
            pub fn decr(&mut self) -> &mut Self
            where X: Semiring + PrimitiveSemiring,
            { *self = &*self - X::one(); self }

            /// Add one to every element, returning the value from before.
            #[inline]
            pub fn post_incr(&mut self) -> Self
            where X: Semiring + PrimitiveSemiring,
            {
                let old = *self;
                self.incr();
                old
            }

            /// Subtract one from every element, returning the value from before.
            #[inline]
            pub fn post_decr(&mut self) -> Self
            where X: Semiring + PrimitiveSemiring,
            {
                let old = *self;
                self.decr();
                old
            }

            /// View the elements as a flat, column-major slice.
            #[inline(always)]
            pub fn as_flat(&self) -> &[X]
            { self.0.flat() }

            /// View the elements as a flat, column-major mutable slice.
            #[inline(always)]
            pub fn as_flat_mut(&mut self) -> &mut [X]
            { self.0.flat_mut() }

            /// Construct from a flat, column-major slice.
            ///
            /// The slice must have exactly one element per matrix element.
            #[inline]
            pub fn try_from_flat(flat: &[X]) -> Result<Self, FlatLenError>
            where X: Copy,
            {
                if flat.len() != $c * $r {
                    return Err(FlatLenError {
                        cols: $c,
                        rows: $r,
                        expected: $c * $r,
                        actual: flat.len(),
                    });
                }
                Ok(from_fn(|c, r| flat[c * $r + r]))
            }
        }
    }
}

/// Error from `try_from_flat` when the slice has the wrong length.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
#[fail(display = "expected {} elements for a {}x{} matrix, got {}", expected, cols, rows, actual)]
pub struct FlatLenError {
    pub cols: usize,
    pub rows: usize,
    pub expected: usize,
    pub actual: usize,
}

// ---------------------------------------------------------------------------
// Column-wise mapping for `try_map`.  Each column is then mapped with
// the vector impl.
impl<A, B> TryMap<B> for M2<A> {
    type Elem = A;
    type Output = M2<B>;

    #[inline]
    fn try_map<E>(self, mut f: impl FnMut(Self::Elem) -> Result<B, E>) -> Result<Self::Output, E> {
        let M2([a, b]) = self;
        Ok(M2([f(a)?, f(b)?]))
    }
}

impl<A, B> TryMap<B> for M3<A> {
    type Elem = A;
    type Output = M3<B>;

    #[inline]
    fn try_map<E>(self, mut f: impl FnMut(Self::Elem) -> Result<B, E>) -> Result<Self::Output, E> {
        let M3([a, b, c]) = self;
        Ok(M3([f(a)?, f(b)?, f(c)?]))
    }
}

impl<A, B> TryMap<B> for M4<A> {
    type Elem = A;
    type Output = M4<B>;

    #[inline]
    fn try_map<E>(self, mut f: impl FnMut(Self::Elem) -> Result<B, E>) -> Result<Self::Output, E> {
        let M4([a, b, c, d]) = self;
        Ok(M4([f(a)?, f(b)?, f(c)?, f(d)?]))
    }
}

// ---------------------------------------------------------------------------

/// Shape and element types of a matrix.
///
/// `Col` is the type of `m[i]`, `Row` is the type a row would have if it
/// were extracted as a vector, and `Transpose` is the type with the number
/// of rows and columns swapped.
pub trait IsMatrix: Sized {
    type Scalar;
    type Col;
    type Row;
    type Transpose;

    const COLS: usize;
    const ROWS: usize;
}

gen_each!{
    @{dim}
    @{dim}
    impl_is_matrix!(
        {$c:tt}
        {$r:tt}
    ) => {
        impl<X> IsMatrix for M![$c, V![$r, X]] {
            type Scalar = X;
            type Col = V![$r, X];
            type Row = V![$c, X];
            type Transpose = M![$r, V![$c, X]];

            const COLS: usize = $c;
            const ROWS: usize = $r;
        }
    }
}

// ---------------------------------------------------------------------------

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_num_zero!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
    ) => {
        impl<X: Semiring> Zero for $Mc<$Vr<X>>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn zero() -> Self
            { from_array([[X::zero(); $r]; $c]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.0.iter().all(|col| col.iter().all(|x| x.is_zero())) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Backs `mat::eye`.
pub trait Eye: IsMatrix {
    fn eye() -> Self;
}

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_eye!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
    ) => {
        impl<X: Semiring> Eye for $Mc<$Vr<X>>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn eye() -> Self
            { Self::from_scalar(X::one()) }
        }

        // Default is the identity, not zero.
        impl<X: Semiring> Default for $Mc<$Vr<X>>
        where X: PrimitiveSemiring,
        {
            #[inline(always)]
            fn default() -> Self
            { Eye::eye() }
        }
    }
}

gen_each!{
    @{Mnn_Mn_Vn_n}
    impl_one!(
        {$Mnn:ident $Mn:ident $Vn:ident $n:tt}
    ) => {
        impl<X: Semiring> One for $Mnn<X>
        where X: PrimitiveSemiring,
        {
            #[inline(always)]
            fn one() -> Self
            { Eye::eye() }
        }
    }
}

// ---------------------------------------------------------------------------

/// Backs `mat::from_fn`.
pub trait FromFn<F>: Sized {
    fn from_fn(f: F) -> Self;
}

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_from_fn!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
    ) => {
        impl<X, F> FromFn<F> for $Mc<$Vr<X>>
          where F: FnMut(usize, usize) -> X,
        {
            #[inline]
            fn from_fn(mut f: F) -> Self {
                $Mc(<V![$c, _]>::from_fn(|c| {
                    <$Vr<_>>::from_fn(|r| f(c, r))
                }).0)
            }
        }
    }
}

// ---------------------------------------------------------------------------

/// Backs `mat::from_array`.
pub trait IntoMatrix: Sized {
    type Matrix;

    fn into_matrix(self) -> Self::Matrix;
}

pub type ArrayT<M> = <M as IntoArray>::Array;

/// Backs the inherent `into_array`.
pub trait IntoArray: Sized {
    type Array;

    fn into_array(self) -> Self::Array;
    fn as_array(&self) -> &Self::Array;
    fn as_array_mut(&mut self) -> &mut Self::Array;
}

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_into_array!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
    ) => {
        impl<X> IntoMatrix for [[X; $r]; $c] {
            type Matrix = $Mc<$Vr<X>>;

            #[inline(always)]
            fn into_matrix(self) -> Self::Matrix
            { $Mc(self.envee()) }
        }

        impl<X> IntoArray for $Mc<$Vr<X>> {
            type Array = [[X; $r]; $c];

            #[inline(always)]
            fn into_array(self) -> Self::Array
            { self.0.unvee() }

            #[inline(always)]
            fn as_array(&self) -> &Self::Array
            { self.0.unvee_ref() }

            #[inline(always)]
            fn as_array_mut(&mut self) -> &mut Self::Array
            { self.0.unvee_mut() }
        }
    }
}

// ---------------------------------------------------------------------------

/// Output of `transpose`. The matrix with the dimensions flipped.
pub type TransposeT<A> = <A as Transpose>::Output;

/// Backs the inherent `t`.
pub trait Transpose {
    type Output;

    fn t(&self) -> Self::Output;
}

gen_each!{
    @{dim}
    @{dim}
    impl_transpose!(
        {$c:tt}
        {$r:tt}
    ) => {
        impl<X: Copy> Transpose for M![$c, V![$r, X]] {
            type Output = M![$r, V![$c, X]];

            #[inline]
            fn t(&self) -> Self::Output
            { from_fn(|c, r| self[r][c]) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Backs `mat::resize`.
///
/// This is implemented for every ordered pair of shapes (including a shape
/// with itself, where it is a copy), always through `resized_element`.
/// It is deliberately not `From`, so that a change of shape is always
/// spelled out at the call site.
pub trait ResizeFrom<A>: Sized {
    fn resize_from(m: &A) -> Self;
}

gen_each!{
    @{dim}
    @{dim}
    @{dim}
    @{dim}
    impl_resize_from!(
        {$c:tt} {$r:tt}
        {$src_c:tt} {$src_r:tt}
    ) => {
        impl<X: Semiring> ResizeFrom<M![$src_c, V![$src_r, X]]> for M![$c, V![$r, X]]
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn resize_from(m: &M![$src_c, V![$src_r, X]]) -> Self {
                from_fn(|c, r| resized_element((c, r), ($src_c, $src_r), || m[c][r]))
            }
        }
    }
}

// `get` is only called when (c, r) lies inside the source.
#[inline(always)]
fn resized_element<X, F>(
    (c, r): (usize, usize),
    (src_cols, src_rows): (usize, usize),
    get: F,
) -> X
where
    X: PrimitiveSemiring,
    F: FnOnce() -> X,
{
    match (c < src_cols && r < src_rows, c == r) {
        (true, _) => get(),
        (false, true) => X::one(),
        (false, false) => X::zero(),
    }
}

// ---------------------------------------------------------------------------

// `Iterator::sum`

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_sum!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
    ) => {
        impl<X: Semiring> std::iter::Sum for $Mc<$Vr<X>>
        where X: PrimitiveSemiring,
        {
            fn sum<I: Iterator<Item=$Mc<$Vr<X>>>>(iter: I) -> Self {
                iter.fold(Zero::zero(), |a: Self, b| a + b)
            }
        }

        impl<'a, X: Semiring> std::iter::Sum<&'a $Mc<$Vr<X>>> for $Mc<$Vr<X>>
        where X: PrimitiveSemiring,
        {
            fn sum<I: Iterator<Item=&'a $Mc<$Vr<X>>>>(iter: I) -> Self {
                iter.fold(Zero::zero(), |a: Self, b| a + b)
            }
        }
    }
}

// ---------------------------------------------------------------------------
