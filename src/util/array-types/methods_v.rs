/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;

use super::types::*;

use num_traits::{Zero, AsPrimitive};

// Vector operations needed by the matrix types: construction, mapping,
// casting, and the inner product used by matrix products.

/// Build a vector of inferred size from a function of the index.
#[inline]
pub fn from_fn<V: TryFromFn<Elem=B>, B, F>(mut f: F) -> V
where F: FnMut(usize) -> B,
{ match V::try_from_fn(|n| Ok::<_, Never>(f(n))) {
    Ok(v) => v,
    Err(never) => match never { },
}}

/// The zero vector of inferred size.
#[inline(always)]
pub fn zero<V: Zero + IsV>() -> V
{ Zero::zero() }

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:expr}
    ) => {
        impl<X> $Vn<X> {
            /// Same as `vee::zero`, with the size fixed by `Self`.
            #[inline(always)]
            pub fn zero() -> Self
            where Self: Zero,
            { Zero::zero() }

            /// Same as `vee::from_fn`, with the size fixed by `Self`.
            #[inline(always)]
            pub fn from_fn<F>(f: F) -> Self
            where F: FnMut(usize) -> X,
            { from_fn(f) }

            #[inline(always)]
            pub fn try_from_fn<E, F>(f: F) -> Result<Self, E>
            where F: FnMut(usize) -> Result<X, E>,
            { TryFromFn::try_from_fn(f) }

            #[inline(always)]
            pub fn dot(&self, other: &Self) -> ScalarT<Self>
            where Self: Dot,
            { Dot::dot(self, other) }

            #[inline]
            pub fn map<B, F>(self, mut f: F) -> $Vn<B>
            where F: FnMut(X) -> B,
            { match self.try_map(|x| Ok::<_, Never>(f(x))) {
                Ok(v) => v,
                Err(never) => match never { },
            }}

            /// Map each element, stopping at the first error.
            #[inline(always)]
            pub fn try_map<E, B, F>(self, f: F) -> Result<$Vn<B>, E>
            where F: FnMut(X) -> Result<B, E>,
            { TryMap::try_map(self, f) }

            /// Map each element, stopping at the first `None`.
            #[inline]
            pub fn opt_map<B, F>(self, mut f: F) -> Option<$Vn<B>>
            where F: FnMut(X) -> Option<B>,
            { self.try_map(|x| f(x).ok_or(())).ok() }

            /// Elementwise `as` conversion.
            #[inline]
            pub fn cast<Y>(self) -> $Vn<Y>
            where X: AsPrimitive<Y>, Y: Copy + 'static,
            { self.map(|x| x.as_()) }
        }
    }
}

/// Inner product, as a free function.
#[inline(always)]
pub fn dot<V>(a: &V, b: &V) -> ScalarT<V>
where V: Dot,
{ Dot::dot(a, b) }

pub type ScalarT<V> = <V as IsV>::Scalar;

/// Element type and length of `V2`, `V3` and `V4`.
pub trait IsV {
    type Scalar;
    const LEN: usize;
}

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X> IsV for $Vn<X> {
            type Scalar = X;
            const LEN: usize = $n;
        }
    }
}

// ---------------------------------------------------------------------------

/// Error type of closures that cannot fail.
pub(crate) enum Never { }

gen_each!{
    @{Vn_n}
    for_each!(
        {$Vn:ident $n:tt}
    ) => {
        impl<X: Semiring> Zero for $Vn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn zero() -> Self
            { $Vn([X::zero(); $n]) }

            #[inline]
            fn is_zero(&self) -> bool
            { self.iter().all(Zero::is_zero) }
        }
    }
}

// ---------------------------------------------------------------------------

/// Backs `vee::from_fn` for each vector size.
pub trait TryFromFn: Sized {
    type Elem;

    fn try_from_fn<E>(f: impl FnMut(usize) -> Result<Self::Elem, E>) -> Result<Self, E>;
}

impl<A> TryFromFn for V2<A> {
    type Elem = A;

    #[inline]
    fn try_from_fn<E>(mut f: impl FnMut(usize) -> Result<Self::Elem, E>) -> Result<Self, E> {
        Ok(V2([f(0)?, f(1)?]))
    }
}

impl<A> TryFromFn for V3<A> {
    type Elem = A;

    #[inline]
    fn try_from_fn<E>(mut f: impl FnMut(usize) -> Result<Self::Elem, E>) -> Result<Self, E> {
        Ok(V3([f(0)?, f(1)?, f(2)?]))
    }
}

impl<A> TryFromFn for V4<A> {
    type Elem = A;

    #[inline]
    fn try_from_fn<E>(mut f: impl FnMut(usize) -> Result<Self::Elem, E>) -> Result<Self, E> {
        Ok(V4([f(0)?, f(1)?, f(2)?, f(3)?]))
    }
}

// ---------------------------------------------------------------------------

/// Backs the inherent `try_map` of vectors and matrices.
pub(crate) trait TryMap<B>: Sized {
    type Elem;
    type Output;

    fn try_map<E>(self, f: impl FnMut(Self::Elem) -> Result<B, E>) -> Result<Self::Output, E>;
}

impl<A, B> TryMap<B> for V2<A> {
    type Elem = A;
    type Output = V2<B>;

    #[inline]
    fn try_map<E>(self, mut f: impl FnMut(Self::Elem) -> Result<B, E>) -> Result<Self::Output, E> {
        let V2([a, b]) = self;
        Ok(V2([f(a)?, f(b)?]))
    }
}

impl<A, B> TryMap<B> for V3<A> {
    type Elem = A;
    type Output = V3<B>;

    #[inline]
    fn try_map<E>(self, mut f: impl FnMut(Self::Elem) -> Result<B, E>) -> Result<Self::Output, E> {
        let V3([a, b, c]) = self;
        Ok(V3([f(a)?, f(b)?, f(c)?]))
    }
}

impl<A, B> TryMap<B> for V4<A> {
    type Elem = A;
    type Output = V4<B>;

    #[inline]
    fn try_map<E>(self, mut f: impl FnMut(Self::Elem) -> Result<B, E>) -> Result<Self::Output, E> {
        let V4([a, b, c, d]) = self;
        Ok(V4([f(a)?, f(b)?, f(c)?, f(d)?]))
    }
}

// ---------------------------------------------------------------------------

/// Backs `dot` for each vector size.
pub trait Dot: IsV {
    fn dot(&self, b: &Self) -> ScalarT<Self>;
}

gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        impl<X: Semiring> Dot for $Vn<X>
          where X: PrimitiveSemiring,
        {
            #[inline]
            fn dot(&self, other: &$Vn<X>) -> ScalarT<Self>
            { (1..$n).fold(self[0] * other[0], |s, i| s + self[i] * other[i]) }
        }
    }
}

// ---------------------------------------------------------------------------

// stdlib integration

gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        impl<X: Semiring> std::iter::Sum for $Vn<X>
        where X: PrimitiveSemiring,
        {
            fn sum<I: Iterator<Item=$Vn<X>>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + b)
            }
        }

        impl<'a, X: Semiring> std::iter::Sum<&'a $Vn<X>> for $Vn<X>
        where X: PrimitiveSemiring,
        {
            fn sum<I: Iterator<Item=&'a $Vn<X>>>(iter: I) -> Self {
                iter.fold($Vn::zero(), |a, b| a + b)
            }
        }
    }
}

// Lets `as_flat` view a matrix as a slice of its scalars.

gen_each!{
    @{Vn_n}
    for_each!( {$Vn:ident $n:tt} ) => {
        unsafe impl<X> slice_of_array::IsSliceomorphic for $Vn<X> {
            type Element = X;
            const LEN: usize = $n;
        }
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_products() {
        assert_eq!(dot(&V3([1, 2, 3]), &V3([4, -5, 6])), 12);
        assert_eq!(V4([0.5, 0.5, 0.5, 0.5]).dot(&V4([2.0; 4])), 4.0);
        assert_close!(V2([0.1, 0.2]).dot(&V2([0.3, 0.4])), 0.11);
    }

    #[test]
    fn cast_narrows_like_as() {
        let v = V3([1.9f64, -2.5, 300.0]);
        assert_eq!(v.cast::<i32>(), V3([1, -2, 300]));
        assert_eq!(v.cast::<u8>(), V3([1, 0, 255]));
        assert_eq!(V2([3i64, 4]).cast::<f32>(), V2([3.0f32, 4.0]));
    }

    #[test]
    fn opt_map_short_circuits() {
        let v = V3([1, 0, 2]);
        assert_eq!(v.opt_map(|x| 6i32.checked_div(x)), None);
        assert_eq!(V2([1, 2]).opt_map(|x| 6i32.checked_div(x)), Some(V2([6, 3])));
    }

    #[test]
    fn sum() {
        let vs = vec![V2([1, 2]), V2([3, 4]), V2([5, 6])];
        assert_eq!(vs.iter().sum::<V2<i32>>(), V2([9, 12]));
    }
}
