/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;
use crate::traits::{Semiring, Ring};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing};
use crate::{vee, mat};

use num_traits::AsPrimitive;

use super::types::*;

// ---------------------------------------------------------------------------
// Vector arithmetic.  Columns and rows of matrices use these; the matrix
// impls below do not go through them.
//
// NOTE: Both operands share one element type.  Mixed element types are only
//       accepted by the matrix compound assignments, which convert first.

gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_v_v!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        impl<$($lt_a)* $($lt_b)* X: Semiring> Add<$($ref_b)* $Vn<X>> for $($ref_a)* $Vn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn add(self, rhs: $($ref_b)* $Vn<X>) -> $Vn<X>
            { vee::from_fn(|i| self[i] + rhs[i]) }
        }

        impl<$($lt_a)* $($lt_b)* X: Semiring> Sub<$($ref_b)* $Vn<X>> for $($ref_a)* $Vn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn sub(self, rhs: $($ref_b)* $Vn<X>) -> $Vn<X>
            { vee::from_fn(|i| self[i] - rhs[i]) }
        }
    }
}

gen_each!{
    @{Vn}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_scalar!(
        {$Vn:ident}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)* X: Ring> Neg for $($ref_a)* $Vn<X>
          where X: PrimitiveRing,
        {
            type Output = $Vn<X>;

            #[inline]
            fn neg(self) -> $Vn<X>
            { vee::from_fn(|i| -self[i]) }
        }

        impl<$($lt_a)* X: Semiring> Mul<X> for $($ref_a)* $Vn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn mul(self, s: X) -> $Vn<X>
            { vee::from_fn(|i| self[i] * s) }
        }

        impl<$($lt_a)* X: Semiring> Div<X> for $($ref_a)* $Vn<X>
          where X: PrimitiveSemiring,
        {
            type Output = $Vn<X>;

            #[inline]
            fn div(self, s: X) -> $Vn<X>
            { vee::from_fn(|i| self[i] / s) }
        }
    }
}

// `2 * v`.  A blanket `impl Mul<V3<X>> for X` would break the orphan rules,
// hence one impl per element type.
gen_each!{
    @{Vn}
    @{semiring}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_scalar_v!(
        {$Vn:ident}
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        impl<$($lt_a)*> Mul<$($ref_a)* $Vn<$X>> for $X {
            type Output = $Vn<$X>;

            #[inline(always)]
            fn mul(self, v: $($ref_a)* $Vn<$X>) -> $Vn<$X>
            { v * self }
        }
    }
}

// Any `rhs` that the by-reference operator accepts.
gen_each!{
    @{Vn}
    [
        {AddAssign add_assign Add +}
        {SubAssign sub_assign Sub -}
        {MulAssign mul_assign Mul *}
        {DivAssign div_assign Div /}
    ]
    impl_v_assign!(
        {$Vn:ident}
        {$Assign:ident $assign:ident $Op:ident $op:tt}
    ) => {
        impl<X, B> $Assign<B> for $Vn<X>
          where for<'a> &'a Self: $Op<B, Output=Self>,
        {
            #[inline(always)]
            fn $assign(&mut self, rhs: B)
            { *self = &*self $op rhs; }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix elementwise ops

// Same shape only; there is no broadcasting between matrices.
gen_each!{
    @{Mn_n}
    @{Vn_n}
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_m_add_sub!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring> Add<$($ref_b)* $Mc<$Vr<X>>> for $($ref_a)* $Mc<$Vr<X>>
          where X: PrimitiveSemiring,
        {
            type Output = $Mc<$Vr<X>>;

            #[inline]
            fn add(self, other: $($ref_b)* $Mc<$Vr<X>>) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] + other[c][r]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring> Sub<$($ref_b)* $Mc<$Vr<X>>> for $($ref_a)* $Mc<$Vr<X>>
          where X: PrimitiveSemiring,
        {
            type Output = $Mc<$Vr<X>>;

            #[inline]
            fn sub(self, other: $($ref_b)* $Mc<$Vr<X>>) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] - other[c][r]) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix unary ops

gen_each!{
    @{Mn_n}
    @{Vn_n}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_m_unops!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* X: Ring> Neg for $($ref_a)* $Mc<$Vr<X>>
          where X: PrimitiveRing,
        {
            type Output = $Mc<$Vr<X>>;

            #[inline]
            fn neg(self) -> Self::Output
            { mat::from_fn(|c, r| -self[c][r]) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-scalar ops

// matrix `op` scalar
//
// The scalar is broadcast over every element.  Division follows the scalar
// type's own semantics (IEEE for floats, panic on zero for integers).
gen_each!{
    @{Mn_n}
    @{Vn_n}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_m_scalar_ops!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // matrix + scalar
        impl<$($lt_a)* X: Semiring> Add<X> for $($ref_a)* $Mc<$Vr<X>>
          where X: PrimitiveSemiring,
        {
            type Output = $Mc<$Vr<X>>;

            #[inline]
            fn add(self, scalar: X) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] + scalar) }
        }

        // matrix - scalar
        impl<$($lt_a)* X: Semiring> Sub<X> for $($ref_a)* $Mc<$Vr<X>>
          where X: PrimitiveSemiring,
        {
            type Output = $Mc<$Vr<X>>;

            #[inline]
            fn sub(self, scalar: X) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] - scalar) }
        }

        // matrix * scalar
        impl<$($lt_a)* X: Semiring> Mul<X> for $($ref_a)* $Mc<$Vr<X>>
          where X: PrimitiveSemiring,
        {
            type Output = $Mc<$Vr<X>>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] * scalar) }
        }

        // matrix / scalar
        impl<$($lt_a)* X: Semiring> Div<X> for $($ref_a)* $Mc<$Vr<X>>
          where X: PrimitiveSemiring,
        {
            type Output = $Mc<$Vr<X>>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { mat::from_fn(|c, r| self[c][r] / scalar) }
        }
    }
}

// scalar `op` matrix
gen_each!{
    @{Mn_n}
    @{Vn_n}
    // one impl per element type; see `2 * v` above
    @{semiring}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_scalar_m_ops!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // scalar + matrix
        impl<$($lt_a)*> Add<$($ref_a)* $Mc<$Vr<$X>>> for $X {
            type Output = $Mc<$Vr<$X>>;

            #[inline(always)]
            fn add(self, matrix: $($ref_a)* $Mc<$Vr<$X>>) -> Self::Output
            { matrix + self }
        }

        // scalar * matrix
        impl<$($lt_a)*> Mul<$($ref_a)* $Mc<$Vr<$X>>> for $X {
            type Output = $Mc<$Vr<$X>>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* $Mc<$Vr<$X>>) -> Self::Output
            { matrix * self }
        }

        // scalar / matrix  (divides the scalar by each element)
        impl<$($lt_a)*> Div<$($ref_a)* $Mc<$Vr<$X>>> for $X {
            type Output = $Mc<$Vr<$X>>;

            #[inline]
            fn div(self, matrix: $($ref_a)* $Mc<$Vr<$X>>) -> Self::Output
            { mat::from_fn(|c, r| self / matrix[c][r]) }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix assign ops
//
// Unlike the binary operators, these accept any primitive scalar type `U`
// (or a same-shaped matrix of `U`), converting each value to `X` with the
// semantics of `as` before combining.
//
// There is no `matrix *= matrix`, as the product of two matrices generally
// has neither operand's shape.

gen_each!{
    @{Mn_n}
    @{Vn_n}
    impl_m_assign_ops!(
        {$Mc:ident $c:tt}
        {$Vr:ident $r:tt}
    ) => {
        // matrix += scalar;
        impl<X: Semiring, U: Semiring> AddAssign<U> for $Mc<$Vr<X>>
          where X: PrimitiveSemiring, U: AsPrimitive<X>,
        {
            #[inline]
            fn add_assign(&mut self, rhs: U) {
                let rhs: X = rhs.as_();
                *self = &*self + rhs;
            }
        }

        // matrix += matrix;
        impl<X: Semiring, U: Semiring> AddAssign<$Mc<$Vr<U>>> for $Mc<$Vr<X>>
          where X: PrimitiveSemiring, U: AsPrimitive<X>,
        {
            #[inline]
            fn add_assign(&mut self, rhs: $Mc<$Vr<U>>) {
                let rhs: $Mc<$Vr<X>> = rhs.cast();
                *self = &*self + rhs;
            }
        }

        impl<'b, X: Semiring, U: Semiring> AddAssign<&'b $Mc<$Vr<U>>> for $Mc<$Vr<X>>
          where X: PrimitiveSemiring, U: AsPrimitive<X>,
        {
            #[inline(always)]
            fn add_assign(&mut self, rhs: &'b $Mc<$Vr<U>>)
            { *self += *rhs; }
        }

        // matrix -= scalar;
        impl<X: Semiring, U: Semiring> SubAssign<U> for $Mc<$Vr<X>>
          where X: PrimitiveSemiring, U: AsPrimitive<X>,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: U) {
                let rhs: X = rhs.as_();
                *self = &*self - rhs;
            }
        }

        // matrix -= matrix;
        impl<X: Semiring, U: Semiring> SubAssign<$Mc<$Vr<U>>> for $Mc<$Vr<X>>
          where X: PrimitiveSemiring, U: AsPrimitive<X>,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: $Mc<$Vr<U>>) {
                let rhs: $Mc<$Vr<X>> = rhs.cast();
                *self = &*self - rhs;
            }
        }

        impl<'b, X: Semiring, U: Semiring> SubAssign<&'b $Mc<$Vr<U>>> for $Mc<$Vr<X>>
          where X: PrimitiveSemiring, U: AsPrimitive<X>,
        {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: &'b $Mc<$Vr<U>>)
            { *self -= *rhs; }
        }

        // matrix *= scalar;
        impl<X: Semiring, U: Semiring> MulAssign<U> for $Mc<$Vr<X>>
          where X: PrimitiveSemiring, U: AsPrimitive<X>,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: U) {
                let rhs: X = rhs.as_();
                *self = &*self * rhs;
            }
        }

        // matrix /= scalar;
        impl<X: Semiring, U: Semiring> DivAssign<U> for $Mc<$Vr<X>>
          where X: PrimitiveSemiring, U: AsPrimitive<X>,
        {
            #[inline]
            fn div_assign(&mut self, rhs: U) {
                let rhs: X = rhs.as_();
                *self = &*self / rhs;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-vector products
//
// A matrix with `c` columns of height `r` maps a `c`-vector to an `r`-vector
// when the vector is on the right, and an `r`-vector to a `c`-vector when the
// vector is on the left.

gen_each!{
    [ [(   ) (   )] [('m,) (&'m)] ]
    [ [(   ) (   )] [('v,) (&'v)] ]
    @{dim}
    @{dim}
    impl_mat_vec_mul!(
        [ ($($lt_m:tt)*) ($($ref_m:tt)*) ]
        [ ($($lt_v:tt)*) ($($ref_v:tt)*) ]
        {$c:tt} {$r:tt}
    ) => {
        // matrix * column vector
        impl<$($lt_m)* $($lt_v)* X: Semiring> Mul<$($ref_v)* V![$c, X]> for $($ref_m)* M![$c, V![$r, X]]
          where X: PrimitiveSemiring,
        {
            type Output = V![$r, X];

            #[inline]
            fn mul(self, other: $($ref_v)* V![$c, X]) -> Self::Output {
                let matrix = &self;
                let vector = &other;
                vee::from_fn(|row| (0..$c).map(|k| matrix[k][row] * vector[k]).sum())
            }
        }

        // row vector * matrix
        impl<$($lt_m)* $($lt_v)* X: Semiring> Mul<$($ref_m)* M![$c, V![$r, X]]> for $($ref_v)* V![$r, X]
          where X: PrimitiveSemiring,
        {
            type Output = V![$c, X];

            #[inline]
            fn mul(self, other: $($ref_m)* M![$c, V![$r, X]]) -> Self::Output {
                let vector = &self;
                let matrix = &other;
                vee::from_fn(|col| (0..$r).map(|k| vector[k] * matrix[col][k]).sum())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// matrix-matrix products
//
// `M![p, V![q]] * M![n, V![p]] -> M![n, V![q]]`: the left operand's column
// count must equal the right operand's height.  Any other pairing simply has
// no impl.

gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    @{dim}
    @{dim}
    @{dim}
    impl_mat_mat_mul!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
        {$p:tt} {$q:tt} {$n:tt}
    ) => {
        impl<$($lt_a)* $($lt_b)* X: Semiring> Mul<$($ref_b)* M![$n, V![$p, X]]> for $($ref_a)* M![$p, V![$q, X]]
          where X: PrimitiveSemiring,
        {
            type Output = M![$n, V![$q, X]];

            #[inline]
            fn mul(self, other: $($ref_b)* M![$n, V![$p, X]]) -> Self::Output {
                let a = &self;
                let b = &other;
                mat::from_fn(|c, r| (0..$p).map(|k| a[k][r] * b[c][k]).sum())
            }
        }
    }
}

// ---------------------------------------------------------------------------

// Formatting prints nested brackets of columns, with the flags (precision,
// width, ...) applied to every scalar: `format!("{:.1}", m)`.
gen_each!{
    [
        {V2 X} {V3 X} {V4 X}
        {M2 V} {M3 V} {M4 V}
    ]
    [
        {Display} {LowerExp} {UpperExp}
        {Binary} {Octal} {LowerHex} {UpperHex}
    ]
    impl_fmt!(
        {$Cn:ident $T:ident}
        {$Format:ident}
    ) => {
        impl<$T: fmt::$Format> fmt::$Format for $Cn<$T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for (i, x) in self.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::$Format::fmt(x, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

// ---------------------------------------------------------------------------
