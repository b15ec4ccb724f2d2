/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Constructors specific to the 3x4 shape (3 columns of height 4).
//!
//! Everything else about `M34` (operators, conversions between shapes,
//! transposition, etc.) is shared with the rest of the family.

use crate::types::*;

use num_traits::AsPrimitive;

impl<X> M3<V4<X>> {
    /// Construct from 12 scalars, one column at a time.
    ///
    /// `x0, y0, z0, w0` is the first column, `x1, ..., w1` the second,
    /// and so on; written out, the arguments read like the transpose
    /// of the matrix.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x0: X, y0: X, z0: X, w0: X,
        x1: X, y1: X, z1: X, w1: X,
        x2: X, y2: X, z2: X, w2: X,
    ) -> Self {
        M3([
            V4([x0, y0, z0, w0]),
            V4([x1, y1, z1, w1]),
            V4([x2, y2, z2, w2]),
        ])
    }

    /// Like `new`, but each argument may be of any primitive type,
    /// converted to `X` with the semantics of `as`.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new_cast<
        X0: AsPrimitive<X>, Y0: AsPrimitive<X>, Z0: AsPrimitive<X>, W0: AsPrimitive<X>,
        X1: AsPrimitive<X>, Y1: AsPrimitive<X>, Z1: AsPrimitive<X>, W1: AsPrimitive<X>,
        X2: AsPrimitive<X>, Y2: AsPrimitive<X>, Z2: AsPrimitive<X>, W2: AsPrimitive<X>,
    >(
        x0: X0, y0: Y0, z0: Z0, w0: W0,
        x1: X1, y1: Y1, z1: Z1, w1: W1,
        x2: X2, y2: Y2, z2: Z2, w2: W2,
    ) -> Self
    where X: Copy + 'static,
    {
        Self::new(
            x0.as_(), y0.as_(), z0.as_(), w0.as_(),
            x1.as_(), y1.as_(), z1.as_(), w1.as_(),
            x2.as_(), y2.as_(), z2.as_(), w2.as_(),
        )
    }

    /// Construct from three columns.
    #[inline(always)]
    pub fn from_cols(c0: V4<X>, c1: V4<X>, c2: V4<X>) -> Self
    { M3([c0, c1, c2]) }

    /// Like `from_cols`, but each column may have a different primitive
    /// element type.
    #[inline]
    pub fn from_cols_cast<A, B, C>(c0: V4<A>, c1: V4<B>, c2: V4<C>) -> Self
    where
        A: AsPrimitive<X>,
        B: AsPrimitive<X>,
        C: AsPrimitive<X>,
        X: Copy + 'static,
    { M3([c0.cast(), c1.cast(), c2.cast()]) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat;
    use crate::traits::Semiring;
    use crate::traits::internal::PrimitiveSemiring;

    use std::fmt;
    use num_traits::{Zero, One};

    fn random_m34() -> M34<f64> {
        mat::from_fn(|_, _| rand::random::<f64>() * 20.0 - 10.0)
    }

    fn random_m34_i32() -> M34<i32> {
        mat::from_fn(|_, _| (rand::random::<u32>() % 201) as i32 - 100)
    }

    #[test]
    fn new_is_column_by_column() {
        let m = M34::new(
            1, 2, 3, 4,
            5, 6, 7, 8,
            9, 10, 11, 12,
        );
        assert_eq!(m[0], V4([1, 2, 3, 4]));
        assert_eq!(m[2], V4([9, 10, 11, 12]));
        assert_eq!(m.row(1), V3([2, 6, 10]));
        assert_eq!(m, M34::from_cols(V4([1, 2, 3, 4]), V4([5, 6, 7, 8]), V4([9, 10, 11, 12])));
    }

    #[test]
    fn heterogeneous_construction() {
        let m: M34<f32> = M34::new_cast(
            1u8, 2i64, 3.5f64, 4.25f32,
            5i16, 6u32, 7usize, 8i8,
            9.0f64, 10u64, 11i32, 12u16,
        );
        assert_eq!(m, M34::new(
            1.0, 2.0, 3.5, 4.25,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
        ));

        // float to int truncates toward zero
        let m: M34<i32> = M34::from_cols_cast(
            V4([1.9f64, -1.9, 0.5, 2.0]),
            V4([1u8, 2, 3, 4]),
            V4([-1i64, -2, -3, -4]),
        );
        assert_eq!(m, M34::new(
            1, -1, 0, 2,
            1, 2, 3, 4,
            -1, -2, -3, -4,
        ));
    }

    #[test]
    fn length_is_column_count() {
        assert_eq!(M34::<f64>::zero().length(), 3);
        assert_eq!(M34::<f64>::zero()[0].len(), 4);
    }

    #[test]
    fn scalar_identity_laws() {
        for _ in 0..20 {
            let m = random_m34();
            assert_eq!(m + 0.0, m);
            assert_eq!(m * 1.0, m);

            let m = random_m34_i32();
            assert_eq!(m + 0, m);
            assert_eq!(m * 1, m);
        }
    }

    // Small non-negative values so that every element type holds them,
    // and scaling by 1 or 2 stays exact and in range.
    fn semiring_laws<X>()
    where X: Semiring + PrimitiveSemiring + AsPrimitive<X> + fmt::Debug,
          i32: AsPrimitive<X>,
    {
        for _ in 0..20 {
            let m: M34<X> = M34::<i32>::from_fn(|_, _| (rand::random::<u32>() % 50) as i32).cast();
            let s: X = (1 + (rand::random::<u32>() % 2) as i32).as_();

            assert_eq!(m + X::zero(), m);
            assert_eq!(m * X::one(), m);
            assert!((m - m).is_zero());
            assert_eq!((m * s) / s, m);

            let mut k = m;
            k.incr();
            k.decr();
            k += s;
            k -= s;
            assert_eq!(k, m);
        }
    }

    #[test]
    fn laws_for_every_element_type() {
        semiring_laws::<f32>();
        semiring_laws::<f64>();
        semiring_laws::<i8>();
        semiring_laws::<i16>();
        semiring_laws::<i32>();
        semiring_laws::<i64>();
        semiring_laws::<isize>();
        semiring_laws::<u8>();
        semiring_laws::<u16>();
        semiring_laws::<u32>();
        semiring_laws::<u64>();
        semiring_laws::<usize>();
    }

    #[test]
    fn difference_with_self_is_zero() {
        for _ in 0..20 {
            let m = random_m34();
            assert!((m - m).is_zero());

            let m = random_m34_i32();
            assert_eq!(m - m, M34::zero());
        }
    }

    #[test]
    fn scale_then_unscale() {
        for _ in 0..20 {
            let m = random_m34();
            let s = rand::random::<f64>() * 10.0 + 0.5;
            let back = (m * s) / s;
            assert_close!(back.as_flat(), m.as_flat());

            let m = random_m34_i32();
            let s = (rand::random::<u32>() % 9) as i32 + 1;
            assert_eq!((m * s) / s, m);
        }
    }

    #[test]
    fn resize_identity_3x3() {
        let m = M34::resize_from(&M33::<f64>::eye());
        assert_eq!(m, M34::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
        ));

        // a non-identity source shows which elements are copied
        let src = M33::from_fn(|c, r| (3 * c + r + 1) as i32);
        let m: M34<i32> = mat::resize(&src);
        assert_eq!(m, M34::new(
            1, 2, 3, 0,
            4, 5, 6, 0,
            7, 8, 9, 0,
        ));
    }

    #[test]
    fn matrix_vector_example() {
        let m = M34::from_cols(V4([1, 2, 3, 4]), V4::zero(), V4::zero());
        assert_eq!(m * V3([1, 0, 0]), V4([1, 2, 3, 4]));
        assert_eq!(&m * &V3([0, 5, 0]), V4::zero());
    }

    #[test]
    fn vector_matrix_product() {
        let m = M34::new(
            1, 2, 3, 4,
            5, 6, 7, 8,
            9, 10, 11, 12,
        );
        // result[c] = dot(v, column c)
        assert_eq!(V4([1, 0, 0, 1]) * m, V3([5, 13, 21]));
        assert_eq!(V4([1, 1, 1, 1]) * &m, V3([10, 26, 42]));
    }

    #[test]
    fn product_shapes() {
        let a = M34::new(
            1, 2, 3, 4,
            5, 6, 7, 8,
            9, 10, 11, 12,
        );

        // 3x4 * 4x3 -> 4x4
        let b: M43<i32> = mat::from_array([
            [1, 0, 0],
            [0, 1, 0],
            [0, 0, 1],
            [1, 1, 1],
        ]);
        let ab: M44<i32> = a * b;
        assert_eq!(ab, mat::from_array([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [15, 18, 21, 24],
        ]));

        // 3x4 * 3x3 -> 3x4
        let b: M33<i32> = mat::from_array([
            [2, 0, 0],
            [0, 0, 1],
            [1, 1, 0],
        ]);
        let ab: M34<i32> = a * b;
        assert_eq!(ab, M34::new(
            2, 4, 6, 8,
            9, 10, 11, 12,
            6, 8, 10, 12,
        ));

        // 3x4 * 2x3 -> 2x4
        let b: M23<i32> = mat::from_array([
            [1, -1, 0],
            [0, 2, 3],
        ]);
        let ab: M24<i32> = &a * &b;
        assert_eq!(ab, mat::from_array([
            [-4, -4, -4, -4],
            [37, 42, 47, 52],
        ]));
    }

    #[test]
    fn product_with_identity() {
        for _ in 0..10 {
            let m = random_m34();
            assert_eq!(m * M33::eye(), m);
            assert_eq!(M44::eye() * m, m);
        }
    }

    #[test]
    fn increment_snapshots() {
        let start = random_m34_i32();

        let mut m = start;
        let old = m.post_incr();
        assert_eq!(old, start);
        assert_eq!(m, start + 1);

        let new = *m.incr();
        assert_eq!(new, m);
        assert_eq!(m, start + 2);
        for c in 0..3 {
            for r in 0..4 {
                assert_eq!(m[c][r], start[c][r] + 2);
            }
        }

        let old = m.post_decr();
        assert_eq!(old, start + 2);
        assert_eq!(*m.decr(), start);
    }

    #[test]
    fn self_aliased_compound_assignment() {
        for _ in 0..10 {
            let m = random_m34();

            let mut aliased = m;
            aliased += aliased;
            let separate = m + m;
            assert_eq!(aliased, separate);

            let mut aliased = m;
            aliased -= aliased;
            assert!(aliased.is_zero());

            let mut aliased = m;
            let copy = aliased;
            aliased += &copy;
            assert_eq!(aliased, separate);
        }
    }

    #[test]
    fn division_by_zero_is_ieee() {
        let m = M34::new(
            1.0, -1.0, 0.0, 2.0,
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
        ) / 0.0f64;
        assert_eq!(m[0][0], std::f64::INFINITY);
        assert_eq!(m[0][1], std::f64::NEG_INFINITY);
        assert!(m[0][2].is_nan());
    }
}
