#[macro_use] extern crate colmat_assert_close;

use colmat::{mat, vee, IsMatrix, ResizeFrom, Uninitialized};
use colmat::{M22, M23, M24, M33, M34, M43, M44, V3, V4};
use rand::random;

fn random_m34() -> M34<f64> {
    mat::from_fn(|_, _| random::<f64>() - 0.5)
}

#[test]
fn shape_metadata() {
    assert_eq!(<M34 as IsMatrix>::COLS, 3);
    assert_eq!(<M34 as IsMatrix>::ROWS, 4);

    fn transpose_of<M: IsMatrix>(_: &M) -> Option<M::Transpose> { None }
    let m = M34::<f32>::eye();
    let t: Option<M43<f32>> = transpose_of(&m);
    assert!(t.is_none());
    assert_eq!(m.t().t(), m);
}

#[test]
fn constructors_agree() {
    let by_scalars = M34::new(
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
    );
    let by_cols = M34::from_cols(V4([1.0, 2.0, 3.0, 4.0]), V4([5.0, 6.0, 7.0, 8.0]), V4([9.0, 10.0, 11.0, 12.0]));
    let by_fn: M34 = mat::from_fn(|c, r| (4 * c + r + 1) as f64);
    let by_array = mat::from_array([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
    ]);
    let by_flat = M34::try_from_flat(&(1..=12).map(f64::from).collect::<Vec<_>>()).unwrap();

    assert_eq!(by_scalars, by_cols);
    assert_eq!(by_scalars, by_fn);
    assert_eq!(by_scalars, by_array);
    assert_eq!(by_scalars, by_flat);
    assert_eq!(by_scalars.into_array()[1], [5.0, 6.0, 7.0, 8.0]);
}

#[test]
fn default_and_scalar_fill() {
    assert_eq!(M34::<f64>::default(), M34::from_scalar(1.0));
    assert_eq!(M34::<f64>::default(), mat::eye());
    assert_eq!(M34::new_uninitialized(Uninitialized), M34::<i64>::zero());

    let m = M34::from_scalar(2.5f32);
    assert_eq!(m.row(3), V3([0.0, 0.0, 0.0]));
    assert_eq!(m.col(1), V4([0.0, 2.5, 0.0, 0.0]));
}

#[test]
fn flat_length_error_converts_to_failure() {
    fn build(xs: &[f64]) -> Result<M34, failure::Error> {
        Ok(M34::try_from_flat(xs)?)
    }
    let err = build(&[1.0; 9]).unwrap_err();
    assert_eq!(err.to_string(), "expected 12 elements for a 3x4 matrix, got 9");
}

#[test]
fn every_shape_resizes_into_3x4() {
    fn via<A>(src: A) -> M34<i32>
    where M34<i32>: ResizeFrom<A>,
    { mat::resize(&src) }

    assert_eq!(via(M22::from_scalar(5)), M34::new(
        5, 0, 0, 0,
        0, 5, 0, 0,
        0, 0, 1, 0,
    ));
    assert_eq!(via(M44::from_scalar(5)), M34::from_scalar(5));
    assert_eq!(via(M43::<i32>::zero()), M34::zero());
    assert_eq!(via(M23::<i32>::zero()), M34::new(
        0, 0, 0, 0,
        0, 0, 0, 0,
        0, 0, 1, 0,
    ));
}

#[test]
fn round_trip_through_4x4() {
    // growing then shrinking keeps the original elements
    let m = random_m34();
    let big = M44::resize_from(&m);
    assert_eq!(big[3], V4([0.0, 0.0, 0.0, 1.0]));
    assert_eq!(M34::resize_from(&big), m);
}

#[test]
fn products_against_transpose() {
    // (A B)^T == B^T A^T
    for _ in 0..10 {
        let a = random_m34();
        let b: M43 = mat::from_fn(|_, _| random::<f64>());
        let lhs: M44 = (a * b).t();
        let rhs: M44 = b.t() * a.t();
        assert_close!(lhs.as_flat(), rhs.as_flat());
    }
}

#[test]
fn matrix_vector_agrees_with_row_vector() {
    // M v == v^T M^T
    for _ in 0..10 {
        let m = random_m34();
        let v: V3 = vee::from_fn(|_| random::<f64>());
        let left = m * v;
        let right = v * m.t();
        assert_close!(left.0, right.0);
    }
}

#[test]
fn compound_assignment_with_other_element_types() {
    let mut m = M34::<f64>::zero();
    m += 3u8;
    m *= 2i64;
    m -= 0.5f32;
    m /= 2usize;
    assert_eq!(m, M34::from_fn(|_, _| 2.75));

    let mut m = M34::<i32>::eye();
    m += M34::<f64>::from_scalar(1.9);
    assert_eq!(m, M34::from_scalar(2));
    m -= &M34::<u8>::eye();
    assert_eq!(m, M34::eye());
}

#[test]
fn formatting() {
    let m = M34::from_scalar(1.0);
    assert_eq!(
        format!("{:.1}", m),
        "[[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]]",
    );
    assert_eq!(format!("{:?}", M22::<i32>::eye()), "[[1, 0], [0, 1]]");
}

#[test]
fn sum_of_matrices() {
    let ms = vec![M34::<i32>::eye(), M34::from_scalar(2), M34::zero()];
    assert_eq!(ms.iter().sum::<M34<i32>>(), M34::from_scalar(3));
}

#[test]
fn products_of_identities() {
    let shapes_agree: M24<i32> = M34::eye() * M23::eye();
    assert_eq!(shapes_agree, M24::eye());
    let square: M33<i32> = M43::eye() * M34::eye();
    assert_eq!(square, M33::eye());
}

#[cfg(feature = "serde-support")]
#[test]
fn serde_nested_columns() {
    let m = M34::<i32>::eye();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1,0,0,0],[0,1,0,0],[0,0,1,0]]");
    assert_eq!(serde_json::from_str::<M34<i32>>(&json).unwrap(), m);
}
