/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Randomized checks of the algebraic laws of `M34`.
//!
//! Each law is run for a number of trials on fresh random matrices.
//! The first violation is returned as an error describing the inputs.

use crate::FailResult;
use crate::{dot, mat, M23, M24, M33, M34, M43, M44, V3, V4};

use colmat_assert_close::{CheckClose, Tolerances};
use num_traits::Zero;
use rand::{Rng, SeedableRng, XorShiftRng};

/// Relative tolerance for laws that are only exact up to rounding.
const REL_TOL: f64 = 1e-12;

/// Source of random inputs.
pub struct Sampler {
    rng: XorShiftRng,
}

impl Sampler {
    /// A reproducible sampler.
    pub fn from_seed(seed: u64) -> Self {
        // XorShift must not be seeded with all zeros.
        let seed = [seed as u32, (seed >> 32) as u32, 0x193a_6754, 0xa8a7_d469];
        Sampler { rng: XorShiftRng::from_seed(seed) }
    }

    /// A sampler seeded from the OS.
    pub fn from_entropy() -> Self
    { Sampler { rng: rand::weak_rng() } }

    fn float(&mut self) -> f64
    { self.rng.gen_range(-100.0, 100.0) }

    fn int(&mut self) -> i32
    { self.rng.gen_range(-1000, 1001) }

    fn m34_f64(&mut self) -> M34<f64>
    { mat::from_fn(|_, _| self.float()) }

    fn m34_i32(&mut self) -> M34<i32>
    { mat::from_fn(|_, _| self.int()) }

    fn m34_f32(&mut self) -> M34<f32>
    { self.m34_f64().cast() }

    fn m34_u32(&mut self) -> M34<u32>
    { mat::from_fn(|_, _| self.rng.gen_range(0, 1000)) }

    fn nonzero_f64(&mut self) -> f64 {
        let s = self.rng.gen_range(0.5, 50.0);
        if self.rng.gen() { s } else { -s }
    }

    fn nonzero_i32(&mut self) -> i32 {
        let s = self.rng.gen_range(1, 20);
        if self.rng.gen() { s } else { -s }
    }
}

/// A named property, checked once per trial.
pub struct Law {
    pub name: &'static str,
    pub check: fn(&mut Sampler) -> FailResult<()>,
}

pub const LAWS: &[Law] = &[
    Law { name: "M + 0 == M and M * 1 == M", check: scalar_identities },
    Law { name: "M - M == 0", check: self_difference },
    Law { name: "(M * s) / s == M", check: scale_unscale },
    Law { name: "3x3 into 3x4 pads with the identity", check: resize_from_3x3 },
    Law { name: "M * v takes combinations of columns", check: matrix_vector },
    Law { name: "v * M dots with each column", check: vector_matrix },
    Law { name: "products have the outer shape", check: product_shapes },
    Law { name: "increment and decrement touch every element once", check: increments },
    Law { name: "m += m matches m + m", check: self_aliased_assign },
];

/// Run every law, returning the first failure.
pub fn run_all(sampler: &mut Sampler, trials: u32) -> FailResult<()> {
    for law in LAWS {
        info!("checking: {}", law.name);
        for trial in 0..trials {
            trace!("{}: trial {}", law.name, trial);
            (law.check)(sampler).map_err(|e| {
                format_err!("law '{}' failed on trial {}: {}", law.name, trial, e)
            })?;
        }
        info!("ok: {}", law.name);
    }
    info!("all {} laws held over {} trials each", LAWS.len(), trials);
    Ok(())
}

fn check_close_m34(a: &M34<f64>, b: &M34<f64>) -> FailResult<()> {
    let tol = Tolerances { rel: REL_TOL, abs: 0.0 };
    a.as_flat().check_close(b.as_flat(), tol)?;
    Ok(())
}

fn scalar_identities(sampler: &mut Sampler) -> FailResult<()> {
    let m = sampler.m34_f64();
    if m + 0.0 != m || m * 1.0 != m {
        bail!("identity law violated for {:?}", m);
    }

    let m = sampler.m34_f32();
    if m + 0.0 != m || m * 1.0 != m || 1.0f32 * m != m {
        bail!("identity law violated for {:?}", m);
    }

    let m = sampler.m34_i32();
    if m + 0 != m || m * 1 != m || 1 * m != m || 0 + m != m {
        bail!("identity law violated for {:?}", m);
    }

    let m = sampler.m34_u32();
    if m + 0 != m || m * 1 != m || 1u32 * m != m || 0u32 + m != m {
        bail!("identity law violated for {:?}", m);
    }
    Ok(())
}

fn self_difference(sampler: &mut Sampler) -> FailResult<()> {
    let m = sampler.m34_f64();
    if !(m - m).is_zero() {
        bail!("M - M is {:?} for M = {:?}", m - m, m);
    }

    let m = sampler.m34_f32();
    if !(m - m).is_zero() {
        bail!("M - M is {:?} for M = {:?}", m - m, m);
    }

    let m = sampler.m34_i32();
    if (&m - &m) != M34::zero() {
        bail!("M - M is {:?} for M = {:?}", &m - &m, m);
    }

    let m = sampler.m34_u32();
    if !(m - m).is_zero() {
        bail!("M - M is {:?} for M = {:?}", m - m, m);
    }
    Ok(())
}

fn scale_unscale(sampler: &mut Sampler) -> FailResult<()> {
    let m = sampler.m34_f64();
    let s = sampler.nonzero_f64();
    check_close_m34(&((m * s) / s), &m)?;

    let m = sampler.m34_f32();
    let s = sampler.nonzero_f64() as f32;
    let back = (m * s) / s;
    let tol = Tolerances { rel: 1e-5, abs: 0.0 };
    back.as_flat().check_close(m.as_flat(), tol)?;

    let m = sampler.m34_i32();
    let s = sampler.nonzero_i32();
    if (m * s) / s != m {
        bail!("(M * {}) / {} != M for M = {:?}", s, s, m);
    }

    let m = sampler.m34_u32();
    let s = sampler.nonzero_i32().abs() as u32;
    if (m * s) / s != m {
        bail!("(M * {}) / {} != M for M = {:?}", s, s, m);
    }
    Ok(())
}

fn resize_from_3x3(sampler: &mut Sampler) -> FailResult<()> {
    let src: M33<i32> = mat::from_fn(|_, _| sampler.int());
    let out: M34<i32> = M34::resize_from(&src);
    for c in 0..3 {
        for r in 0..3 {
            if out[c][r] != src[c][r] {
                bail!("element ({}, {}) was not copied from {:?}", c, r, src);
            }
        }
        // The fourth row lies off the generalized diagonal for every column.
        if out[c][3] != 0 {
            bail!("element ({}, 3) of {:?} is not zero", c, out);
        }
    }

    if M34::resize_from(&M33::<f64>::eye()) != M34::eye() {
        bail!("the 3x3 identity did not become the 3x4 identity");
    }
    Ok(())
}

fn matrix_vector(sampler: &mut Sampler) -> FailResult<()> {
    let first = V4([sampler.int(), sampler.int(), sampler.int(), sampler.int()]);
    let m = M34::from_cols(first, V4::zero(), V4::zero());
    if m * V3([1, 0, 0]) != first {
        bail!("M * (1, 0, 0) is not the first column of {:?}", m);
    }

    let m = sampler.m34_i32();
    let v = V3([sampler.int(), sampler.int(), sampler.int()]);
    let expected = m[0] * v[0] + m[1] * v[1] + m[2] * v[2];
    if m * v != expected {
        bail!("M * v is {:?} instead of {:?}", m * v, expected);
    }
    Ok(())
}

fn vector_matrix(sampler: &mut Sampler) -> FailResult<()> {
    let m = sampler.m34_i32();
    let v = V4([sampler.int(), sampler.int(), sampler.int(), sampler.int()]);
    let expected = V3([dot(&v, &m[0]), dot(&v, &m[1]), dot(&v, &m[2])]);
    if v * m != expected {
        bail!("v * M is {:?} instead of {:?}", v * m, expected);
    }
    Ok(())
}

fn product_shapes(sampler: &mut Sampler) -> FailResult<()> {
    let a = sampler.m34_i32();

    // out[c][r] = dot(row r of a, column c of b)
    let b: M43<i32> = mat::from_fn(|_, _| sampler.int());
    let ab: M44<i32> = a * b;
    let expected: M44<i32> = mat::from_fn(|c, r| dot(&a.row(r), &b[c]));
    if ab != expected {
        bail!("3x4 * 4x3 disagrees with row-column dot products");
    }

    let b: M33<i32> = mat::from_fn(|_, _| sampler.int());
    let ab: M34<i32> = a * b;
    let expected: M34<i32> = mat::from_fn(|c, r| dot(&a.row(r), &b[c]));
    if ab != expected {
        bail!("3x4 * 3x3 disagrees with row-column dot products");
    }

    let b: M23<i32> = mat::from_fn(|_, _| sampler.int());
    let ab: M24<i32> = &a * &b;
    let expected: M24<i32> = mat::from_fn(|c, r| dot(&a.row(r), &b[c]));
    if ab != expected {
        bail!("3x4 * 2x3 disagrees with row-column dot products");
    }
    Ok(())
}

fn increments(sampler: &mut Sampler) -> FailResult<()> {
    let start = sampler.m34_i32();
    let mut m = start;

    let before = m.post_incr();
    if before != start || m != start + 1 {
        bail!("post_incr returned {:?} and left {:?}, starting from {:?}", before, m, start);
    }

    let after = *m.incr();
    if after != m || m != start + 2 {
        bail!("incr returned {:?} and left {:?}, starting from {:?}", after, m, start);
    }

    let before = m.post_decr();
    if before != start + 2 || *m.decr() != start {
        bail!("decrement did not undo increment, starting from {:?}", start);
    }
    Ok(())
}

fn self_aliased_assign(sampler: &mut Sampler) -> FailResult<()> {
    let m = sampler.m34_f64();
    let mut aliased = m;
    aliased += aliased;
    if aliased != m + m {
        bail!("m += m gave {:?} instead of {:?}", aliased, m + m);
    }

    let m = sampler.m34_i32();
    let mut aliased = m;
    aliased -= aliased;
    if !aliased.is_zero() {
        bail!("m -= m gave {:?}", aliased);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_laws_hold() {
        run_all(&mut Sampler::from_seed(0), 50).unwrap();
        run_all(&mut Sampler::from_entropy(), 10).unwrap();
    }

    #[test]
    fn seeded_samplers_agree() {
        let a = Sampler::from_seed(42).m34_f64();
        let b = Sampler::from_seed(42).m34_f64();
        assert_eq!(a, b);
    }

    #[test]
    fn close_check_reports_mismatch() {
        let m = M34::<f64>::eye();
        assert!(check_close_m34(&m, &m).is_ok());
        assert!(check_close_m34(&m, &(m * 2.0)).is_err());
    }

    #[test]
    fn laws_have_distinct_names() {
        let mut names: Vec<_> = LAWS.iter().map(|law| law.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), LAWS.len());
    }
}
