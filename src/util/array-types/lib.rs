/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small, fixed-size vector and column-major matrix types.
//!
//! `M34<X>` (three columns of `V4<X>`) is the 3x4 matrix; its eight
//! siblings `M22` through `M44` share every operation, so that products
//! and conversions between shapes are checked by the type system.

#[cfg(test)]
#[macro_use]
extern crate colmat_assert_close;

#[macro_use]
mod macros;
mod traits;

pub use self::traits::{Field, Ring, Semiring};

pub use self::types::*;
mod types;

mod conv;

mod ops;

mod mat34;

// Expose neatly-named modules, but let the .rs files have names that are close alphabetically.
#[doc(hidden)] pub mod methods_v;
#[doc(hidden)] pub mod methods_m;
pub use self::methods_v as vee;
pub use self::methods_m as mat;

pub use self::methods_v::dot;
pub use self::methods_m::{IsMatrix, ResizeFrom, FlatLenError};
