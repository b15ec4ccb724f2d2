/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Column-major 3x4 matrices and their siblings.
//!
//! The value types live in `colmat-array-types` and are re-exported here.
//! This crate adds the `colmat-check` driver, which checks the algebraic
//! laws of the operator suite on random inputs.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate clap;

pub use colmat_array_types::*;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod check;
pub mod entry_points;
mod ui;
