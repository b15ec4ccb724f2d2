/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Casts between `[[X; r]; c]` and `[Vr<X>; c]`.

use std::mem;

use super::{V2, V3, V4};

/// Reinterpret nested arrays as arrays of vectors.
///
/// # Safety
///
/// `Self` and `Self::En` must have identical layout.  This holds for the
/// impls below because `V2`/`V3`/`V4` are `repr(transparent)` over arrays.
pub(crate) unsafe trait Envee: Sized {
    type En;

    #[inline(always)]
    fn envee(self) -> Self::En
    { unsafe { mem::transmute_copy(&mem::ManuallyDrop::new(self)) } }
}

/// Reinterpret arrays of vectors as nested arrays.
///
/// # Safety
///
/// Same as `Envee`.
pub(crate) unsafe trait Unvee: Sized {
    type Un;

    #[inline(always)]
    fn unvee(self) -> Self::Un
    { unsafe { mem::transmute_copy(&mem::ManuallyDrop::new(self)) } }

    #[inline(always)]
    fn unvee_ref(&self) -> &Self::Un
    { unsafe { &*(self as *const Self as *const Self::Un) } }

    #[inline(always)]
    fn unvee_mut(&mut self) -> &mut Self::Un
    { unsafe { &mut *(self as *mut Self as *mut Self::Un) } }
}

gen_each!{
    @{Vn_n}
    @{dim}
    impl_envee_unvee!( {$Vn:ident $r:tt} {$c:tt} ) => {
        unsafe impl<X> Envee for [[X; $r]; $c] { type En = [$Vn<X>; $c]; }
        unsafe impl<X> Unvee for [$Vn<X>; $c] { type Un = [[X; $r]; $c]; }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_share_storage() {
        let mut cols = [V4([1, 2, 3, 4]), V4([5, 6, 7, 8]), V4([9, 10, 11, 12])];
        cols.unvee_mut()[1][0] = 50;
        assert_eq!(cols[1], V4([50, 6, 7, 8]));
        assert_eq!(cols.unvee_ref()[2], [9, 10, 11, 12]);

        let back: [V4<i32>; 3] = cols.unvee().envee();
        assert_eq!(back, cols);
    }

    #[test]
    fn every_width_casts() {
        let wide: [V2<u8>; 4] = [[1, 2], [3, 4], [5, 6], [7, 8]].envee();
        assert_eq!(wide[3], V2([7, 8]));
        let narrow: [V3<f32>; 2] = [[0.5; 3], [1.5; 3]].envee();
        assert_eq!(narrow.unvee(), [[0.5; 3], [1.5; 3]]);
    }
}
