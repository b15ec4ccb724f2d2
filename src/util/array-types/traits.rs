/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Element-type traits.  Membership is a closed list of primitives (see the
// `@{semiring}`, `@{ring}` and `@{field}` groups) so that new impls are never
// a breaking change for downstream code.

pub use self::semiring::Semiring;
mod semiring {
    /// Any primitive number.
    ///
    /// Matrices of these support `+`, `-`, `*`, scalar `/`, and matrix products.
    /// Unsigned subtraction below zero follows the primitive's own overflow
    /// behavior (a panic in debug builds).
    pub trait Semiring : Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::ring::Ring;
mod ring {
    use super::Semiring;

    /// Signed primitives.  Adds unary negation.
    pub trait Ring : Semiring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}

pub use self::field::Field;
mod field {
    use super::Ring;

    /// `f32` and `f64`.
    pub trait Field : Ring + Sealed { }

    pub(super) use self::private::Sealed;
    pub(super) mod private {
        pub trait Sealed { }
    }
}


gen_each!{
    @{field}
    for_each!({$T:ty}) => {
        impl Field for $T { }
        impl field::Sealed for $T { }
    };
}

gen_each!{
    @{ring}
    for_each!({$T:ty}) => {
        impl Ring for $T { }
        impl ring::Sealed for $T { }
    };
}

gen_each!{
    @{semiring}
    for_each!({$T:ty}) => {
        impl Semiring for $T { }
        impl semiring::Sealed for $T { }
    };
}

/// Bounds used by generic impls, so that each shape gets one impl
/// instead of one per element type.
pub(crate) mod internal {
    use std::ops::{Add, Sub, Mul, Div, Neg};

    macro_rules! markers {
        ($( $name:ident[$($bound:tt)+]; )+)
        => {$(
            pub trait $name: $($bound)+ { }
            impl<T> $name for T where T: $($bound)+ { }
        )+};
    }

    markers!{
        SelfAdd[Sized + Add<Self, Output=Self>];
        SelfSub[Sized + Sub<Self, Output=Self>];
        SelfMul[Sized + Mul<Self, Output=Self>];
        SelfDiv[Sized + Div<Self, Output=Self>];
        SelfNeg[Sized + Neg<Output=Self>];
        RefAdd[Sized + for<'a> Add<&'a Self, Output=Self>];
        RefSub[Sized + for<'a> Sub<&'a Self, Output=Self>];
        RefMul[Sized + for<'a> Mul<&'a Self, Output=Self>];
        RefDiv[Sized + for<'a> Div<&'a Self, Output=Self>];
    }

    // NOTE: Subtraction and division are part of the semiring bound so that
    //       unsigned and integer matrices get `-` and `matrix / scalar` too,
    //       with the primitive's own semantics.
    pub trait PrimitiveSemiring
        : 'static + Sized + Copy + Clone
        + PartialEq + PartialOrd
        + SelfAdd + RefAdd
        + SelfSub + RefSub
        + SelfMul + RefMul
        + SelfDiv + RefDiv
        + num_traits::Zero
        + num_traits::One
        + std::iter::Sum
        + std::iter::Product
    { }

    gen_each!{
        @{semiring}
        for_each!({$T:ty})
        => {
            impl PrimitiveSemiring for $T { }
        };
    }

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + SelfNeg
    { }

    gen_each!{
        @{ring}
        for_each!({$T:ty})
        => {
            impl PrimitiveRing for $T { }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sealed_membership() {
        fn field<T: Field>() {}
        fn ring<T: Ring>() {}
        fn semiring<T: Semiring>() {}
        field::<f32>();
        ring::<i8>();
        ring::<f64>();
        semiring::<u64>();
        semiring::<usize>();
    }
}
