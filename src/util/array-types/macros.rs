/* ************************************************************************ **
** This file is part of colmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Expand a macro body once for every combination of token trees
/// drawn from the given groups.
///
/// ```ignore
/// cartesian!{
///     [{i32} {u32}] [{2} {3}]
///     callback!({$T:ty} {$n:expr}) => { impl Trait for [$T; $n] { } }
/// }
/// ```
///
/// The callback is defined locally, so its name only needs to be unique
/// within the invoking module.
macro_rules! cartesian {
    (
        $([$($groups:tt)*])*
        $mac:ident!($($mac_match:tt)*)
        => {$($mac_body:tt)*}$(;)*
    )
    => {
        macro_rules! $mac {
            ($($mac_match)*) => {$($mac_body)*};
        }
        cartesian__!{ @next($([$($groups)*])*) -> ($mac!()) }
    };
}

macro_rules! cartesian__ {
    // every group consumed; emit one call
    (@next() -> ($mac:ident!($($args:tt)*)))
    => {$mac!{$($args)*}};

    // Remaining groups are wrapped into one tt so they can be repeated
    // alongside each alternative of the current group.
    (@next([$($alt:tt)+] $($rest:tt)*) -> $cb:tt)
    => { cartesian__!{ @fork([$($alt)+] [$($rest)*]) -> $cb } };

    (@fork([$($alt:tt)*] $rest:tt) -> $cb:tt)
    => { $( cartesian__!{ @push($alt $rest) -> $cb } )* };

    (@push($alt:tt [$($rest:tt)*]) -> ($mac:ident!($($args:tt)*)))
    => {cartesian__!{ @next($($rest)*) -> ($mac!($($args)*$alt)) }};
}

/// `cartesian!`, plus named groups `@{...}` for the element types and
/// shapes this crate implements things for.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each__!{[$($arg)*] -> []} };
}

macro_rules! gen_each__ {
    // literal group
    ([[$($alt:tt)*] $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [$($alt)*]] }};

    // NOTE: these lists are the authoritative membership of the sealed
    //       element traits.
    ([@{field} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
    ]] }};

    ([@{ring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
    ]] }};

    ([@{semiring} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
        {u8} {u16} {u32} {u64} {usize}
    ]] }};

    // vector types, bare and with their length
    ([@{Vn} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {V2} {V3} {V4}
    ]] }};

    ([@{Vn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {V2 2} {V3 3} {V4 4}
    ]] }};

    // column containers with their column count; any row count
    ([@{Mn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {M2 2} {M3 3} {M4 4}
    ]] }};

    ([@{Mnn_Mn_Vn_n} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {M22 M2 V2 2} {M33 M3 V3 3} {M44 M4 V4 4}
    ]] }};

    // a row or column count, for `V!` and `M!`
    ([@{dim} $($rest:tt)*] -> [$($done:tt)*])
    => { gen_each__!{[$($rest)*] -> [$($done)* [
        {2} {3} {4}
    ]] }};

    ([$mac:ident!$($defn_args:tt)*] -> [$($groups:tt)*])
    => {
        cartesian!{
            $($groups)*
            $mac!$($defn_args)*
        }
    };
}

/// `V!(3, X)` is `V3<X>`.
macro_rules! V {
    (2, $X:ty) => { V2<$X> };
    (3, $X:ty) => { V3<$X> };
    (4, $X:ty) => { V4<$X> };
}

/// `M!(3, V)` is `M3<V>`, a matrix with three columns of type `V`.
macro_rules! M {
    (2, $V:ty) => { M2<$V> };
    (3, $V:ty) => { M3<$V> };
    (4, $V:ty) => { M4<$V> };
}

#[cfg(test)]
mod tests {
    use crate::types::*;

    trait Shape { const SIZE: (usize, usize); }

    gen_each!{
        @{dim} @{dim}
        shape!({$c:tt} {$r:tt})
        => {
            impl Shape for M!($c, V!($r, ())) {
                const SIZE: (usize, usize) = ($c, $r);
            }
        }
    }

    #[test]
    fn every_shape_is_generated() {
        assert_eq!(<M34<()> as Shape>::SIZE, (3, 4));
        assert_eq!(<M43<()> as Shape>::SIZE, (4, 3));
        assert_eq!(<M22<()> as Shape>::SIZE, (2, 2));
    }

    trait Tagged { fn tag() -> &'static str; }

    cartesian!{
        [{u8 "u8"} {f32 "f32"}]
        tagged!({$T:ident $tag:expr})
        => {
            impl Tagged for V2<$T> { fn tag() -> &'static str { $tag } }
        }
    }

    #[test]
    fn literal_groups() {
        assert_eq!(<V2<u8>>::tag(), "u8");
        assert_eq!(<V2<f32>>::tag(), "f32");
    }
}
