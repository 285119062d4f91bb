//! Structural shapes of raw function and method pointers.
//!
//! The three traits here form a closed table keyed by pointer signature. They
//! are sealed: the set of shapes is fixed, and no registration can add to it.
//!
//! Rust has no separate method-pointer type, so a method is recognised by the
//! shape of its receiver: `fn(&mut O, ..)` is a [`MutMethod`] and `fn(&O, ..)`
//! a [`ConstMethod`]. A method item such as `Counter::bump` becomes one of these
//! with an `as` cast.
//!
//! Coverage of the table:
//!
//! - every argument list of up to [`MAX_ARITY`] by-value arguments;
//! - up to [`MAX_BORROWING_ARITY`] arguments, each of which may be `A`, `&A`
//!   or `&mut A`;
//! - methods returning a borrow of their receiver (`fn(&O, ..) -> &R`,
//!   `fn(&mut O, ..) -> &R` and `fn(&mut O, ..) -> &mut R`) with by-value
//!   arguments after the receiver, up to [`MAX_ARITY`]. Their `Output` is the
//!   reference at `'static`, so `R` must be `'static`; invoking the wrapper
//!   yields the reference at the receiver's lifetime.
//!
//! Outside the table: free functions returning a borrow of an argument, and
//! pointers mixing a borrowed return with borrowed arguments. Those resolve as
//! unresolved callables.
//!
//! [`MAX_ARITY`]: crate::config::MAX_ARITY
//! [`MAX_BORROWING_ARITY`]: crate::config::MAX_BORROWING_ARITY

// Rows differing only in where a lifetime is bound are distinct types.
#![allow(coherence_leak_check)]

mod sealed {
    pub trait FreeFn {}
    pub trait MutMethod {}
    pub trait ConstMethod {}
}

/// `fn(A1, .., An) -> R`
pub trait FreeFn: sealed::FreeFn + Copy {
    type Output;
    const ARITY: usize;
}

/// `fn(&mut O, A1, .., An) -> R`
pub trait MutMethod: sealed::MutMethod + Copy {
    type Object: ?Sized;
    type Output;
    /// Argument count, not counting the receiver.
    const ARITY: usize;
}

/// `fn(&O, A1, .., An) -> R`
pub trait ConstMethod: sealed::ConstMethod + Copy {
    type Object: ?Sized;
    type Output;
    /// Argument count, not counting the receiver.
    const ARITY: usize;
}

/// Invokes `$row!` once per argument list of the table.
///
/// Each argument arrives as `{ name: [parameter] [tuple element] [generic] }`,
/// where the tuple element borrows for `'a`.
macro_rules! signature_rows {
    ($row:ident) => {
        $crate::shape::signature_rows!(@expand $row []);
        $crate::shape::signature_rows!(@expand $row [] a1: A1,);
        $crate::shape::signature_rows!(@expand $row [] a1: A1, a2: A2,);
        $crate::shape::signature_rows!(@expand $row [] a1: A1, a2: A2, a3: A3,);
        $crate::shape::signature_rows!(@expand $row [] a1: A1, a2: A2, a3: A3, a4: A4,);
        $crate::shape::signature_rows!(@owned $row
            a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
        $crate::shape::signature_rows!(@owned $row
            a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
        $crate::shape::signature_rows!(@owned $row
            a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
        $crate::shape::signature_rows!(@owned $row
            a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);
        $crate::shape::signature_rows!(@owned $row
            a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9);
        $crate::shape::signature_rows!(@owned $row
            a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9,
            a10: A10);
        $crate::shape::signature_rows!(@owned $row
            a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9,
            a10: A10, a11: A11);
        $crate::shape::signature_rows!(@owned $row
            a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9,
            a10: A10, a11: A11, a12: A12);
    };
    (@owned $row:ident $($arg:ident: $ty:ident),*) => {
        $row!($({ $arg: [$ty] [$ty] [$ty] })*);
    };
    (@expand $row:ident [$($done:tt)*]) => {
        $row!($($done)*);
    };
    (@expand $row:ident [$($done:tt)*] $arg:ident: $ty:ident, $($rest:tt)*) => {
        $crate::shape::signature_rows!(@expand $row
            [$($done)* { $arg: [$ty] [$ty] [$ty] }] $($rest)*);
        $crate::shape::signature_rows!(@expand $row
            [$($done)* { $arg: [&$ty] [&'a $ty] [$ty: ?Sized] }] $($rest)*);
        $crate::shape::signature_rows!(@expand $row
            [$($done)* { $arg: [&mut $ty] [&'a mut $ty] [$ty: ?Sized] }] $($rest)*);
    };
}

/// Invokes `$row!` once per by-value argument list, `a1: A1, ..`, from 0 to
/// [`MAX_ARITY`](crate::config::MAX_ARITY) arguments.
macro_rules! owned_signature_rows {
    ($row:ident) => {
        $row!();
        $row!(a1: A1);
        $row!(a1: A1, a2: A2);
        $row!(a1: A1, a2: A2, a3: A3);
        $row!(a1: A1, a2: A2, a3: A3, a4: A4);
        $row!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
        $row!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
        $row!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
        $row!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);
        $row!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9);
        $row!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9,
            a10: A10);
        $row!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9,
            a10: A10, a11: A11);
        $row!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9,
            a10: A10, a11: A11, a12: A12);
    };
}

pub(crate) use owned_signature_rows;
pub(crate) use signature_rows;

macro_rules! shape_row {
    ($({ $arg:ident: [$($param:tt)+] [$($elem:tt)+] [$($bound:tt)+] })*) => {
        impl<R $(, $($bound)+)*> sealed::FreeFn for fn($($($param)+),*) -> R {}

        impl<R $(, $($bound)+)*> FreeFn for fn($($($param)+),*) -> R {
            type Output = R;
            const ARITY: usize = <[&str]>::len(&[$(stringify!($arg)),*]);
        }

        impl<O: ?Sized, R $(, $($bound)+)*> sealed::MutMethod
            for fn(&mut O $(, $($param)+)*) -> R {}

        impl<O: ?Sized, R $(, $($bound)+)*> MutMethod for fn(&mut O $(, $($param)+)*) -> R {
            type Object = O;
            type Output = R;
            const ARITY: usize = <[&str]>::len(&[$(stringify!($arg)),*]);
        }

        impl<O: ?Sized, R $(, $($bound)+)*> sealed::ConstMethod
            for fn(&O $(, $($param)+)*) -> R {}

        impl<O: ?Sized, R $(, $($bound)+)*> ConstMethod for fn(&O $(, $($param)+)*) -> R {
            type Object = O;
            type Output = R;
            const ARITY: usize = <[&str]>::len(&[$(stringify!($arg)),*]);
        }
    };
}

macro_rules! borrowed_return_shape_row {
    ($($arg:ident: $ty:ident),*) => {
        impl<O: ?Sized, R: ?Sized + 'static $(, $ty)*> sealed::MutMethod
            for fn(&mut O $(, $ty)*) -> &R {}

        impl<O: ?Sized, R: ?Sized + 'static $(, $ty)*> MutMethod for fn(&mut O $(, $ty)*) -> &R {
            type Object = O;
            type Output = &'static R;
            const ARITY: usize = <[&str]>::len(&[$(stringify!($arg)),*]);
        }

        impl<O: ?Sized, R: ?Sized + 'static $(, $ty)*> sealed::MutMethod
            for fn(&mut O $(, $ty)*) -> &mut R {}

        impl<O: ?Sized, R: ?Sized + 'static $(, $ty)*> MutMethod
            for fn(&mut O $(, $ty)*) -> &mut R
        {
            type Object = O;
            type Output = &'static mut R;
            const ARITY: usize = <[&str]>::len(&[$(stringify!($arg)),*]);
        }

        impl<O: ?Sized, R: ?Sized + 'static $(, $ty)*> sealed::ConstMethod
            for fn(&O $(, $ty)*) -> &R {}

        impl<O: ?Sized, R: ?Sized + 'static $(, $ty)*> ConstMethod for fn(&O $(, $ty)*) -> &R {
            type Object = O;
            type Output = &'static R;
            const ARITY: usize = <[&str]>::len(&[$(stringify!($arg)),*]);
        }
    };
}

signature_rows!(shape_row);
owned_signature_rows!(borrowed_return_shape_row);
