#![allow(coherence_leak_check)]

use crate::capability::{Call, FunctorBase, HasResultType};
use crate::shape::{owned_signature_rows, signature_rows, ConstMethod, MutMethod};

/// Normalized wrapper around a method taking `&mut self`.
///
/// The receiver is the first invocation argument. Spread `call` is defined
/// when the arguments after the receiver are by value and the result does not
/// borrow; every shape is invocable through [`Call`].
#[derive(Debug, Clone, Copy)]
pub struct MemFunctor<M> {
    method: M,
}

/// Normalized wrapper around a method taking `&self`.
///
/// Accepts the receiver as `&O` or `&mut O`.
#[derive(Debug, Clone, Copy)]
pub struct ConstMemFunctor<M> {
    method: M,
}

impl<M: MutMethod> MemFunctor<M> {
    pub const fn new(method: M) -> Self {
        Self { method }
    }

    pub fn get(&self) -> M {
        self.method
    }
}

impl<M: ConstMethod> ConstMemFunctor<M> {
    pub const fn new(method: M) -> Self {
        Self { method }
    }

    pub fn get(&self) -> M {
        self.method
    }
}

/// Wraps a `&mut self` method: `mem_fun(Counter::bump as fn(&mut Counter, u32) -> u32)`.
pub fn mem_fun<M: MutMethod>(method: M) -> MemFunctor<M> {
    MemFunctor::new(method)
}

/// Wraps a `&self` method.
pub fn const_mem_fun<M: ConstMethod>(method: M) -> ConstMemFunctor<M> {
    ConstMemFunctor::new(method)
}

impl<M: MutMethod> From<M> for MemFunctor<M> {
    fn from(method: M) -> Self {
        Self::new(method)
    }
}

impl<M: ConstMethod> From<M> for ConstMemFunctor<M> {
    fn from(method: M) -> Self {
        Self::new(method)
    }
}

impl<M: MutMethod> HasResultType for MemFunctor<M> {
    type ResultType = M::Output;
}

impl<M: MutMethod> FunctorBase for MemFunctor<M> {}

impl<M: ConstMethod> HasResultType for ConstMemFunctor<M> {
    type ResultType = M::Output;
}

impl<M: ConstMethod> FunctorBase for ConstMemFunctor<M> {}

macro_rules! method_call_row {
    ($({ $arg:ident: [$($param:tt)+] [$($elem:tt)+] [$($bound:tt)+] })*) => {
        impl<'a, O: ?Sized, R $(, $($bound)+)*> Call<(&'a mut O, $($($elem)+,)*)>
            for MemFunctor<fn(&mut O $(, $($param)+)*) -> R>
        {
            type Output = R;

            #[inline]
            fn invoke(&self, (object, $($arg,)*): (&'a mut O, $($($elem)+,)*)) -> R {
                (self.method)(object $(, $arg)*)
            }
        }

        impl<'a, O: ?Sized, R $(, $($bound)+)*> Call<(&'a O, $($($elem)+,)*)>
            for ConstMemFunctor<fn(&O $(, $($param)+)*) -> R>
        {
            type Output = R;

            #[inline]
            fn invoke(&self, (object, $($arg,)*): (&'a O, $($($elem)+,)*)) -> R {
                (self.method)(object $(, $arg)*)
            }
        }

        impl<'a, O: ?Sized, R $(, $($bound)+)*> Call<(&'a mut O, $($($elem)+,)*)>
            for ConstMemFunctor<fn(&O $(, $($param)+)*) -> R>
        {
            type Output = R;

            #[inline]
            fn invoke(&self, (object, $($arg,)*): (&'a mut O, $($($elem)+,)*)) -> R {
                (self.method)(object $(, $arg)*)
            }
        }
    };
}

macro_rules! method_spread_row {
    ($($arg:ident: $ty:ident),*) => {
        impl<O: ?Sized, R $(, $ty)*> MemFunctor<fn(&mut O $(, $ty)*) -> R> {
            #[inline]
            pub fn call(&self, object: &mut O $(, $arg: $ty)*) -> R {
                (self.method)(object $(, $arg)*)
            }
        }

        impl<O: ?Sized, R $(, $ty)*> ConstMemFunctor<fn(&O $(, $ty)*) -> R> {
            #[inline]
            pub fn call(&self, object: &O $(, $arg: $ty)*) -> R {
                (self.method)(object $(, $arg)*)
            }
        }
    };
}

macro_rules! borrowed_return_call_row {
    ($($arg:ident: $ty:ident),*) => {
        impl<'a, O: ?Sized, R: ?Sized + 'a $(, $ty)*> Call<(&'a mut O, $($ty,)*)>
            for MemFunctor<fn(&mut O $(, $ty)*) -> &R>
        {
            type Output = &'a R;

            #[inline]
            fn invoke(&self, (object, $($arg,)*): (&'a mut O, $($ty,)*)) -> &'a R {
                (self.method)(object $(, $arg)*)
            }
        }

        impl<'a, O: ?Sized, R: ?Sized + 'a $(, $ty)*> Call<(&'a mut O, $($ty,)*)>
            for MemFunctor<fn(&mut O $(, $ty)*) -> &mut R>
        {
            type Output = &'a mut R;

            #[inline]
            fn invoke(&self, (object, $($arg,)*): (&'a mut O, $($ty,)*)) -> &'a mut R {
                (self.method)(object $(, $arg)*)
            }
        }

        impl<'a, O: ?Sized, R: ?Sized + 'a $(, $ty)*> Call<(&'a O, $($ty,)*)>
            for ConstMemFunctor<fn(&O $(, $ty)*) -> &R>
        {
            type Output = &'a R;

            #[inline]
            fn invoke(&self, (object, $($arg,)*): (&'a O, $($ty,)*)) -> &'a R {
                (self.method)(object $(, $arg)*)
            }
        }

        impl<'a, O: ?Sized, R: ?Sized + 'a $(, $ty)*> Call<(&'a mut O, $($ty,)*)>
            for ConstMemFunctor<fn(&O $(, $ty)*) -> &R>
        {
            type Output = &'a R;

            #[inline]
            fn invoke(&self, (object, $($arg,)*): (&'a mut O, $($ty,)*)) -> &'a R {
                (self.method)(object $(, $arg)*)
            }
        }
    };
}

signature_rows!(method_call_row);
owned_signature_rows!(method_spread_row);
owned_signature_rows!(borrowed_return_call_row);
