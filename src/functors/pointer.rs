#![allow(coherence_leak_check)]

use crate::capability::{Call, FunctorBase, HasResultType};
use crate::shape::{owned_signature_rows, signature_rows, FreeFn};

/// Normalized wrapper around a free function pointer.
///
/// Every shape is invocable through [`Call`]. The inherent `call` takes spread
/// arguments and is defined for by-value argument lists.
#[derive(Debug, Clone, Copy)]
pub struct PointerFunctor<F> {
    func: F,
}

impl<F: FreeFn> PointerFunctor<F> {
    pub const fn new(func: F) -> Self {
        Self { func }
    }

    /// The wrapped pointer.
    pub fn get(&self) -> F {
        self.func
    }
}

/// Wraps a free function pointer.
///
/// Function items coerce with a cast: `ptr_fun(parse as fn(&str) -> u32)`.
pub fn ptr_fun<F: FreeFn>(func: F) -> PointerFunctor<F> {
    PointerFunctor::new(func)
}

impl<F: FreeFn> From<F> for PointerFunctor<F> {
    fn from(func: F) -> Self {
        Self::new(func)
    }
}

impl<F: FreeFn> HasResultType for PointerFunctor<F> {
    type ResultType = F::Output;
}

impl<F: FreeFn> FunctorBase for PointerFunctor<F> {}

macro_rules! pointer_call_row {
    ($({ $arg:ident: [$($param:tt)+] [$($elem:tt)+] [$($bound:tt)+] })*) => {
        impl<'a, R $(, $($bound)+)*> Call<($($($elem)+,)*)>
            for PointerFunctor<fn($($($param)+),*) -> R>
        {
            type Output = R;

            #[inline]
            fn invoke(&self, ($($arg,)*): ($($($elem)+,)*)) -> R {
                (self.func)($($arg),*)
            }
        }
    };
}

macro_rules! pointer_spread_row {
    ($($arg:ident: $ty:ident),*) => {
        impl<R $(, $ty)*> PointerFunctor<fn($($ty),*) -> R> {
            #[inline]
            pub fn call(&self $(, $arg: $ty)*) -> R {
                (self.func)($($arg),*)
            }
        }
    };
}

signature_rows!(pointer_call_row);
owned_signature_rows!(pointer_spread_row);

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(left: String, right: &'static str) -> String {
        left + right
    }

    fn answer() -> u64 {
        42
    }

    #[allow(clippy::too_many_arguments)]
    fn sum12(
        a: u8,
        b: u8,
        c: u8,
        d: u8,
        e: u8,
        f: u8,
        g: u8,
        h: u8,
        i: u8,
        j: u8,
        k: u8,
        l: u8,
    ) -> u32 {
        [a, b, c, d, e, f, g, h, i, j, k, l]
            .iter()
            .map(|v| u32::from(*v))
            .sum()
    }

    fn count_in(needle: char, haystack: &str) -> usize {
        haystack.matches(needle).count()
    }

    fn drain_into(source: &mut Vec<u8>, sink: &mut Vec<u8>, limit: usize) -> usize {
        let taken = limit.min(source.len());
        sink.extend(source.drain(..taken));
        taken
    }

    #[test]
    fn call_forwards_spread_arguments() {
        let functor = ptr_fun(concat as fn(String, &'static str) -> String);
        assert_eq!(functor.call("slot".to_string(), "-ready"), "slot-ready");
        assert_eq!(ptr_fun(answer as fn() -> u64).call(), 42);
    }

    #[test]
    fn invoke_matches_call() {
        type Sum12 = fn(u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8) -> u32;
        let functor = ptr_fun(sum12 as Sum12);
        let spread = functor.call(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12);
        let tupled = functor.invoke((1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12));
        assert_eq!(spread, 78);
        assert_eq!(spread, tupled);
    }

    #[test]
    fn borrowed_arguments_are_forwarded() {
        let count = ptr_fun(count_in as fn(char, &str) -> usize);
        let text = String::from("a-b-c");
        assert_eq!(count.invoke(('-', text.as_str())), 2);

        let drain = ptr_fun(drain_into as fn(&mut Vec<u8>, &mut Vec<u8>, usize) -> usize);
        let mut source = vec![1, 2, 3];
        let mut sink = Vec::new();
        assert_eq!(drain.invoke((&mut source, &mut sink, 2)), 2);
        assert_eq!(source, [3]);
        assert_eq!(sink, [1, 2]);
    }

    #[test]
    fn wrapper_is_copy_and_keeps_the_pointer() {
        let raw = answer as fn() -> u64;
        let functor = PointerFunctor::from(raw);
        let copy = functor;
        assert_eq!(functor.get()(), copy.get()());
    }
}
