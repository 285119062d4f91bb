//! Capability traits the resolver queries.
//!
//! A callable never has to implement any of these. Each one only adds
//! information: a declared result type, a registered result type, or a single
//! invocation signature. [`Call`] is the uniform invocation interface that
//! normalized functors expose to dispatch code.

/// Conventional result-type attribute.
///
/// On its own this is only consulted when the `functors-have-result-type`
/// feature is enabled. Pair it with [`FunctorBase`] to make the declaration
/// authoritative.
pub trait HasResultType {
    type ResultType;
}

/// Marker asserting that a callable declares its own result type.
///
/// A declared result type always wins over the one the resolver could infer
/// from a [`Functor`] implementation.
///
/// ```
/// use functor_kit::{resolve, Classification, DeclarationSource, FunctorBase, HasResultType};
///
/// struct Formatter;
///
/// impl HasResultType for Formatter {
///     type ResultType = String;
/// }
/// impl FunctorBase for Formatter {}
///
/// let resolution = resolve!(Formatter);
/// assert_eq!(
///     resolution.outcome(),
///     Classification::Declared(DeclarationSource::Marker)
/// );
/// ```
pub trait FunctorBase: HasResultType {}

/// Result type bound to a callable by [`register_result_type!`](crate::register_result_type).
///
/// Implement it through the macro; a second registration for the same type is
/// rejected by the compiler as a conflicting implementation.
pub trait RegisteredResult {
    type ResultType;
}

/// A callable object with exactly one invocation signature.
///
/// Because `Args` and `Output` are associated types a type can implement this
/// at most once, which is what lets the resolver read the result type off the
/// type alone. Overloaded callables implement [`Call`] for several argument
/// tuples instead and are not inferred.
pub trait Functor {
    /// Argument tuple, e.g. `(i32, String)`.
    type Args;
    type Output;

    fn call(&self, args: Self::Args) -> Self::Output;
}

/// Uniform invocation interface.
///
/// Implemented by every normalized wrapper and, through a blanket impl, by
/// every [`Functor`].
pub trait Call<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;
}

impl<F: Functor> Call<F::Args> for F {
    type Output = F::Output;

    fn invoke(&self, args: F::Args) -> F::Output {
        Functor::call(self, args)
    }
}
