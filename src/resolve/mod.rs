//! Static result-type resolution.
//!
//! [`resolve!`](crate::resolve) classifies a callable type by walking a fixed
//! precedence ladder and stops at the first rung that applies:
//!
//! 1. `fn(&mut O, ..) -> R`: [`MemFunctor`](crate::MemFunctor)
//! 2. `fn(&O, ..) -> R`: [`ConstMemFunctor`](crate::ConstMemFunctor)
//! 3. `fn(..) -> R`: [`PointerFunctor`](crate::PointerFunctor)
//! 4. [`FunctorBase`](crate::FunctorBase): its declared `ResultType`
//! 5. [`RegisteredResult`](crate::RegisteredResult): the registered type
//! 6. [`Functor`](crate::Functor): its single signature's `Output`
//! 7. with `functors-have-result-type`, [`HasResultType`](crate::HasResultType)
//! 8. anything else: `()`
//!
//! The ladder is built from method-resolution priority. The probe expression
//! is borrowed eight times and each rung's trait is implemented for a probe
//! behind a different number of references, so the compiler tries the rungs
//! from the outermost reference inward and picks the first whose bounds hold.
//! The choice happens at compile time. Inside a generic function a type
//! parameter only reaches the rungs its own bounds prove, usually just the last.
//!
//! ```
//! use functor_kit::{resolve, Classification, Origin, PointerFunctor, Resolution};
//!
//! fn parse(digit: char) -> Option<u32> {
//!     digit.to_digit(10)
//! }
//!
//! let resolution: Resolution<_, PointerFunctor<fn(char) -> Option<u32>>, Option<u32>> =
//!     resolve!(fn(char) -> Option<u32>);
//! assert_eq!(resolution.outcome(), Classification::Structural(Origin::FreeFunction));
//!
//! let functor = resolution.normalize(parse as fn(char) -> Option<u32>);
//! assert_eq!(functor.call('7'), Some(7));
//! ```

#[doc(hidden)]
pub mod tiers;

use crate::classification::{Classification, Origin};
use crate::error::{ResolveError, Result};
use crate::report::ResolutionReport;
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Type-level handle on a callable type, the receiver of the resolution ladder.
pub struct Probe<T>(PhantomData<fn() -> T>);

impl<T> Probe<T> {
    pub const fn new() -> Self {
        Probe(PhantomData)
    }

    /// Probe for the type of `value`, for types that cannot be named.
    pub const fn of(_value: &T) -> Self {
        Probe(PhantomData)
    }
}

impl<T> Clone for Probe<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Probe<T> {}

impl<T> Default for Probe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Probe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probe<{}>", type_name::<T>())
    }
}

/// Outcome of resolving callable type `T`.
///
/// `F` is the normalized functor type and `R` the result type. Both are fixed
/// by the rung that matched; the value only records which rung that was.
pub struct Resolution<T, F, R> {
    outcome: Classification,
    arity: Option<usize>,
    marker: PhantomData<fn(T) -> (F, R)>,
}

impl<T, F, R> Resolution<T, F, R> {
    pub(crate) const fn new(outcome: Classification, arity: Option<usize>) -> Self {
        Self {
            outcome,
            arity,
            marker: PhantomData,
        }
    }

    pub const fn outcome(&self) -> Classification {
        self.outcome
    }

    pub const fn origin(&self) -> Origin {
        self.outcome.origin()
    }

    /// Argument count of a structural match, not counting a method receiver.
    pub const fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// False when the result type degraded to `()`.
    pub const fn is_known(&self) -> bool {
        self.outcome.is_known()
    }

    /// Builds the normalized functor from a callable of the resolved type.
    ///
    /// Raw pointers are wrapped; every other callable is returned unchanged.
    pub fn normalize(self, callable: T) -> F
    where
        F: From<T>,
    {
        F::from(callable)
    }

    pub fn callable_type(&self) -> &'static str {
        type_name::<T>()
    }

    pub fn functor_type(&self) -> &'static str {
        type_name::<F>()
    }

    pub fn result_type(&self) -> &'static str {
        type_name::<R>()
    }

    /// Rejects callables whose result type degraded to `()`.
    pub fn require_known(self) -> Result<Self> {
        if self.is_known() {
            Ok(self)
        } else {
            debug!(
                callable = self.callable_type(),
                "rejecting callable with unresolved result type"
            );
            Err(ResolveError::unknown_result(self.callable_type()))
        }
    }

    pub fn report(&self) -> ResolutionReport {
        trace!(
            callable = self.callable_type(),
            outcome = %self.outcome,
            "building resolution report"
        );
        ResolutionReport::new(
            self.callable_type(),
            self.functor_type(),
            self.result_type(),
            self.outcome,
            self.arity,
        )
    }
}

impl<T, F, R> Clone for Resolution<T, F, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, F, R> Copy for Resolution<T, F, R> {}

impl<T, F, R> PartialEq for Resolution<T, F, R> {
    fn eq(&self, other: &Self) -> bool {
        self.outcome == other.outcome && self.arity == other.arity
    }
}

impl<T, F, R> Eq for Resolution<T, F, R> {}

impl<T, F, R> fmt::Debug for Resolution<T, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("callable", &self.callable_type())
            .field("outcome", &self.outcome)
            .field("functor", &self.functor_type())
            .field("result", &self.result_type())
            .field("arity", &self.arity)
            .finish()
    }
}

/// Resolves a callable type.
///
/// Expands to a [`Resolution`] whose type parameters carry the normalized
/// functor and result types.
///
/// ```
/// use functor_kit::{resolve, Classification};
///
/// struct Opaque;
///
/// let resolution = resolve!(Opaque);
/// assert_eq!(resolution.outcome(), Classification::Unresolved);
/// assert_eq!(resolution.result_type(), "()");
/// ```
#[macro_export]
macro_rules! resolve {
    ($callable:ty) => {
        $crate::__resolve_probe!($crate::resolve::Probe::<$callable>::new())
    };
}

/// Resolves the type of an expression without moving it.
///
/// Function items and closures have their own unnameable types, which are not
/// pointer shapes; cast them with `as fn(..)` to get a structural match.
#[macro_export]
macro_rules! resolve_of {
    ($value:expr) => {
        $crate::__resolve_probe!($crate::resolve::Probe::of(&$value))
    };
}

/// Resolves a callable value and returns its normalized functor.
///
/// ```
/// use functor_kit::{normalize, Call};
///
/// fn shout(text: String) -> String {
///     text.to_uppercase()
/// }
///
/// let functor = normalize!(shout as fn(String) -> String);
/// assert_eq!(functor.invoke(("ok".to_string(),)), "OK");
/// ```
#[macro_export]
macro_rules! normalize {
    ($callable:expr) => {{
        let callable = $callable;
        $crate::resolve_of!(callable).normalize(callable)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __resolve_probe {
    ($probe:expr) => {{
        #[allow(unused_imports)]
        use $crate::resolve::tiers::{
            AssumedTier as _, ConstMethodTier as _, FallbackTier as _, FreeFnTier as _,
            InferredTier as _, MarkerTier as _, MutMethodTier as _, RegisteredTier as _,
        };
        (&&&&&&&&$probe).resolution()
    }};
}
