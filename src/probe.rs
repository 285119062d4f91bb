//! The two capability probes, usable on their own.
//!
//! [`probe_signature!`](crate::probe_signature) asks whether a result type can
//! be read off a single invocation signature; [`declares_result!`](crate::declares_result)
//! asks whether the callable declares one explicitly. Both expand to a `bool`
//! fixed at compile time. Raw function pointers answer `false` to both; the
//! resolver handles them structurally before either probe is consulted.

use crate::capability::{Functor, FunctorBase, RegisteredResult};
use crate::resolve::Probe;

pub trait SignatureProbe {
    fn has_signature(self) -> bool;
}

impl<T: Functor> SignatureProbe for &&Probe<T> {
    fn has_signature(self) -> bool {
        true
    }
}

pub trait NoSignatureProbe {
    fn has_signature(self) -> bool;
}

impl<T> NoSignatureProbe for &Probe<T> {
    fn has_signature(self) -> bool {
        false
    }
}

pub trait MarkerProbe {
    fn declares(self) -> bool;
}

impl<T: FunctorBase> MarkerProbe for &&&Probe<T> {
    fn declares(self) -> bool {
        true
    }
}

pub trait RegistrationProbe {
    fn declares(self) -> bool;
}

impl<T: RegisteredResult> RegistrationProbe for &&Probe<T> {
    fn declares(self) -> bool {
        true
    }
}

pub trait UndeclaredProbe {
    fn declares(self) -> bool;
}

impl<T> UndeclaredProbe for &Probe<T> {
    fn declares(self) -> bool {
        false
    }
}

/// `true` when the callable type has exactly one invocation signature.
///
/// ```
/// use functor_kit::{probe_signature, Functor};
///
/// struct Negate;
///
/// impl Functor for Negate {
///     type Args = (i32,);
///     type Output = i32;
///
///     fn call(&self, (value,): (i32,)) -> i32 {
///         -value
///     }
/// }
///
/// struct Inert;
///
/// assert!(probe_signature!(Negate));
/// assert!(!probe_signature!(Inert));
/// ```
#[macro_export]
macro_rules! probe_signature {
    ($callable:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::{NoSignatureProbe as _, SignatureProbe as _};
        (&&$crate::resolve::Probe::<$callable>::new()).has_signature()
    }};
}

/// `true` when the callable type implements [`FunctorBase`](crate::FunctorBase)
/// or was named in [`register_result_type!`](crate::register_result_type).
#[macro_export]
macro_rules! declares_result {
    ($callable:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::{MarkerProbe as _, RegistrationProbe as _, UndeclaredProbe as _};
        (&&&$crate::resolve::Probe::<$callable>::new()).declares()
    }};
}
