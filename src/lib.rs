//! Static result-type resolution for callables.
//!
//! Callback libraries need two facts about anything they store: what it returns
//! and how to call it. This crate answers both at compile time for free
//! function pointers, method pointers and user-defined callable objects,
//! without requiring those objects to implement anything.
//!
//! - [`resolve!`] classifies a callable type and yields a [`Resolution`]
//!   carrying the normalized functor type and the result type.
//! - [`PointerFunctor`], [`MemFunctor`] and [`ConstMemFunctor`] wrap raw
//!   pointers into copyable functors invocable through [`Call`].
//! - [`FunctorBase`] and [`register_result_type!`] let callables declare a
//!   result type the resolver cannot infer.
//! - The `functors-have-result-type` feature makes every otherwise unresolved
//!   [`HasResultType`] implementor resolve through it.
//!
//! A callable that matches nothing is not an error. Its result type degrades
//! to `()` so it can still be stored and invoked.
//!
//! ```
//! use functor_kit::{resolve, Call, Classification, Functor, Origin, Resolution};
//!
//! struct Greeter {
//!     greeting: &'static str,
//! }
//!
//! impl Functor for Greeter {
//!     type Args = (String,);
//!     type Output = String;
//!
//!     fn call(&self, (name,): (String,)) -> String {
//!         format!("{}, {name}", self.greeting)
//!     }
//! }
//!
//! let greeter: Resolution<Greeter, Greeter, String> = resolve!(Greeter);
//! assert_eq!(greeter.outcome(), Classification::Inferred);
//!
//! let method = resolve!(fn(&mut Vec<u8>, u8));
//! assert_eq!(method.outcome(), Classification::Structural(Origin::Method));
//!
//! let hello = greeter.normalize(Greeter { greeting: "hello" });
//! assert_eq!(hello.invoke(("slot".to_string(),)), "hello, slot");
//! ```

pub mod capability;
pub mod classification;
pub mod config;
pub mod error;
pub mod functors;
pub mod probe;
pub mod register;
pub mod report;
pub mod resolve;
pub mod shape;

pub use crate::capability::{Call, Functor, FunctorBase, HasResultType, RegisteredResult};
pub use crate::classification::{Classification, DeclarationSource, Origin};
pub use crate::config::BuildConfig;
pub use crate::error::{ResolveError, Result};
pub use crate::functors::{
    const_mem_fun, mem_fun, ptr_fun, ConstMemFunctor, MemFunctor, PointerFunctor,
};
pub use crate::report::ResolutionReport;
pub use crate::resolve::{Probe, Resolution};
pub use crate::shape::{ConstMethod, FreeFn, MutMethod};
