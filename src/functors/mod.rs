//! Normalizers for raw function and method pointers.
//!
//! These wrappers are the only place raw pointers become functors. Each one
//! is `Copy`, implements [`FunctorBase`](crate::FunctorBase) with the pointer's
//! return type as its result type, and is invocable through
//! [`Call`](crate::Call) with an argument tuple. Pointers taking their
//! arguments by value also get an inherent `call` with spread arguments.
//!
//! ```
//! use functor_kit::{mem_fun, ptr_fun, Call};
//!
//! struct Meter {
//!     level: u8,
//! }
//!
//! impl Meter {
//!     fn raise(&mut self, by: u8) -> u8 {
//!         self.level += by;
//!         self.level
//!     }
//! }
//!
//! fn double(value: u8) -> u8 {
//!     value * 2
//! }
//!
//! let double = ptr_fun(double as fn(u8) -> u8);
//! assert_eq!(double.invoke((4,)), 8);
//!
//! let mut meter = Meter { level: 1 };
//! let raise = mem_fun(Meter::raise as fn(&mut Meter, u8) -> u8);
//! assert_eq!(raise.call(&mut meter, 2), 3);
//! ```

mod mem;
mod pointer;

pub use mem::{const_mem_fun, mem_fun, ConstMemFunctor, MemFunctor};
pub use pointer::{ptr_fun, PointerFunctor};
