//! Rungs of the resolution ladder.
//!
//! Rung `n` is implemented for `Probe` behind `9 - n` references. The macro
//! expression borrows the probe eight times, so method lookup meets rung 1
//! first and the bare `&Probe` fallback last. Every trait names its method
//! `resolution` so exactly one of them is picked per lookup step.

use super::{Probe, Resolution};
use crate::capability::{Functor, FunctorBase, HasResultType, RegisteredResult};
use crate::classification::{Classification, DeclarationSource, Origin};
use crate::functors::{ConstMemFunctor, MemFunctor, PointerFunctor};
use crate::shape::{ConstMethod, FreeFn, MutMethod};

pub trait MutMethodTier {
    type Resolved;
    fn resolution(self) -> Self::Resolved;
}

impl<M: MutMethod> MutMethodTier for &&&&&&&&Probe<M> {
    type Resolved = Resolution<M, MemFunctor<M>, M::Output>;

    fn resolution(self) -> Self::Resolved {
        Resolution::new(Classification::Structural(Origin::Method), Some(M::ARITY))
    }
}

pub trait ConstMethodTier {
    type Resolved;
    fn resolution(self) -> Self::Resolved;
}

impl<M: ConstMethod> ConstMethodTier for &&&&&&&Probe<M> {
    type Resolved = Resolution<M, ConstMemFunctor<M>, M::Output>;

    fn resolution(self) -> Self::Resolved {
        Resolution::new(
            Classification::Structural(Origin::ConstMethod),
            Some(M::ARITY),
        )
    }
}

pub trait FreeFnTier {
    type Resolved;
    fn resolution(self) -> Self::Resolved;
}

impl<F: FreeFn> FreeFnTier for &&&&&&Probe<F> {
    type Resolved = Resolution<F, PointerFunctor<F>, F::Output>;

    fn resolution(self) -> Self::Resolved {
        Resolution::new(
            Classification::Structural(Origin::FreeFunction),
            Some(F::ARITY),
        )
    }
}

pub trait MarkerTier {
    type Resolved;
    fn resolution(self) -> Self::Resolved;
}

impl<T: FunctorBase> MarkerTier for &&&&&Probe<T> {
    type Resolved = Resolution<T, T, <T as HasResultType>::ResultType>;

    fn resolution(self) -> Self::Resolved {
        Resolution::new(Classification::Declared(DeclarationSource::Marker), None)
    }
}

pub trait RegisteredTier {
    type Resolved;
    fn resolution(self) -> Self::Resolved;
}

impl<T: RegisteredResult> RegisteredTier for &&&&Probe<T> {
    type Resolved = Resolution<T, T, <T as RegisteredResult>::ResultType>;

    fn resolution(self) -> Self::Resolved {
        Resolution::new(
            Classification::Declared(DeclarationSource::Registered),
            None,
        )
    }
}

pub trait InferredTier {
    type Resolved;
    fn resolution(self) -> Self::Resolved;
}

impl<T: Functor> InferredTier for &&&Probe<T> {
    type Resolved = Resolution<T, T, <T as Functor>::Output>;

    fn resolution(self) -> Self::Resolved {
        Resolution::new(Classification::Inferred, None)
    }
}

/// Only implemented with the `functors-have-result-type` feature.
pub trait AssumedTier {
    type Resolved;
    fn resolution(self) -> Self::Resolved;
}

#[cfg(feature = "functors-have-result-type")]
impl<T: HasResultType> AssumedTier for &&Probe<T> {
    type Resolved = Resolution<T, T, <T as HasResultType>::ResultType>;

    fn resolution(self) -> Self::Resolved {
        Resolution::new(Classification::Declared(DeclarationSource::Assumed), None)
    }
}

pub trait FallbackTier {
    type Resolved;
    fn resolution(self) -> Self::Resolved;
}

impl<T> FallbackTier for &Probe<T> {
    type Resolved = Resolution<T, T, ()>;

    fn resolution(self) -> Self::Resolved {
        Resolution::new(Classification::Unresolved, None)
    }
}
