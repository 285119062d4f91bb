//! Build-time configuration.
//!
//! Everything here is fixed when the crate is compiled. The only switch is the
//! `functors-have-result-type` cargo feature; cargo unifies features across the
//! dependency graph, so one crate enabling it enables it for the whole build.

use serde::{Deserialize, Serialize};

/// Whether the broad result-type opt-in is active for this build.
pub const FUNCTORS_HAVE_RESULT_TYPE: bool = cfg!(feature = "functors-have-result-type");

/// Largest argument count recognised by the structural shapes, not counting a
/// method receiver.
pub const MAX_ARITY: usize = 12;

/// Largest argument count for which any argument may be `&A` or `&mut A`.
pub const MAX_BORROWING_ARITY: usize = 4;

/// Snapshot of the build configuration, attached to resolution reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub functors_have_result_type: bool,
    pub max_arity: usize,
    pub max_borrowing_arity: usize,
}

impl BuildConfig {
    pub const fn current() -> Self {
        Self {
            functors_have_result_type: FUNCTORS_HAVE_RESULT_TYPE,
            max_arity: MAX_ARITY,
            max_borrowing_arity: MAX_BORROWING_ARITY,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::current()
    }
}
