//! Classification outcomes produced by the resolver.
//!
//! Every callable type lands in exactly one [`Classification`]. The value is
//! fixed by trait selection when the crate using it is compiled, so two
//! resolutions of the same type always agree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a callable is referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// `fn(A..) -> R`
    FreeFunction,
    /// `fn(&mut O, A..) -> R`
    ///
    /// Also reported for a free function whose first parameter is `&mut T`.
    Method,
    /// `fn(&O, A..) -> R`
    ///
    /// Also reported for a free function whose first parameter is `&T`, such
    /// as `fn(&[u8]) -> usize`. The receiver shape is all a pointer type
    /// carries; invoking through the wrapper is the same as calling it directly.
    ConstMethod,
    /// Anything that is not a raw function pointer.
    UserDefinedObject,
}

impl Origin {
    /// True for the three pointer shapes.
    pub const fn is_raw_pointer(self) -> bool {
        !matches!(self, Origin::UserDefinedObject)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Origin::FreeFunction => "free function",
            Origin::Method => "method",
            Origin::ConstMethod => "const method",
            Origin::UserDefinedObject => "user-defined object",
        };
        f.write_str(name)
    }
}

/// Where an explicitly declared result type came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationSource {
    /// The callable implements [`FunctorBase`](crate::FunctorBase).
    Marker,
    /// The callable was named in [`register_result_type!`](crate::register_result_type).
    Registered,
    /// The `functors-have-result-type` feature assumed a
    /// [`HasResultType`](crate::HasResultType) implementation.
    Assumed,
}

impl fmt::Display for DeclarationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclarationSource::Marker => "marker",
            DeclarationSource::Registered => "registration",
            DeclarationSource::Assumed => "assumed result type",
        };
        f.write_str(name)
    }
}

/// The resolution strategy selected for a callable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Raw function or method pointer, wrapped by the matching normalizer.
    Structural(Origin),
    /// The callable names its own result type.
    Declared(DeclarationSource),
    /// Result type taken from the callable's single signature.
    Inferred,
    /// Nothing applied; the result type degrades to `()`.
    Unresolved,
}

impl Classification {
    pub const fn origin(self) -> Origin {
        match self {
            Classification::Structural(origin) => origin,
            _ => Origin::UserDefinedObject,
        }
    }

    /// False only for [`Classification::Unresolved`].
    pub const fn is_known(self) -> bool {
        !matches!(self, Classification::Unresolved)
    }

    pub const fn is_structural(self) -> bool {
        matches!(self, Classification::Structural(_))
    }

    pub const fn is_declared(self) -> bool {
        matches!(self, Classification::Declared(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Structural(origin) => write!(f, "structural match ({origin})"),
            Classification::Declared(source) => write!(f, "declared ({source})"),
            Classification::Inferred => f.write_str("inferred"),
            Classification::Unresolved => f.write_str("unresolved"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_outcomes_carry_their_origin() {
        assert_eq!(
            Classification::Structural(Origin::ConstMethod).origin(),
            Origin::ConstMethod
        );
        assert_eq!(Classification::Inferred.origin(), Origin::UserDefinedObject);
        assert_eq!(
            Classification::Declared(DeclarationSource::Registered).origin(),
            Origin::UserDefinedObject
        );
    }

    #[test]
    fn only_unresolved_is_unknown() {
        assert!(!Classification::Unresolved.is_known());
        assert!(Classification::Inferred.is_known());
        assert!(Classification::Declared(DeclarationSource::Assumed).is_known());
        assert!(Classification::Structural(Origin::FreeFunction).is_known());
    }

    #[test]
    fn raw_pointer_and_declared_predicates() {
        assert!(Origin::FreeFunction.is_raw_pointer());
        assert!(Origin::ConstMethod.is_raw_pointer());
        assert!(!Origin::UserDefinedObject.is_raw_pointer());

        assert!(Classification::Declared(DeclarationSource::Assumed).is_declared());
        assert!(!Classification::Inferred.is_declared());
        assert!(!Classification::Structural(Origin::Method).is_declared());
    }

    #[test]
    fn display_names_the_strategy() {
        assert_eq!(
            Classification::Structural(Origin::Method).to_string(),
            "structural match (method)"
        );
        assert_eq!(
            Classification::Declared(DeclarationSource::Marker).to_string(),
            "declared (marker)"
        );
        assert_eq!(Classification::Unresolved.to_string(), "unresolved");
    }

    #[test]
    fn serializes_as_externally_tagged_enum() {
        let json = serde_json::to_string(&Classification::Structural(Origin::FreeFunction))
            .unwrap();
        assert_eq!(json, r#"{"Structural":"FreeFunction"}"#);
        let back: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Classification::Structural(Origin::FreeFunction));
    }
}
