//! Explicit result-type registration.
//!
//! Two forms exist. The narrow one, [`register_result_type!`](crate::register_result_type),
//! binds one callable type to one result type. The broad one is the
//! `functors-have-result-type` cargo feature: once any crate in the build
//! enables it, every callable that would otherwise resolve to `()` but
//! implements [`HasResultType`](crate::HasResultType) resolves through that
//! implementation instead.

/// Binds callable types to result types, overriding signature inference.
///
/// Use it for callables the resolver cannot read, such as ones that implement
/// [`Call`](crate::Call) for several argument tuples.
///
/// ```
/// use functor_kit::{register_result_type, resolve, Call, Classification, DeclarationSource, Resolution};
///
/// struct Render;
///
/// impl Call<(u32,)> for Render {
///     type Output = String;
///     fn invoke(&self, (value,): (u32,)) -> String {
///         value.to_string()
///     }
/// }
///
/// impl Call<(bool,)> for Render {
///     type Output = String;
///     fn invoke(&self, (flag,): (bool,)) -> String {
///         flag.to_string()
///     }
/// }
///
/// register_result_type!(Render => String);
///
/// let resolution: Resolution<Render, Render, String> = resolve!(Render);
/// assert_eq!(
///     resolution.outcome(),
///     Classification::Declared(DeclarationSource::Registered)
/// );
/// ```
///
/// Registering the same type twice does not compile:
///
/// ```compile_fail
/// use functor_kit::register_result_type;
///
/// struct Render;
///
/// register_result_type!(Render => String);
/// register_result_type!(Render => u32);
/// ```
///
/// Raw function pointers cannot be registered from outside this crate; their
/// shape already fixes the result type:
///
/// ```compile_fail
/// use functor_kit::register_result_type;
///
/// register_result_type!(fn(u8) -> u8 => String);
/// ```
#[macro_export]
macro_rules! register_result_type {
    ($($callable:ty => $result:ty),+ $(,)?) => {
        $(
            impl $crate::RegisteredResult for $callable {
                type ResultType = $result;
            }
        )+
    };
}
