//! Resolution reports built from real resolutions.

use functor_kit::{
    register_result_type, resolve, BuildConfig, Classification, DeclarationSource, Origin,
    ResolutionReport, ResolveError,
};
use pretty_assertions::assert_eq;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Sink;

register_result_type!(Sink => Option<String>);

#[test]
fn structural_report_names_wrapper_and_result() {
    init_tracing();
    let report = resolve!(fn(&mut Vec<u32>, u32) -> usize).report();
    report.log();

    assert_eq!(report.outcome, Classification::Structural(Origin::Method));
    assert_eq!(report.origin, Origin::Method);
    assert_eq!(report.arity, Some(1));
    assert_eq!(report.result, "usize");
    assert!(report.functor.contains("MemFunctor"));
    assert_eq!(report.config, BuildConfig::current());
}

#[test]
fn registered_report_round_trips_through_json() {
    init_tracing();
    let report = resolve!(Sink).report();
    assert_eq!(
        report.outcome,
        Classification::Declared(DeclarationSource::Registered)
    );
    assert!(report.result.contains("Option<"));
    assert_eq!(report.arity, None);

    let json = report.to_json_pretty().unwrap();
    assert_eq!(ResolutionReport::from_json(&json).unwrap(), report);
}

#[test]
fn expect_outcome_guards_dispatch_assumptions() {
    init_tracing();
    let report = resolve!(fn(u8) -> u8).report();
    report
        .expect_outcome(Classification::Structural(Origin::FreeFunction))
        .unwrap();

    match report.expect_outcome(Classification::Inferred) {
        Err(ResolveError::OutcomeMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, Classification::Inferred);
            assert_eq!(actual, Classification::Structural(Origin::FreeFunction));
        }
        other => panic!("expected a mismatch, got {other:?}"),
    }
}
