//! Property-based tests for the pointer normalizers
//!
//! These tests verify invariants that should hold for all inputs:
//! - A wrapped free function returns exactly what a direct call returns
//! - Method wrappers mutate the receiver the same way a direct call does
//! - Tuple invocation and spread invocation agree
//! - Normalizing through the resolver yields the same wrapper behaviour

use functor_kit::{const_mem_fun, mem_fun, normalize, ptr_fun, Call};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
struct Ledger {
    entries: Vec<i64>,
}

impl Ledger {
    fn record(&mut self, amount: i64, note: String) -> usize {
        self.entries.push(amount + note.len() as i64);
        self.entries.len()
    }

    fn total(&self) -> i64 {
        self.entries.iter().sum()
    }

    fn weighted(&self, weight: i64, bias: i64) -> i64 {
        self.total().wrapping_mul(weight).wrapping_add(bias)
    }
}

fn mix(a: i32, b: u8, c: bool) -> i64 {
    let base = i64::from(a) * i64::from(b);
    if c {
        base
    } else {
        -base
    }
}

fn join(parts: Vec<String>, separator: char) -> String {
    parts.join(&separator.to_string())
}

proptest! {
    /// Property: wrapping never changes the value a free function returns
    #[test]
    fn prop_pointer_functor_matches_direct_call(a in any::<i32>(), b in any::<u8>(), c in any::<bool>()) {
        let functor = ptr_fun(mix as fn(i32, u8, bool) -> i64);
        prop_assert_eq!(functor.call(a, b, c), mix(a, b, c));
        prop_assert_eq!(functor.invoke((a, b, c)), mix(a, b, c));
    }

    /// Property: owned arguments are forwarded untouched
    #[test]
    fn prop_pointer_functor_forwards_owned_arguments(
        parts in prop::collection::vec("[a-z]{0,6}", 0..6),
        separator in prop::char::range('a', 'z')
    ) {
        let functor = normalize!(join as fn(Vec<String>, char) -> String);
        prop_assert_eq!(functor.call(parts.clone(), separator), join(parts, separator));
    }

    /// Property: a method wrapper leaves the receiver in the same state as a
    /// direct call sequence
    #[test]
    fn prop_mem_functor_matches_direct_mutation(
        ops in prop::collection::vec((-1000i64..1000, "[a-z]{0,4}"), 0..20)
    ) {
        let record = mem_fun(Ledger::record as fn(&mut Ledger, i64, String) -> usize);
        let mut direct = Ledger::default();
        let mut wrapped = Ledger::default();

        for (amount, note) in ops {
            let expected = direct.record(amount, note.clone());
            prop_assert_eq!(record.invoke((&mut wrapped, amount, note)), expected);
        }
        prop_assert_eq!(direct, wrapped);
    }

    /// Property: const method wrappers agree for shared and unique receivers
    #[test]
    fn prop_const_mem_functor_receivers_agree(
        entries in prop::collection::vec(-1000i64..1000, 0..10),
        weight in -50i64..50,
        bias in -50i64..50
    ) {
        let mut ledger = Ledger { entries };
        let weighted = const_mem_fun(Ledger::weighted as fn(&Ledger, i64, i64) -> i64);

        let expected = ledger.weighted(weight, bias);
        prop_assert_eq!(weighted.call(&ledger, weight, bias), expected);
        prop_assert_eq!(weighted.invoke((&ledger, weight, bias)), expected);
        prop_assert_eq!(weighted.invoke((&mut ledger, weight, bias)), expected);
    }
}
