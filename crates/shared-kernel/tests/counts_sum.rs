// crates/shared-kernel/tests/counts_sum.rs
use proptest::prelude::*;
use srcsweep_shared_kernel::LineCount;

#[test]
fn linecount_sum() {
    let total = [1usize, 2, 3].into_iter().map(LineCount::from).sum::<LineCount>();
    assert_eq!(usize::from(total), 6);
}

#[test]
fn linecount_sum_ref() {
    let values = [LineCount::from(5), LineCount::from(7)];
    let total: LineCount = values.iter().sum();
    assert_eq!(total, LineCount::new(12));
}

#[test]
fn linecount_add_assign() {
    let mut lines = LineCount::zero();
    lines += LineCount::from(4);
    lines += LineCount::from(0);
    assert_eq!(lines.value(), 4);
    assert!(!lines.is_zero());
}

#[test]
fn empty_sum_is_zero() {
    let total: LineCount = std::iter::empty::<LineCount>().sum();
    assert!(total.is_zero());
    assert_eq!(total, LineCount::default());
}

#[test]
fn display_is_plain_number() {
    assert_eq!(LineCount::new(42).to_string(), "42");
}

proptest! {
    #[test]
    fn sum_is_order_independent(mut values in proptest::collection::vec(0usize..10_000, 0..64)) {
        let forward: LineCount = values.iter().copied().map(LineCount::from).sum();
        values.reverse();
        let backward: LineCount = values.iter().copied().map(LineCount::from).sum();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward.value(), values.iter().sum::<usize>());
    }
}
