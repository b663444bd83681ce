//! Toggle set tests - capacity reset, toggling, and notifications

mod common;

use auto_highlight::model::{Keyword, ToggleSetManager};
use auto_highlight::{HighlightError, HighlightEventChannel};
use common::{names, Recorder};
use proptest::prelude::*;

fn kw(word: &str) -> Keyword {
    Keyword::new(word).unwrap()
}

fn manager(capacity: usize) -> (ToggleSetManager, Recorder) {
    let channel = HighlightEventChannel::new();
    let recorder = Recorder::attach(&channel);
    (ToggleSetManager::new(capacity, channel), recorder)
}

#[test]
fn test_capacity_two_alpha_beta_gamma() {
    let (mut manager, recorder) = manager(2);
    manager.toggle(kw("alpha")).unwrap();
    manager.toggle(kw("beta")).unwrap();
    manager.toggle(kw("gamma")).unwrap();

    assert_eq!(names(manager.keywords().unwrap()), vec!["gamma"]);
    assert_eq!(recorder.last(), Some(vec!["gamma".to_string()]));
}

#[test]
fn test_toggle_twice_removes_without_overflow() {
    let (mut manager, _) = manager(3);
    manager.toggle(kw("alpha")).unwrap();
    manager.toggle(kw("alpha")).unwrap();
    assert!(!manager.contains("alpha").unwrap());
}

#[test]
fn test_removal_counts_toward_reset() {
    let (mut manager, _) = manager(3);
    manager.toggle(kw("alpha")).unwrap();
    manager.toggle(kw("alpha")).unwrap();
    manager.toggle(kw("beta")).unwrap();
    assert_eq!(manager.toggle_count().unwrap(), 3);

    manager.toggle(kw("gamma")).unwrap();
    assert_eq!(names(manager.keywords().unwrap()), vec!["gamma"]);
    assert_eq!(manager.toggle_count().unwrap(), 1);
}

#[test]
fn test_insertion_order_is_kept() {
    let (mut manager, _) = manager(5);
    for word in ["delta", "alpha", "charlie"] {
        manager.toggle(kw(word)).unwrap();
    }
    manager.toggle(kw("alpha")).unwrap();
    manager.toggle(kw("alpha")).unwrap();
    assert_eq!(
        names(manager.keywords().unwrap()),
        vec!["delta", "charlie", "alpha"]
    );
}

#[test]
fn test_every_toggle_notifies_once() {
    let (mut manager, recorder) = manager(2);
    manager.toggle(kw("alpha")).unwrap();
    manager.toggle(kw("alpha")).unwrap();
    manager.toggle(kw("beta")).unwrap();
    assert_eq!(
        recorder.notifications(),
        vec![vec!["alpha".to_string()], vec![], vec!["beta".to_string()]]
    );
}

#[test]
fn test_reset_that_keeps_the_same_word_is_silent() {
    let (mut manager, recorder) = manager(3);
    manager.toggle(kw("alpha")).unwrap();
    manager.toggle(kw("alpha")).unwrap();
    manager.toggle(kw("beta")).unwrap();
    let before = recorder.count();

    // Count is at capacity and "beta" is the only member
    let snapshot = manager.toggle(kw("beta")).unwrap();

    assert_eq!(names(&snapshot), vec!["beta"]);
    assert_eq!(names(manager.keywords().unwrap()), vec!["beta"]);
    assert_eq!(manager.toggle_count().unwrap(), 1);
    assert_eq!(recorder.count(), before);

    // The next change notifies again
    manager.toggle(kw("gamma")).unwrap();
    assert_eq!(recorder.count(), before + 1);
    assert_eq!(
        recorder.last(),
        Some(vec!["beta".to_string(), "gamma".to_string()])
    );
}

#[test]
fn test_clear_on_empty_set_is_silent() {
    let (mut manager, recorder) = manager(2);
    manager.clear().unwrap();
    assert_eq!(recorder.count(), 0);

    manager.toggle(kw("alpha")).unwrap();
    manager.clear().unwrap();
    manager.clear().unwrap();
    assert_eq!(
        recorder.notifications(),
        vec![vec!["alpha".to_string()], vec![]]
    );
}

#[test]
fn test_shrinking_capacity_applies_on_next_toggle() {
    let (mut manager, _) = manager(5);
    for word in ["alpha", "beta", "gamma"] {
        manager.toggle(kw(word)).unwrap();
    }
    manager.set_max_capacity(2);
    assert_eq!(manager.len().unwrap(), 3);

    manager.toggle(kw("delta")).unwrap();
    assert_eq!(names(manager.keywords().unwrap()), vec!["delta"]);
}

#[test]
fn test_destroy_is_terminal() {
    let (mut manager, _) = manager(2);
    manager.destroy().unwrap();
    assert_eq!(manager.toggle(kw("alpha")), Err(HighlightError::Destroyed));
    assert_eq!(manager.keywords().err(), Some(HighlightError::Destroyed));
}

proptest! {
    #[test]
    fn prop_size_never_exceeds_capacity(
        capacity in 1usize..6,
        words in proptest::collection::vec(
            prop::sample::select(vec!["alpha", "beta", "gamma", "delta", "epsilon", "zeta"]),
            0..40,
        ),
    ) {
        let mut manager = ToggleSetManager::new(capacity, HighlightEventChannel::new());
        for word in words {
            let snapshot = manager.toggle(kw(word)).unwrap();
            prop_assert!(snapshot.len() <= capacity);
            prop_assert!(manager.toggle_count().unwrap() <= capacity);
        }
    }

    #[test]
    fn prop_no_duplicates(
        words in proptest::collection::vec(
            prop::sample::select(vec!["alpha", "beta", "gamma"]),
            0..30,
        ),
    ) {
        let mut manager = ToggleSetManager::new(4, HighlightEventChannel::new());
        for word in words {
            manager.toggle(kw(word)).unwrap();
            let mut seen = names(manager.keywords().unwrap());
            let total = seen.len();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), total);
        }
    }
}
