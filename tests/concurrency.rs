//! Thread-safety checks: one policy instance, many callers, no locks.

use std::sync::Arc;
use std::thread;

use neardup::{SimilarityConfig, SimilarityPolicy};

#[test]
fn shared_policy_gives_identical_verdicts_across_threads() {
    let policy = Arc::new(
        SimilarityPolicy::new(SimilarityConfig::new().with_long_text_len(40)).expect("policy"),
    );
    let target = "a recurring promotional message with minor edits ".repeat(4);
    let input = "a recurring promotional message with minor edits ".repeat(4);

    let baseline = policy.compare(&target, &input).expect("baseline verdict");

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let policy = Arc::clone(&policy);
            let target = target.clone();
            let input = input.clone();
            thread::spawn(move || policy.compare(&target, &input).expect("threaded verdict"))
        })
        .collect();

    for handle in handles {
        let verdict = handle.join().expect("thread join");
        assert_eq!(verdict, baseline);
    }
}

#[test]
fn threads_with_distinct_pairs_do_not_interfere() {
    let policy = Arc::new(SimilarityPolicy::default());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let policy = Arc::clone(&policy);
            thread::spawn(move || {
                let a = format!("thread specific text number {i}");
                let b = format!("thread specific text number {i}");
                policy.is_similar(&a, &b).expect("verdict")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread join"));
    }
}
