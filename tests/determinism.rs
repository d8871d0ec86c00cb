use neardup::{
    FingerprintComparator, Measure, SimHasher, SimilarityConfig, SimilarityPolicy,
};

fn sample_pairs() -> Vec<(String, String)> {
    vec![
        ("helloworld".into(), "HelloWorld".into()),
        ("prinf".into(), "printf".into()),
        (
            "a long notice about scheduled maintenance windows ".repeat(10),
            "a long notice about scheduled maintenance windows ".repeat(10),
        ),
        (
            "first long body of text with its own wording ".repeat(10),
            "second long body of text with different wording ".repeat(10),
        ),
    ]
}

#[test]
fn fingerprints_stable_across_calls_and_instances() {
    let comparator_a = FingerprintComparator::<SimHasher>::default();
    let comparator_b = FingerprintComparator::<SimHasher>::default();
    for (text, _) in sample_pairs() {
        let first = comparator_a.hash(&text).expect("hash");
        let second = comparator_a.hash(&text).expect("hash again");
        let other_instance = comparator_b.hash(&text).expect("hash elsewhere");
        assert_eq!(first, second);
        assert_eq!(first, other_instance);
    }
}

#[test]
fn verdicts_stable_across_policy_instances() {
    for (target, input) in sample_pairs() {
        let first = SimilarityPolicy::default()
            .compare(&target, &input)
            .expect("compare");
        let second = SimilarityPolicy::default()
            .compare(&target, &input)
            .expect("compare again");
        assert_eq!(first, second);
    }
}

#[test]
fn verdicts_are_symmetric() {
    let policy = SimilarityPolicy::new(SimilarityConfig::new().with_long_text_len(40))
        .expect("valid config");
    for (target, input) in sample_pairs() {
        let forward = policy.compare(&target, &input).expect("forward");
        let backward = policy.compare(&input, &target).expect("backward");
        assert_eq!(forward.similar, backward.similar);
        assert_eq!(forward.measure, backward.measure);
    }
}

#[test]
fn config_survives_serde_with_identical_behavior() {
    let config = SimilarityConfig::new()
        .with_long_text_len(40)
        .with_max_distance(6)
        .with_echo_inputs(true);
    let json = serde_json::to_string(&config).expect("serialize config");
    let restored: SimilarityConfig = serde_json::from_str(&json).expect("deserialize config");

    let original = SimilarityPolicy::new(config).expect("policy");
    let roundtripped = SimilarityPolicy::new(restored).expect("restored policy");
    for (target, input) in sample_pairs() {
        assert_eq!(
            original.compare(&target, &input).expect("original verdict"),
            roundtripped.compare(&target, &input).expect("restored verdict"),
        );
    }
}

#[test]
fn identical_long_texts_have_zero_distance() {
    let policy = SimilarityPolicy::default();
    let text = "the same notice, word for word, every single time ".repeat(10);
    let verdict = policy.compare(&text, &text).expect("compare");
    assert!(verdict.similar);
    assert_eq!(verdict.measure, Measure::Distance(0));
}
