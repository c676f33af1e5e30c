use ai_core::Vec2;
use ai_sampling::{FixedSampler, SampleDomain, SampleSet};

#[test]
fn produce_is_idempotent() {
    let mut set = SampleSet::poisson(10.0, 1.0, 7).expect("valid domain");
    assert!(!set.is_generated());
    assert_eq!(set.samples(), None);

    let first = set.produce().expect("generates").to_vec();
    let second = set.produce().expect("cached").to_vec();
    assert_eq!(first, second);
    assert_eq!(set.samples(), Some(first.as_slice()));
}

#[test]
fn produce_generates_only_once() {
    let domain = SampleDomain::square(4.0, 1.0).unwrap();
    let points = vec![Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0)];
    let mut set = SampleSet::new(domain, FixedSampler::new(points.clone()));

    for _ in 0..3 {
        assert_eq!(set.produce().unwrap(), points.as_slice());
    }
    assert_eq!(set.sampler().generated(), 1);
}

#[test]
fn regenerate_replaces_the_cached_sequence() {
    let mut set = SampleSet::poisson(10.0, 1.0, 7).expect("valid domain");
    let first = set.produce().unwrap().to_vec();
    let second = set.regenerate().unwrap().to_vec();

    // The sampler's stream advanced, so a fresh sequence comes out.
    assert_ne!(first, second);
    assert_eq!(set.samples(), Some(second.as_slice()));
}

#[test]
fn poisson_constructor_validates_the_domain() {
    assert!(SampleSet::poisson(0.0, 1.0, 0).is_err());
    assert!(SampleSet::poisson(-5.0, 1.0, 0).is_err());
}
