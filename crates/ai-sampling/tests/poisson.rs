use ai_core::Vec2;
use ai_sampling::{PoissonDiscSampler, PositionSampler, SampleDomain, SamplingError};

fn generate(seed: u64, width: f32, min_separation: f32) -> Vec<Vec2> {
    let domain = SampleDomain::square(width, min_separation).expect("valid domain");
    PoissonDiscSampler::new(seed)
        .generate(&domain)
        .expect("generation succeeds")
}

#[test]
fn points_stay_inside_the_domain() {
    let points = generate(3, 10.0, 1.0);
    assert!(!points.is_empty());
    for p in &points {
        assert!(p.x >= 0.0 && p.x < 10.0, "x out of range: {p:?}");
        assert!(p.y >= 0.0 && p.y < 10.0, "y out of range: {p:?}");
    }
}

#[test]
fn points_respect_min_separation() {
    let points = generate(11, 10.0, 1.0);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            assert!(a.distance(*b) >= 1.0 - 1e-4, "{a:?} and {b:?} too close");
        }
    }
}

#[test]
fn domain_is_reasonably_covered() {
    // A 10x10 square at r = 1 packs far more than a handful of discs.
    let points = generate(5, 10.0, 1.0);
    assert!(points.len() >= 40, "only {} points", points.len());
}

#[test]
fn same_seed_same_sequence() {
    assert_eq!(generate(42, 10.0, 1.0), generate(42, 10.0, 1.0));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(generate(1, 10.0, 1.0), generate(2, 10.0, 1.0));
}

#[test]
fn rejects_non_positive_domains() {
    for width in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let err = SampleDomain::square(width, 1.0).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidConfiguration { field: "width", .. }
        ));
    }
    assert!(SampleDomain::square(10.0, 0.0).is_err());
}

#[test]
fn rejects_separation_too_fine_for_the_domain() {
    let domain = SampleDomain::square(10_000.0, 0.001).expect("valid on its own");
    let err = PoissonDiscSampler::new(0).generate(&domain).unwrap_err();
    assert!(matches!(
        err,
        SamplingError::InvalidConfiguration {
            field: "min_separation",
            ..
        }
    ));
}
