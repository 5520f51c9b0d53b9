use super::*;

#[test]
fn same_seed_gives_identical_streams() {
    let mut a = RandomStreams::seed_all(42);
    let mut b = RandomStreams::seed_all(42);

    for _ in 0..32 {
        assert_eq!(a.unit(), b.unit());
    }
    assert_eq!(a.unit_array(16), b.unit_array(16));
    assert_eq!(a.normal_array(7, 0.0, 0.01), b.normal_array(7, 0.0, 0.01));
}

#[test]
fn different_seeds_diverge() {
    let mut a = RandomStreams::seed_all(1);
    let mut b = RandomStreams::seed_all(2);
    let xs: Vec<f64> = (0..8).map(|_| a.unit()).collect();
    let ys: Vec<f64> = (0..8).map(|_| b.unit()).collect();
    assert_ne!(xs, ys);
}

#[test]
fn scalar_and_vector_streams_are_independent() {
    let mut a = RandomStreams::seed_all(9);
    let mut b = RandomStreams::seed_all(9);

    // Drawing from the vector stream must not shift the scalar stream.
    let _ = a.unit_array(100);
    let _ = a.normal_array(33, 1.0, 2.0);
    assert_eq!(a.unit(), b.unit());

    // And the two streams do not replay each other.
    let mut c = RandomStreams::seed_all(9);
    let scalar: Vec<f64> = (0..4).map(|_| c.unit()).collect();
    let vector = c.unit_array(4);
    assert_ne!(scalar, vector);
}

#[test]
fn reseed_restores_the_initial_state() {
    let mut rng = RandomStreams::seed_all(5);
    let first: Vec<f64> = (0..4).map(|_| rng.unit()).collect();
    let first_vec = rng.unit_array(4);

    rng.reseed(5);
    let again: Vec<f64> = (0..4).map(|_| rng.unit()).collect();
    assert_eq!(first, again);
    assert_eq!(first_vec, rng.unit_array(4));
    assert_eq!(rng.seed(), 5);
}

#[test]
fn accepts_any_u64_seed() {
    let mut rng = RandomStreams::seed_all(u64::MAX);
    let v = rng.unit();
    assert!((0.0..1.0).contains(&v));
}

#[test]
fn unit_and_uniform_respect_bounds() {
    let mut rng = RandomStreams::seed_all(11);
    for _ in 0..1000 {
        let u = rng.unit();
        assert!((0.0..1.0).contains(&u));
        let v = rng.uniform(0.15, 0.35);
        assert!((0.15..0.35).contains(&v));
    }
    assert!(unit_from_u64(u64::MAX) < 1.0);
    assert_eq!(unit_from_u64(0), 0.0);
}

#[test]
fn randint_is_inclusive_and_covers_the_range() {
    let mut rng = RandomStreams::seed_all(3);
    let mut seen = [false; 8];
    for _ in 0..2000 {
        let v = rng.randint(5, 12);
        assert!((5..=12).contains(&v));
        seen[(v - 5) as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
    assert_eq!(rng.randint(4, 4), 4);
    assert_eq!(rng.randint(9, 2), 9);
}

#[test]
fn choose_handles_empty_and_non_empty() {
    let mut rng = RandomStreams::seed_all(0);
    let empty: [u8; 0] = [];
    assert!(rng.choose(&empty).is_none());
    assert!(rng.choose_index(0).is_none());

    let items = ["a", "b", "c"];
    for _ in 0..100 {
        assert!(items.contains(rng.choose(&items).unwrap()));
    }
}

#[test]
fn normal_array_has_requested_length_and_plausible_moments() {
    let mut rng = RandomStreams::seed_all(2024);
    assert!(rng.normal_array(0, 0.0, 1.0).is_empty());
    assert_eq!(rng.normal_array(5, 0.0, 1.0).len(), 5);

    let xs = rng.normal_array(20_000, 0.5, 0.01);
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    assert!((mean - 0.5).abs() < 0.001, "mean {mean}");
    assert!((var.sqrt() - 0.01).abs() < 0.001, "std {}", var.sqrt());
}
