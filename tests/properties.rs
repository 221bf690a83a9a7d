use eos80_rs::{
    bulk_modulus_a, bulk_modulus_k0, seawater_density, seawater_density_at_surface,
    secant_bulk_modulus,
};

#[test]
fn density_increases_with_pressure() {
    for (sp, t) in [(0.0, 0.0), (35.0, 25.0), (34.7, 2.0), (40.0, 30.0)] {
        let mut previous = seawater_density(sp, t, 0.0);
        for step in 1..=50 {
            let p = step as f64 * 200.0;
            let rho = seawater_density(sp, t, p);
            assert!(rho >= previous, "S={sp} t={t}: {rho} < {previous} at {p} dbar");
            previous = rho;
        }
    }
}

#[test]
fn negative_salinity_is_nan_not_panic() {
    assert!(seawater_density_at_surface(-1.0, 25.0).is_nan());
    assert!(bulk_modulus_k0(-1.0, 25.0).is_nan());
    assert!(bulk_modulus_a(-1.0, 25.0).is_nan());
    assert!(seawater_density(-0.5, 10.0, 100.0).is_nan());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = seawater_density(34.2, 7.3, 2345.0);
    let b = seawater_density(34.2, 7.3, 2345.0);
    assert_eq!(a.to_bits(), b.to_bits());
    let k1 = secant_bulk_modulus(34.2, 7.3, 2345.0);
    let k2 = secant_bulk_modulus(34.2, 7.3, 2345.0);
    assert_eq!(k1.to_bits(), k2.to_bits());
}

#[test]
fn safe_to_share_between_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || seawater_density(35.0, 10.0, i as f64 * 1000.0)))
        .collect();
    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, rho) in results.iter().enumerate() {
        assert_eq!(*rho, seawater_density(35.0, 10.0, i as f64 * 1000.0));
    }
}
