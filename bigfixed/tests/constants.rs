use bigfixed::{BigFixed, Constant, ConstantCache};

fn sub_test<F: FnOnce()>(name: &str, f: F) {
    println!("Running {}", name);
    f();
}

fn prefix(cache: &ConstantCache, which: Constant, scale: usize, places: usize) -> String {
    cache.get(which, scale).unwrap().to_decimal_string(places)
}

#[test]
fn constants_match_known_digits() {
    let cache = ConstantCache::new();
    let cases: [(Constant, &str); 6] = [
        (Constant::Pi, "3.14159265358979323846"),
        (Constant::E, "2.71828182845904523536"),
        (Constant::Phi, "1.61803398874989484820"),
        (Constant::Ln2, "0.69314718055994530941"),
        (Constant::Ln3, "1.09861228866810969139"),
        (Constant::Ln10, "2.30258509299404568401"),
    ];
    for (which, want) in cases {
        let got = prefix(&cache, which, 128, 20);
        assert_eq!(got, want, "{:?} at scale 128", which);
    }
}

#[test]
fn cache_returns_identical_values() {
    let cache = ConstantCache::new();
    let a = cache.get(Constant::Pi, 96).unwrap();
    let b = cache.get(Constant::Pi, 96).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.scale(), 96);
}

#[test]
fn scales_are_cached_independently() {
    let cache = ConstantCache::new();
    let coarse = cache.get(Constant::E, 16).unwrap();
    let fine = cache.get(Constant::E, 256).unwrap();
    assert_eq!(coarse.scale(), 16);
    assert_eq!(fine.scale(), 256);
    // the coarse value is the fine value truncated
    assert_eq!(fine.rescale(16), coarse);
}

#[test]
fn identities_hold_to_working_precision() {
    let cache = ConstantCache::new();
    let scale = 192;
    let eps = BigFixed::from_f64(2f64.powi(-150), scale).unwrap();

    sub_test("ln 10 - ln 3 - ln 2 = ln(10/6)", || {
        let ln10 = cache.get(Constant::Ln10, scale).unwrap();
        let ln3 = cache.get(Constant::Ln3, scale).unwrap();
        let ln2 = cache.get(Constant::Ln2, scale).unwrap();
        let lhs = ln10.sub(&ln3).sub(&ln2);
        // ln(5/3) = 0.51082562376599068320551409630...
        let want = BigFixed::from_f64(0.5108256237659907, scale).unwrap();
        assert!(lhs.sub(&want).abs() < BigFixed::from_f64(1e-15, scale).unwrap());
    });

    sub_test("phi satisfies phi^2 = phi + 1", || {
        let phi = cache.get(Constant::Phi, scale).unwrap();
        let diff = phi
            .mul(&phi)
            .sub(&phi)
            .sub(&BigFixed::from_i64(1, scale))
            .abs();
        assert!(diff < eps);
    });
}
