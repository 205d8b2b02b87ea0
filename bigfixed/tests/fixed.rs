use bigfixed::BigFixed;
use bigint::BigInt;

fn sub_test<F: FnOnce()>(name: &str, f: F) {
    println!("Running {}", name);
    f();
}

fn fx(v: f64, scale: usize) -> BigFixed {
    BigFixed::from_f64(v, scale).unwrap()
}

#[test]
fn construction_and_parts() {
    sub_test("from_bigint keeps sign in the flag", || {
        let x = BigFixed::from_bigint(&BigInt::from_i64(-7), 64);
        assert!(x.is_negative());
        assert_eq!(x.int_part(), &BigInt::from_u64(7));
        assert!(x.frac_part().is_zero());
    });
    sub_test("fraction invariant after from_f64", || {
        let x = fx(2.75, 64);
        assert_eq!(x.int_part(), &BigInt::from_u64(2));
        // 0.75 * 2^64 = 3 << 62
        assert_eq!(x.frac_part(), &BigInt::from_u64(3 << 62));
    });
    sub_test("zero is non-negative", || {
        let z = BigFixed::zero(32);
        assert!(z.is_zero());
        assert!(!z.is_negative());
    });
}

#[test]
fn add_sub_round_trip_exact_values() {
    let cases: [(f64, f64); 5] = [
        (1.5, 2.25),
        (-3.125, 0.5),
        (0.0, -7.75),
        (123456.0, -123456.0),
        (-0.0625, -0.0625),
    ];
    for (a, b) in cases {
        let x = fx(a, 64);
        let y = fx(b, 64);
        assert_eq!(x.add(&y).to_f64(), a + b, "{} + {}", a, b);
        assert_eq!(x.sub(&y).to_f64(), a - b, "{} - {}", a, b);
        assert_eq!(x.add(&y).sub(&y), x, "({} + {}) - {}", a, b, b);
    }
}

#[test]
fn mul_matches_exact_dyadic_products() {
    let cases: [(f64, f64, f64); 4] = [
        (1.5, 2.5, 3.75),
        (-0.25, 8.0, -2.0),
        (-1.5, -1.5, 2.25),
        (0.0, 123.456, 0.0),
    ];
    for (a, b, want) in cases {
        assert_eq!(fx(a, 64).mul(&fx(b, 64)).to_f64(), want, "{} * {}", a, b);
    }
}

#[test]
fn mul_keeps_cross_term_precision() {
    // (2^-32 + 1)^2 = 1 + 2^-31 + 2^-64; at scale 64 all three terms fit.
    let x = BigFixed::from_i64(1, 64).add(&fx(2f64.powi(-32), 64));
    let sq = x.mul(&x);
    let want = BigFixed::from_i64(1, 64)
        .add(&fx(2f64.powi(-31), 64))
        .add(&fx(2f64.powi(-64), 64));
    assert_eq!(sq, want);
}

#[test]
fn div_truncates_toward_zero() {
    let q = fx(1.0, 64).div(&fx(3.0, 64)).unwrap();
    // 1/3 truncated: q * 3 <= 1 < (q + ulp) * 3
    let three = fx(3.0, 64);
    assert!(q.mul(&three) <= fx(1.0, 64));
    let ulp = fx(2f64.powi(-64), 64);
    assert!(q.add(&ulp).mul(&three) > fx(1.0, 64));

    let exact = fx(-7.5, 64).div(&fx(2.5, 64)).unwrap();
    assert_eq!(exact.to_f64(), -3.0);
}

#[test]
fn div_by_zero_is_an_error() {
    assert!(fx(1.0, 32).div(&BigFixed::zero(32)).is_err());
    assert!(fx(1.0, 32).div_u32(0).is_err());
}

#[test]
fn mixed_scale_operands_use_the_larger_scale() {
    let a = fx(1.5, 32);
    let b = fx(0.25, 96);
    let sum = a.add(&b);
    assert_eq!(sum.scale(), 96);
    assert_eq!(sum.to_f64(), 1.75);
    assert_eq!(a.mul(&b).to_f64(), 0.375);
    assert_eq!(a, fx(1.5, 96), "comparison crosses scales");
}

#[test]
fn rescale_grow_is_exact_shrink_truncates() {
    let x = fx(5.0625, 32);
    assert_eq!(x.rescale(128).to_f64(), 5.0625);
    // scale 2 keeps only quarters: 5.0625 -> 5.0
    assert_eq!(x.rescale(2).to_f64(), 5.0);
}

#[test]
fn rounding_family() {
    let cases: [(f64, i64, i64, i64, i64); 6] = [
        // value, floor, ceil, trunc, round
        (2.5, 2, 3, 2, 3),
        (-2.5, -3, -2, -2, -3),
        (2.25, 2, 3, 2, 2),
        (-2.75, -3, -2, -2, -3),
        (4.0, 4, 4, 4, 4),
        (-4.0, -4, -4, -4, -4),
    ];
    for (v, fl, ce, tr, ro) in cases {
        let x = fx(v, 64);
        assert_eq!(x.floor(), BigInt::from_i64(fl), "floor({})", v);
        assert_eq!(x.ceil(), BigInt::from_i64(ce), "ceil({})", v);
        assert_eq!(x.trunc(), BigInt::from_i64(tr), "trunc({})", v);
        assert_eq!(x.round(), BigInt::from_i64(ro), "round({})", v);
    }
}

#[test]
fn frac_keeps_sign_and_drops_integer() {
    let x = fx(-3.25, 64);
    let f = x.frac();
    assert_eq!(f.to_f64(), -0.25);
    assert!(fx(7.0, 64).frac().is_zero());
}

#[test]
fn shifts_scale_the_value() {
    let x = fx(1.25, 64);
    assert_eq!(x.lshift(3).to_f64(), 10.0);
    assert_eq!(x.rshift(2).to_f64(), 0.3125);
}

#[test]
fn negation_and_abs() {
    let x = fx(-6.5, 32);
    assert_eq!(x.abs().to_f64(), 6.5);
    assert_eq!(x.neg().to_f64(), 6.5);
    assert_eq!(x.neg().neg(), x);
    assert!(!BigFixed::zero(32).neg().is_negative());
}

#[test]
fn decimal_rendering() {
    assert_eq!(fx(2.5, 64).to_decimal_string(4), "2.5000");
    assert_eq!(fx(-0.125, 64).to_decimal_string(3), "-0.125");
    assert_eq!(fx(42.0, 64).to_decimal_string(0), "42");
    // 1/3 at scale 64 truncated to six places
    let third = fx(1.0, 64).div(&fx(3.0, 64)).unwrap();
    assert_eq!(third.to_decimal_string(6), "0.333333");
}

#[test]
fn f64_round_trips() {
    for v in [0.0, 1.0, -1.0, 0.5, -2.75, 1048576.0, 3.141592653589793, -1e-10] {
        let x = fx(v, 128);
        assert_eq!(x.to_f64(), v, "round trip {}", v);
    }
    assert!(BigFixed::from_f64(f64::INFINITY, 64).is_err());
    assert!(BigFixed::from_f64(f64::NAN, 64).is_err());
}

#[test]
fn ordering_is_by_value() {
    assert!(fx(-1.0, 64) < fx(-0.5, 64));
    assert!(fx(-0.5, 64) < BigFixed::zero(64));
    assert!(BigFixed::zero(64) < fx(0.25, 64));
    assert!(fx(1.0, 32) < fx(1.0000001, 64));
}

#[test]
fn sqrt_and_nth_root() {
    sub_test("sqrt of perfect square", || {
        assert_eq!(fx(6.25, 64).sqrt().unwrap().to_f64(), 2.5);
    });
    sub_test("sqrt(2) squared stays just below 2", || {
        let r = fx(2.0, 128).sqrt().unwrap();
        let sq = r.mul(&r);
        assert!(sq <= fx(2.0, 128));
        assert!(sq.to_f64() > 1.9999999999);
    });
    sub_test("cube root", || {
        assert_eq!(fx(15.625, 64).nth_root(3).unwrap().to_f64(), 2.5);
    });
    sub_test("negative input rejected", || {
        assert!(fx(-1.0, 64).sqrt().is_err());
        assert!(fx(-8.0, 64).nth_root(3).is_err());
    });
    sub_test("zeroth root rejected", || {
        assert!(fx(2.0, 64).nth_root(0).is_err());
    });
}
