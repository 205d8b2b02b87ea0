use bigint::BigInt;
use numtheory::{crt, euler_totient, ext_gcd, mod_exp, mod_inverse, Error};

fn big(n: u64) -> BigInt {
    BigInt::from_u64(n)
}

#[test]
fn mod_exp_small_values() {
    // 3^4 mod 7 = 81 mod 7 = 4
    assert_eq!(mod_exp(&big(3), &big(4), &big(7)).unwrap(), big(4));
    // zero exponent returns 1 mod m
    assert_eq!(mod_exp(&big(12345), &BigInt::zero(), &big(97)).unwrap(), big(1));
    assert_eq!(mod_exp(&big(12345), &BigInt::zero(), &big(1)).unwrap(), BigInt::zero());
    // 2^10 mod 1000 = 24
    assert_eq!(mod_exp(&big(2), &big(10), &big(1000)).unwrap(), big(24));
}

#[test]
fn mod_exp_rejects_bad_moduli() {
    assert_eq!(
        mod_exp(&big(2), &big(3), &BigInt::zero()),
        Err(Error::NonPositiveModulus)
    );
    assert_eq!(
        mod_exp(&big(2), &big(3), &BigInt::from_i64(-5)),
        Err(Error::NonPositiveModulus)
    );
    assert_eq!(
        mod_exp(&big(2), &BigInt::from_i64(-1), &big(7)),
        Err(Error::NegativeInput)
    );
}

#[test]
fn mod_exp_negative_base_is_reduced_first() {
    // (-2)^3 mod 7 = -8 mod 7 = 6
    assert_eq!(mod_exp(&BigInt::from_i64(-2), &big(3), &big(7)).unwrap(), big(6));
}

#[test]
fn ext_gcd_produces_bezout_coefficients() {
    let cases: [(i64, i64); 6] = [(240, 46), (46, 240), (17, 5), (-240, 46), (240, -46), (0, 5)];
    for (a, b) in cases {
        let (a, b) = (BigInt::from_i64(a), BigInt::from_i64(b));
        let (g, x, y) = ext_gcd(&a, &b).unwrap();
        assert!(!g.is_negative());
        assert_eq!(a.mul(&x).add(&b.mul(&y)), g, "a*x + b*y = g for {} {}", a, b);
    }
}

#[test]
fn mod_inverse_round_trips() {
    let m = big(65537);
    let a = big(8);
    let inv = mod_inverse(&a, &m).unwrap().expect("gcd(8, 65537) = 1");
    let (_, r) = a.mul(&inv).div_mod(&m).unwrap();
    assert_eq!(r, BigInt::one());
}

#[test]
fn mod_inverse_reports_no_inverse() {
    // gcd(6, 9) = 3, no inverse exists; this is a definite answer.
    assert_eq!(mod_inverse(&big(6), &big(9)).unwrap(), None);
}

#[test]
fn crt_combines_coprime_congruences() {
    // x = 2 mod 3, x = 3 mod 5, x = 2 mod 7 -> x = 23 mod 105
    let r = [big(2), big(3), big(2)];
    let m = [big(3), big(5), big(7)];
    assert_eq!(crt(&r, &m).unwrap(), Some(big(23)));
}

#[test]
fn crt_detects_non_coprime_moduli() {
    let r = [big(1), big(2)];
    let m = [big(4), big(6)];
    assert_eq!(crt(&r, &m).unwrap(), None);
}

#[test]
fn crt_rejects_mismatched_lengths() {
    assert_eq!(
        crt(&[big(1)], &[big(3), big(5)]),
        Err(Error::MismatchedCrtInput)
    );
    assert_eq!(crt(&[], &[]), Err(Error::MismatchedCrtInput));
}

#[test]
fn totient_known_values() {
    let cases: [(u64, u64); 8] = [
        (1, 1),
        (2, 1),
        (9, 6),
        (10, 4),
        (12, 4),
        (97, 96),
        (100, 40),
        (65537, 65536),
    ];
    for (n, phi) in cases {
        assert_eq!(euler_totient(&big(n)).unwrap(), big(phi), "phi({})", n);
    }
}
