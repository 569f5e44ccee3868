//! Compute x^n for a float base and signed integer exponent.
//!
//! The exponent widens to i64 before negation: `-i32::MIN` does not exist in
//! i32, and the widening makes the absolute value safe for the full input
//! range. Negative exponents invert the positive-power result at the end.

/// Naive repeated multiplication. O(|n|); too slow past ~1e9 but trivially
/// correct, so it anchors the tests for the fast version.
pub fn pow_simple(x: f64, n: i32) -> f64 {
    let m = (n as i64).unsigned_abs();

    let mut ans = 1.0;
    for _ in 0..m {
        ans *= x;
    }

    if n < 0 {
        1.0 / ans
    } else {
        ans
    }
}

/// Binary exponentiation, O(log |n|).
///
/// Peel one factor off odd exponents; square the base and halve even ones:
/// `x^n = x * x^(n-1)` and `x^n = (x*x)^(n/2)`.
pub fn fast_pow(x: f64, n: i32) -> f64 {
    let mut power = (n as i64).unsigned_abs();
    let mut base = x;
    let mut ans = 1.0;

    while power > 0 {
        if power & 1 == 1 {
            ans *= base;
            power -= 1;
        } else {
            base *= base;
            power /= 2;
        }
    }

    if n < 0 {
        1.0 / ans
    } else {
        ans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn negative_exponent() {
        assert_close(fast_pow(2.0, -3), 0.125);
        assert_close(pow_simple(2.0, -3), 0.125);
    }

    #[test]
    fn zero_exponent_is_one() {
        assert_close(fast_pow(7.5, 0), 1.0);
        assert_close(fast_pow(0.0, 0), 1.0);
    }

    #[test]
    fn positive_powers() {
        assert_close(fast_pow(2.0, 10), 1024.0);
        assert_close(fast_pow(2.1, 3), 9.261);
    }

    #[test]
    fn agrees_with_naive_loop() {
        for n in -20..=20 {
            assert_close(fast_pow(1.3, n), pow_simple(1.3, n));
        }
    }

    #[test]
    fn minimum_exponent_does_not_panic() {
        // |i32::MIN| overflows i32; the widened exponent must absorb it.
        let result = fast_pow(1.0, i32::MIN);
        assert_close(result, 1.0);
    }

    #[test]
    fn fractional_base_large_exponent() {
        // 0.5^40 via squaring only: exact in binary floating point.
        assert_close(fast_pow(0.5, 40), 0.5f64.powi(40));
    }
}
