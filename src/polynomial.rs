/// Evaluates `c[0] + c[1]·x + … + c[n]·x^n` by Horner's method.
///
/// Coefficients are given in ascending degree. An empty table evaluates to `0.0`.
/// Non-finite inputs propagate as usual for IEEE 754 arithmetic.
///
/// ```rust
/// use eos80_rs::polynomial;
///
/// // 1 + 2x + 3x² at x = 2
/// assert_eq!(polynomial(2.0, &[1.0, 2.0, 3.0]), 17.0);
/// ```
pub fn polynomial(x: f64, coefficients: &[f64]) -> f64 {
    // Seed with the highest coefficient so a constant table never touches x.
    let Some((&highest, lower)) = coefficients.split_last() else {
        return 0.0;
    };
    lower.iter().rev().fold(highest, |acc, &c| acc * x + c)
}

/// Element-wise [`polynomial`] over a slice of abscissae.
pub fn polynomial_each(xs: &[f64], coefficients: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| polynomial(x, coefficients)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power_sum(x: f64, coefficients: &[f64]) -> f64 {
        coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powi(i as i32))
            .sum()
    }

    #[test]
    fn matches_power_sum() {
        let coefs = [999.842594, 6.793952e-2, -9.095290e-3, 1.001685e-4];
        for x in [-3.5, 0.25, 1.0, 7.0, 31.4] {
            let y = polynomial(x, &coefs);
            let expected = power_sum(x, &coefs);
            assert!(
                ((y - expected) / expected).abs() < 1e-12,
                "x={x}: {y} vs {expected}"
            );
        }
    }

    #[test]
    fn constant_table_ignores_x() {
        for x in [-1e6, 0.0, 42.0, f64::INFINITY, f64::NAN] {
            assert_eq!(polynomial(x, &[3.25]), 3.25);
        }
    }

    #[test]
    fn zero_returns_leading_coefficient() {
        assert_eq!(polynomial(0.0, &[-5.72466e-3, 1.0227e-4, -1.6546e-6]), -5.72466e-3);
    }

    #[test]
    fn empty_table_is_zero() {
        assert_eq!(polynomial(12.0, &[]), 0.0);
    }

    #[test]
    fn nan_propagates() {
        assert!(polynomial(f64::NAN, &[1.0, 1.0]).is_nan());
    }

    #[test]
    fn each_keeps_shape() {
        let ys = polynomial_each(&[0.0, 1.0, 2.0], &[1.0, 1.0]);
        assert_eq!(ys, vec![1.0, 2.0, 3.0]);
    }
}
