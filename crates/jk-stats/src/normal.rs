//! Normal distribution primitives built on an error-function approximation.

/// Error function, approximated with the Abramowitz & Stegun 7.1.26
/// rational polynomial. Absolute error stays below 1.5e-7 everywhere.
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    // erf is odd: evaluate on |x| and restore the sign.
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    sign * y
}

/// Cumulative distribution function of a normal with the given mean and
/// standard deviation, evaluated at `x`.
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Probability density function of a normal with the given mean and
/// standard deviation, evaluated at `x`.
pub fn normal_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let two_pi = 2.0 * std::f64::consts::PI;
    let exponent = -(x - mean).powi(2) / (2.0 * std_dev.powi(2));
    (1.0 / (std_dev * two_pi.sqrt())) * exponent.exp()
}
