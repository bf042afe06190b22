//! Physicists' Hermite polynomials and the functions built on them.
//!
//! All evaluation goes through the three-term recurrence
//! ```text
//! H₀(x) = 1
//! H₁(x) = 2 x
//! Hₙ₊₁(x) = 2 x Hₙ(x) - 2 n Hₙ₋₁(x)
//! ```
//! [`hermite`] evaluates it directly. Direct evaluation overflows quickly for
//! large degree, so [`hermite_function`] runs the equivalent recurrence for the
//! normalized Hermite functions and [`weighted_hermite`] rescales the running
//! values as it goes.

use std::f64::consts::PI;

// rescale the running pair in `weighted_hermite` when it grows past this
const RESCALE_THRESHOLD: f64 = 1e100;

/// Evaluate the physicists' Hermite polynomial *H*<sub>*n*</sub>(*x*).
///
/// ```
/// use qstates::hermite::hermite;
///
/// let x: f64 = 0.7;
/// assert!((hermite(3, x) - (8.0 * x.powi(3) - 12.0 * x)).abs() < 1e-12);
/// ```
pub fn hermite(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => 2.0 * x,
        _ => {
            let mut hprev = 1.0;
            let mut h = 2.0 * x;
            for k in 1..n {
                let hnext = 2.0 * x * h - 2.0 * k as f64 * hprev;
                hprev = h;
                h = hnext;
            }
            h
        }
    }
}

/// Evaluate the normalized Hermite function
/// ```text
/// ψₙ(x) = [2ⁿ n! √π]^(-1/2) Hₙ(x) exp(-x²/2)
/// ```
///
/// Computed through
/// ```text
/// ψ₀(x) = π^(-1/4) exp(-x²/2)
/// ψ₁(x) = √2 x ψ₀(x)
/// ψₖ₊₁(x) = √(2/(k+1)) x ψₖ(x) - √(k/(k+1)) ψₖ₋₁(x)
/// ```
/// which never forms `2ⁿ n!` or *H*<sub>*n*</sub> explicitly.
pub fn hermite_function(n: usize, x: f64) -> f64 {
    let psi0 = PI.powf(-0.25) * (-x * x / 2.0).exp();
    if n == 0 { return psi0; }
    let mut qprev = psi0;
    let mut q = 2.0_f64.sqrt() * x * psi0;
    for k in 1..n {
        let kf = k as f64;
        let qnext
            = (2.0 / (kf + 1.0)).sqrt() * x * q
            - (kf / (kf + 1.0)).sqrt() * qprev;
        qprev = q;
        q = qnext;
    }
    q
}

/// Evaluate `exp(ln_w) * Hₙ(x)` for a weight given by its logarithm.
///
/// The running pair of the recurrence is rescaled whenever it grows past a
/// fixed threshold, and the accumulated scale is folded into the weight at the
/// end. This keeps the product finite wherever the weight can offset the
/// growth of the polynomial, and returns exactly zero at the polynomial's
/// exact zeros rather than `0 * inf`.
pub fn weighted_hermite(n: usize, x: f64, ln_w: f64) -> f64 {
    let mut hprev = 1.0;
    let mut h = if n == 0 { 1.0 } else { 2.0 * x };
    let mut ln_scale = 0.0;
    for k in 1..n {
        let hnext = 2.0 * x * h - 2.0 * k as f64 * hprev;
        hprev = h;
        h = hnext;
        if h.abs() > RESCALE_THRESHOLD {
            h /= RESCALE_THRESHOLD;
            hprev /= RESCALE_THRESHOLD;
            ln_scale += RESCALE_THRESHOLD.ln();
        }
    }
    if h == 0.0 { return 0.0; }
    h * (ln_w + ln_scale).exp()
}
