//! Miscellaneous numerical tools: trapezoidal integration and the FFT.

use ndarray::{ self as nd, Ix1, concatenate };
use num_complex::Complex64 as C64;
use num_traits::Float;
use rustfft as fft;
use crate::error::LengthError;

/// Integrate using the trapezoidal rule over evenly spaced samples.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Integrate using the trapezoidal rule over samples taken at the abscissae
/// `x`.
///
/// The abscissae are used in the order given and need not be sorted or evenly
/// spaced; each consecutive pair contributes `(x[i+1] - x[i]) * (y[i] +
/// y[i+1]) / 2`. For arrays in FFT order this includes the segment where the
/// frequencies wrap from positive to negative.
///
/// ```
/// use ndarray as nd;
/// use qstates::utils::trapz_sampled;
///
/// let x = nd::array![0.0, 1.0, 3.0];
/// let y = nd::array![1.0, 1.0, 2.0];
/// assert_eq!(trapz_sampled(&y, &x).unwrap(), 4.0);
/// ```
pub fn trapz_sampled<S, T, A>(
    y: &nd::ArrayBase<S, Ix1>,
    x: &nd::ArrayBase<T, Ix1>,
) -> Result<A, LengthError>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    LengthError::check(y, x)?;
    let two = A::one() + A::one();
    let res: A
        = x.iter().zip(x.iter().skip(1))
        .zip(y.iter().zip(y.iter().skip(1)))
        .map(|((xk, xkp1), (yk, ykp1))| (*xkp1 - *xk) * (*yk + *ykp1) / two)
        .fold(A::zero(), |acc, term| acc + term);
    Ok(res)
}

/// Calculate the norm of a real wavefunction, i.e. the trapezoidal integral of
/// its square.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    trapz(&q.mapv(|qk| qk * qk), dx)
}

/// Generate an array of frequency-space coordinates to accompany a FFT of `n`
/// points for sampling time `dt`.
pub fn fft_freq(n: usize, dt: f64) -> nd::Array1<f64> {
    if n % 2 == 0 {
        let fp: nd::Array1<f64>
            = (0..n / 2)
            .map(|k| k as f64 / (n as f64 * dt))
            .collect();
        let fm: nd::Array1<f64>
            = (1..n / 2 + 1).rev()
            .map(|k| -(k as f64) / (n as f64 * dt))
            .collect();
        concatenate!(nd::Axis(0), fp, fm)
    } else {
        let fp: nd::Array1<f64>
            = (0..(n + 1) / 2)
            .map(|k| k as f64 / (n as f64 * dt))
            .collect();
        let fm: nd::Array1<f64>
            = (1..(n + 1) / 2).rev()
            .map(|k| -(k as f64) / (n as f64 * dt))
            .collect();
        concatenate!(nd::Axis(0), fp, fm)
    }
}

/// Perform the one-dimensional forward FFT of a real-valued signal.
///
/// The transform is unnormalized.
pub fn fft_real<S>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = f64>
{
    let n: usize = x.len();
    let mut f: Vec<C64> = x.iter().copied().map(C64::from).collect();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(n);
    fft_plan.process(&mut f);
    nd::Array1::from(f)
}

/// Perform the one-dimensional forward FFT of a real-valued signal and return
/// the result along with the accompanying array of [frequency-space
/// coordinates][fft_freq].
pub fn do_fft<S>(x: &nd::ArrayBase<S, Ix1>, dt: f64)
    -> (nd::Array1<C64>, nd::Array1<f64>)
where S: nd::Data<Elem = f64>
{
    let n: usize = x.len();
    (fft_real(x), fft_freq(n, dt))
}

/// Return a copy of `x` with indices shifted to map super-Nyquist frequency
/// components to negative frequencies.
pub fn fft_shift<S, A>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Clone,
{
    let n = x.len();
    let (p, m)
        = if n % 2 == 0 {
            x.view().split_at(nd::Axis(0), n / 2)
        } else {
            x.view().split_at(nd::Axis(0), n / 2 + 1)
        };
    concatenate!(nd::Axis(0), m.into_owned(), p.into_owned())
}
