use num::{Float, NumCast};

/// Dot product accumulated in f64.
/// Callers check lengths; extra elements of the longer slice are never read.
/// Empty input yields +0.0.
#[inline]
pub fn dot<N>(a: &[N], b: &[N]) -> f64
where
    N: Float,
{
    a.iter()
        .zip(b.iter())
        .fold(0.0, |acc, (&x, &y)| acc + to_f64(x) * to_f64(y))
}

/// Squared Euclidean norm accumulated in f64
#[inline]
pub fn norm_sq<N>(a: &[N]) -> f64
where
    N: Float,
{
    a.iter().fold(0.0, |acc, &x| {
        let x = to_f64(x);
        acc + x * x
    })
}

#[inline]
pub fn norm<N>(a: &[N]) -> f64
where
    N: Float,
{
    norm_sq(a).sqrt()
}

/// Scale `values` to unit L2 length in place.
/// A zero norm leaves the vector untouched.
///
/// # Returns
/// * `f64` - the norm before scaling
pub fn l2_normalize(values: &mut [f64]) -> f64 {
    let norm = norm(values);
    if norm > 0.0 {
        let inv = 1.0 / norm;
        values.iter_mut().for_each(|v| *v *= inv);
    }
    norm
}

/// Lossless for f32/f64; NaN for anything the float cannot represent.
#[inline]
pub fn to_f64<N: Float>(x: N) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

#[inline]
pub fn from_f64<N: Float>(x: f64) -> N {
    <N as NumCast>::from(x).unwrap_or_else(N::nan)
}
