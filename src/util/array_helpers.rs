use ndarray::{ArrayBase, Data, Dimension};

use crate::util::{Float, NumCast};

/// Minimum and maximum of `arr` in one pass.
///
/// Elements are taken in pairs: the pair is ordered first, then only the
/// smaller one is checked against the running minimum and the larger one
/// against the running maximum. With an odd length the first element seeds
/// both and is skipped by the pair loop.
///
/// Returns `None` for an empty array.
pub fn min_max<T, S, D>(arr: &ArrayBase<S, D>) -> Option<(T, T)>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    let first = *arr.iter().next()?;
    let (mut min, mut max) = (first, first);

    let mut it = arr.iter().skip(arr.len() % 2);

    while let (Some(&a), Some(&b)) = (it.next(), it.next()) {
        let (lo, hi) = if a > b { (b, a) } else { (a, b) };

        if hi > max {
            max = hi;
        }
        if lo < min {
            min = lo;
        }
    }

    Some((min, max))
}

/// Arithmetic mean, NaN for an empty array
pub fn mean<T, S, D>(arr: &ArrayBase<S, D>) -> T
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    let (sum, count) = sum_count(arr);
    sum / count
}

/// Sample standard deviation (divides by `n - 1`).
///
/// NaN when the array holds less than two elements.
pub fn std<T, S, D>(arr: &ArrayBase<S, D>) -> T
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    let (sum, count) = sum_count(arr);
    let avg = sum / count;

    let sq_diff = arr
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - avg).powi(2));

    (sq_diff / (count - T::one())).sqrt()
}

/// `|sum(x)|`, the sign is stripped after summing
pub fn abs_sum<T, S, D>(arr: &ArrayBase<S, D>) -> T
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    sum_count(arr).0.abs()
}

/// Euclidean norm, `sqrt(sum(x^2))`
pub fn sqrt_sum_squared<T, S, D>(arr: &ArrayBase<S, D>) -> T
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    arr.iter()
        .fold(T::zero(), |acc, &x| acc + x * x)
        .sqrt()
}

fn sum_count<T, S, D>(arr: &ArrayBase<S, D>) -> (T, T)
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    let sum = arr.iter().fold(T::zero(), |acc, &x| acc + x);
    (sum, len_as_float(arr.len()))
}

/// Element count as `T`, rounded to the nearest representable value
fn len_as_float<T: Float>(len: usize) -> T {
    <T as NumCast>::from(len).unwrap_or_else(T::nan)
}
