use ndarray::{ArrayBase, Data, Ix1};

use crate::util::array_helpers;
use crate::util::{DataVec, Float};

/// With minmax normalising values will be between 0..1
pub fn minmax_normalize<T, S>(data: &ArrayBase<S, Ix1>) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    match array_helpers::min_max(data) {
        Some((min, max)) => minmax_normalize_params(data, min, max),
        None => data.to_owned(),
    }
}

pub fn minmax_normalize_val<T: Float>(val: T, min: T, max: T) -> T {
    (val - min) / (max - min)
}

pub fn minmax_denormalize_val<T: Float>(val: T, min: T, max: T) -> T {
    val * (max - min) + min
}

pub fn minmax_normalize_params<T, S>(data: &ArrayBase<S, Ix1>, min: T, max: T) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    data.mapv(|el| minmax_normalize_val(el, min, max))
}

/// Divides by the maximum, values are at most 1 for a positive maximum
pub fn max_normalize<T, S>(data: &ArrayBase<S, Ix1>) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    match array_helpers::min_max(data) {
        Some((_, max)) => max_normalize_params(data, max),
        None => data.to_owned(),
    }
}

pub fn max_normalize_val<T: Float>(val: T, max: T) -> T {
    val / max
}

pub fn max_denormalize_val<T: Float>(val: T, max: T) -> T {
    val * max
}

pub fn max_normalize_params<T, S>(data: &ArrayBase<S, Ix1>, max: T) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    data.mapv(|el| max_normalize_val(el, max))
}

/// Centers on the mean and scales by the range, roughly -0.5..0.5
pub fn mean_normalize<T, S>(data: &ArrayBase<S, Ix1>) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    match array_helpers::min_max(data) {
        Some((min, max)) => mean_normalize_params(data, min, max, array_helpers::mean(data)),
        None => data.to_owned(),
    }
}

pub fn mean_normalize_val<T: Float>(val: T, min: T, max: T, mean: T) -> T {
    (val - mean) / (max - min)
}

pub fn mean_denormalize_val<T: Float>(val: T, min: T, max: T, mean: T) -> T {
    val * (max - min) + mean
}

pub fn mean_normalize_params<T, S>(data: &ArrayBase<S, Ix1>, min: T, max: T, mean: T) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    data.mapv(|el| mean_normalize_val(el, min, max, mean))
}

pub fn l1_normalize<T, S>(data: &ArrayBase<S, Ix1>) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    l1_normalize_params(data, array_helpers::abs_sum(data))
}

pub fn l1_normalize_val<T: Float>(val: T, abs_sum: T) -> T {
    val / abs_sum
}

pub fn l1_denormalize_val<T: Float>(val: T, abs_sum: T) -> T {
    val * abs_sum
}

pub fn l1_normalize_params<T, S>(data: &ArrayBase<S, Ix1>, abs_sum: T) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    data.mapv(|el| l1_normalize_val(el, abs_sum))
}

pub fn l2_normalize<T, S>(data: &ArrayBase<S, Ix1>) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    l2_normalize_params(data, array_helpers::sqrt_sum_squared(data))
}

pub fn l2_normalize_val<T: Float>(val: T, norm: T) -> T {
    val / norm
}

pub fn l2_denormalize_val<T: Float>(val: T, norm: T) -> T {
    val * norm
}

pub fn l2_normalize_params<T, S>(data: &ArrayBase<S, Ix1>, norm: T) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    data.mapv(|el| l2_normalize_val(el, norm))
}

/// Standard score, output has zero mean and unit sample variance
pub fn zscore_normalize<T, S>(data: &ArrayBase<S, Ix1>) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    zscore_normalize_params(data, array_helpers::mean(data), array_helpers::std(data))
}

pub fn zscore_normalize_val<T: Float>(val: T, mean: T, std: T) -> T {
    (val - mean) / std
}

pub fn zscore_denormalize_val<T: Float>(val: T, mean: T, std: T) -> T {
    val * std + mean
}

pub fn zscore_normalize_params<T, S>(data: &ArrayBase<S, Ix1>, mean: T, std: T) -> DataVec<T>
where
    T: Float,
    S: Data<Elem = T>,
{
    data.mapv(|el| zscore_normalize_val(el, mean, std))
}
