mod norm_minmax;
mod norm_max;
mod norm_mean;
mod norm_l1;
mod norm_l2;
mod norm_zscore;

mod norm_creator;

pub use norm_minmax::*;
pub use norm_max::*;
pub use norm_mean::*;
pub use norm_l1::*;
pub use norm_l2::*;
pub use norm_zscore::*;
pub use norm_creator::*;

use crate::err::*;
use crate::util::*;

/// Fitted statistics of a normalizer.
///
/// `Unfit` until the first `fit_normalize` (or a pre-seeding constructor),
/// `Fit` afterwards. Every re-fit replaces the statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitState<S> {
    Unfit,
    Fit(S),
}

impl<S> Default for FitState<S> {
    fn default() -> Self {
        FitState::Unfit
    }
}

impl<S: Copy> FitState<S> {
    pub fn stats(&self) -> Option<S> {
        match self {
            FitState::Unfit => None,
            FitState::Fit(stats) => Some(*stats),
        }
    }

    pub fn is_fit(&self) -> bool {
        matches!(self, FitState::Fit(_))
    }
}

pub trait Normalizer: WithParams {
    type Elem: Float;

    /// Computes the statistics of `data`, stores them and returns the normalized copy
    fn fit_normalize(&mut self, data: &DataVec<Self::Elem>) -> DataVec<Self::Elem>;

    /// Forward transform with the fitted statistics, identity when unfit
    fn normalize(&self, val: Self::Elem) -> Self::Elem;

    /// Inverse of `normalize`, identity when unfit
    fn denormalize(&self, val: Self::Elem) -> Self::Elem;

    fn is_fit(&self) -> bool;

    fn normalizer_type(&self) -> &'static str;

    fn normalize_vec(&self, data: &DataVec<Self::Elem>) -> DataVec<Self::Elem> {
        data.mapv(|el| self.normalize(el))
    }

    fn denormalize_vec(&self, data: &DataVec<Self::Elem>) -> DataVec<Self::Elem> {
        data.mapv(|el| self.denormalize(el))
    }
}

pub fn normalizer_from_type<T: Float + 'static>(
    norm_type: &str,
) -> Result<Box<dyn Normalizer<Elem = T>>, CustomError> {
    match norm_type {
        MINMAX_TYPE => Ok(Box::new(MinMaxNormalizer::<T>::new())),
        MAX_TYPE => Ok(Box::new(MaxNormalizer::<T>::new())),
        MEAN_TYPE => Ok(Box::new(MeanNormalizer::<T>::new())),
        L1_TYPE => Ok(Box::new(L1Normalizer::<T>::new())),
        L2_TYPE => Ok(Box::new(L2Normalizer::<T>::new())),
        ZSCORE_TYPE => Ok(Box::new(ZScoreNormalizer::<T>::new())),
        _ => Err(CustomError::WrongArg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn test_fit_state() {
        let state: FitState<f32> = FitState::default();
        assert!(!state.is_fit());
        assert_eq!(state.stats(), None);

        let state = FitState::Fit(1.5f32);
        assert!(state.is_fit());
        assert_eq!(state.stats(), Some(1.5));
    }

    #[test]
    fn test_from_type() {
        for name in ["minmax", "max", "mean", "l1", "l2", "zscore"] {
            let norm = normalizer_from_type::<f64>(name).unwrap();
            assert_eq!(norm.normalizer_type(), name);
            assert!(!norm.is_fit());
        }

        assert!(matches!(
            normalizer_from_type::<f32>("softmax"),
            Err(CustomError::WrongArg)
        ));
    }

    #[test]
    fn test_vec_helpers_use_fitted_stats() {
        let mut norm = normalizer_from_type::<f64>("minmax").unwrap();

        let unfit = norm.normalize_vec(&array![3.0, 4.0]);
        assert_eq!(unfit, array![3.0, 4.0]);

        norm.fit_normalize(&array![0.0, 10.0]);
        let out = norm.normalize_vec(&array![5.0, 20.0]);
        assert_eq!(out, array![0.5, 2.0]);
        assert_eq!(norm.denormalize_vec(&out), array![5.0, 20.0]);
    }
}
