use log::{debug, warn};

use crate::normalizers::*;
use crate::util::*;

pub const MEAN_TYPE: &str = "mean";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanStats<T> {
    pub min: T,
    pub max: T,
    pub mean: T,
}

/// Mean normalization.
///
/// `x' = (x - mean) / (max - min)`, a fitted vector lands roughly in -0.5..0.5.
/// A constant vector has a zero range and yields NaN.
#[derive(Debug, Clone)]
pub struct MeanNormalizer<T: Float> {
    state: FitState<MeanStats<T>>,
}

impl<T: Float> MeanNormalizer<T> {
    pub fn new() -> Self {
        Self {
            state: FitState::Unfit,
        }
    }

    pub fn with_stats(min: T, max: T, mean: T) -> Self {
        Self {
            state: FitState::Fit(MeanStats { min, max, mean }),
        }
    }

    pub fn stats(&self) -> Option<MeanStats<T>> {
        self.state.stats()
    }
}

impl<T: Float> Default for MeanNormalizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Normalizer for MeanNormalizer<T> {
    type Elem = T;

    fn fit_normalize(&mut self, data: &DataVec<T>) -> DataVec<T> {
        let (min, max) = match array_helpers::min_max(data) {
            Some(bounds) => bounds,
            None => return data.clone(),
        };
        let mean = array_helpers::mean(data);

        debug!(
            "[ok] MeanNormalizer fit : min {}, max {}, mean {}",
            as_f64(min),
            as_f64(max),
            as_f64(mean)
        );

        if max == min {
            warn!("MeanNormalizer fit on a constant vector, output is not finite");
        }

        self.state = FitState::Fit(MeanStats { min, max, mean });

        mean_normalize_params(data, min, max, mean)
    }

    fn normalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => mean_normalize_val(val, s.min, s.max, s.mean),
        }
    }

    fn denormalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => mean_denormalize_val(val, s.min, s.max, s.mean),
        }
    }

    fn is_fit(&self) -> bool {
        self.state.is_fit()
    }

    fn normalizer_type(&self) -> &'static str {
        MEAN_TYPE
    }
}

impl<T: Float> WithParams for MeanNormalizer<T> {
    fn cfg(&self) -> Params {
        let mut cfg = Params::new();

        cfg.insert("type".to_owned(), Variant::String(MEAN_TYPE.to_owned()));

        if let FitState::Fit(s) = self.state {
            cfg.insert("min".to_owned(), Variant::Float(as_f64(s.min)));
            cfg.insert("max".to_owned(), Variant::Float(as_f64(s.max)));
            cfg.insert("mean".to_owned(), Variant::Float(as_f64(s.mean)));
        }

        cfg
    }

    fn set_cfg(&mut self, args: &Params) {
        let min = param_float(args, "min");
        let max = param_float(args, "max");
        let mean = param_float(args, "mean");

        if let (Some(min), Some(max), Some(mean)) = (min, max, mean) {
            self.state = FitState::Fit(MeanStats { min, max, mean });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn test_fit_normalize() {
        let mut norm = MeanNormalizer::<f32>::new();
        let out = norm.fit_normalize(&array![1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(out, array![-0.5, -0.25, 0.0, 0.25, 0.5]);
        assert_eq!(
            norm.stats(),
            Some(MeanStats {
                min: 1.0,
                max: 5.0,
                mean: 3.0
            })
        );
    }

    #[test]
    fn test_round_trip() {
        let mut norm = MeanNormalizer::<f64>::new();
        norm.fit_normalize(&array![-7.5, 0.25, 3.0, 12.0]);

        for w in [-100.0, -7.5, 0.0, 3.0, 1e4] {
            assert!((norm.denormalize(norm.normalize(w)) - w).abs() < 1e-9);
        }
    }

    #[test]
    fn test_partial_cfg_ignored() {
        let mut args = Params::new();
        args.insert("min".to_owned(), Variant::Float(0.0));
        args.insert("max".to_owned(), Variant::Float(1.0));

        let mut norm = MeanNormalizer::<f64>::new();
        norm.set_cfg(&args);
        assert!(!norm.is_fit());

        args.insert("mean".to_owned(), Variant::Float(0.5));
        norm.set_cfg(&args);
        assert_eq!(norm.normalize(1.0), 0.5);
    }

    #[test]
    fn test_empty_keeps_state() {
        let mut norm = MeanNormalizer::with_stats(0.0f64, 4.0, 1.0);
        let out = norm.fit_normalize(&DataVec::zeros(0));

        assert_eq!(out.len(), 0);
        assert_eq!(norm.normalize(3.0), 0.5);

        let mut unfit = MeanNormalizer::<f32>::new();
        unfit.fit_normalize(&DataVec::zeros(0));
        assert!(!unfit.is_fit());
    }

    #[test]
    fn test_constant_vector_not_finite() {
        let mut norm = MeanNormalizer::<f64>::new();
        let out = norm.fit_normalize(&array![2.0, 2.0, 2.0]);

        assert!(out.iter().all(|x| x.is_nan()));
        assert_eq!(norm.normalize(3.0), f64::INFINITY);
    }
}
