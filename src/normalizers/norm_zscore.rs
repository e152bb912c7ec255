use log::{debug, warn};

use crate::normalizers::*;
use crate::util::*;

pub const ZSCORE_TYPE: &str = "zscore";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreStats<T> {
    pub mean: T,
    pub std: T,
}

/// Standard score normalizer.
///
/// `x' = (x - mean) / std` where `std` is the sample standard deviation.
/// Output is unbounded, a fitted vector gets zero mean and unit variance.
/// Fitting needs at least two elements, otherwise `std` is NaN.
#[derive(Debug, Clone)]
pub struct ZScoreNormalizer<T: Float> {
    state: FitState<ZScoreStats<T>>,
}

impl<T: Float> ZScoreNormalizer<T> {
    pub fn new() -> Self {
        Self {
            state: FitState::Unfit,
        }
    }

    pub fn with_mean_std(mean: T, std: T) -> Self {
        Self {
            state: FitState::Fit(ZScoreStats { mean, std }),
        }
    }

    pub fn stats(&self) -> Option<ZScoreStats<T>> {
        self.state.stats()
    }
}

impl<T: Float> Default for ZScoreNormalizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Normalizer for ZScoreNormalizer<T> {
    type Elem = T;

    fn fit_normalize(&mut self, data: &DataVec<T>) -> DataVec<T> {
        let mean = array_helpers::mean(data);
        let std = array_helpers::std(data);

        debug!("[ok] ZScoreNormalizer fit : mean {}, std {}", as_f64(mean), as_f64(std));

        if std == T::zero() || std.is_nan() {
            warn!("ZScoreNormalizer fit with degenerate std, output is not finite");
        }

        self.state = FitState::Fit(ZScoreStats { mean, std });

        zscore_normalize_params(data, mean, std)
    }

    fn normalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => zscore_normalize_val(val, s.mean, s.std),
        }
    }

    fn denormalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => zscore_denormalize_val(val, s.mean, s.std),
        }
    }

    fn is_fit(&self) -> bool {
        self.state.is_fit()
    }

    fn normalizer_type(&self) -> &'static str {
        ZSCORE_TYPE
    }
}

impl<T: Float> WithParams for ZScoreNormalizer<T> {
    fn cfg(&self) -> Params {
        let mut cfg = Params::new();

        cfg.insert("type".to_owned(), Variant::String(ZSCORE_TYPE.to_owned()));

        if let FitState::Fit(s) = self.state {
            cfg.insert("mean".to_owned(), Variant::Float(as_f64(s.mean)));
            cfg.insert("std".to_owned(), Variant::Float(as_f64(s.std)));
        }

        cfg
    }

    fn set_cfg(&mut self, args: &Params) {
        if let (Some(mean), Some(std)) = (param_float(args, "mean"), param_float(args, "std")) {
            self.state = FitState::Fit(ZScoreStats { mean, std });
        }
    }
}
