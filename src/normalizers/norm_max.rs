use log::{debug, warn};

use crate::normalizers::*;
use crate::util::*;

pub const MAX_TYPE: &str = "max";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxStats<T> {
    pub max: T,
}

/// `x' = x / max`
#[derive(Debug, Clone)]
pub struct MaxNormalizer<T: Float> {
    state: FitState<MaxStats<T>>,
}

impl<T: Float> MaxNormalizer<T> {
    pub fn new() -> Self {
        Self {
            state: FitState::Unfit,
        }
    }

    pub fn with_max(max: T) -> Self {
        Self {
            state: FitState::Fit(MaxStats { max }),
        }
    }

    pub fn stats(&self) -> Option<MaxStats<T>> {
        self.state.stats()
    }
}

impl<T: Float> Default for MaxNormalizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Normalizer for MaxNormalizer<T> {
    type Elem = T;

    fn fit_normalize(&mut self, data: &DataVec<T>) -> DataVec<T> {
        let max = match array_helpers::min_max(data) {
            Some((_, max)) => max,
            None => return data.clone(),
        };

        debug!("[ok] MaxNormalizer fit : max {}", as_f64(max));

        if max == T::zero() {
            warn!("MaxNormalizer fit with zero maximum, output is not finite");
        }

        self.state = FitState::Fit(MaxStats { max });

        max_normalize_params(data, max)
    }

    fn normalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => max_normalize_val(val, s.max),
        }
    }

    fn denormalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => max_denormalize_val(val, s.max),
        }
    }

    fn is_fit(&self) -> bool {
        self.state.is_fit()
    }

    fn normalizer_type(&self) -> &'static str {
        MAX_TYPE
    }
}

impl<T: Float> WithParams for MaxNormalizer<T> {
    fn cfg(&self) -> Params {
        let mut cfg = Params::new();

        cfg.insert("type".to_owned(), Variant::String(MAX_TYPE.to_owned()));

        if let FitState::Fit(s) = self.state {
            cfg.insert("max".to_owned(), Variant::Float(as_f64(s.max)));
        }

        cfg
    }

    fn set_cfg(&mut self, args: &Params) {
        if let Some(max) = param_float(args, "max") {
            self.state = FitState::Fit(MaxStats { max });
        }
    }
}
