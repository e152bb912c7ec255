use log::{debug, warn};

use crate::normalizers::*;
use crate::util::*;

pub const L1_TYPE: &str = "l1";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct L1Stats<T> {
    pub abs_sum: T,
}

/// `x' = x / |sum(x)|`
#[derive(Debug, Clone)]
pub struct L1Normalizer<T: Float> {
    state: FitState<L1Stats<T>>,
}

impl<T: Float> L1Normalizer<T> {
    pub fn new() -> Self {
        Self {
            state: FitState::Unfit,
        }
    }

    pub fn with_abs_sum(abs_sum: T) -> Self {
        Self {
            state: FitState::Fit(L1Stats { abs_sum }),
        }
    }

    pub fn stats(&self) -> Option<L1Stats<T>> {
        self.state.stats()
    }
}

impl<T: Float> Default for L1Normalizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Normalizer for L1Normalizer<T> {
    type Elem = T;

    fn fit_normalize(&mut self, data: &DataVec<T>) -> DataVec<T> {
        let abs_sum = array_helpers::abs_sum(data);

        debug!("[ok] L1Normalizer fit : abs sum {}", as_f64(abs_sum));

        if abs_sum == T::zero() {
            warn!("L1Normalizer fit with zero sum, output is not finite");
        }

        self.state = FitState::Fit(L1Stats { abs_sum });

        l1_normalize_params(data, abs_sum)
    }

    fn normalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => l1_normalize_val(val, s.abs_sum),
        }
    }

    fn denormalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => l1_denormalize_val(val, s.abs_sum),
        }
    }

    fn is_fit(&self) -> bool {
        self.state.is_fit()
    }

    fn normalizer_type(&self) -> &'static str {
        L1_TYPE
    }
}

impl<T: Float> WithParams for L1Normalizer<T> {
    fn cfg(&self) -> Params {
        let mut cfg = Params::new();

        cfg.insert("type".to_owned(), Variant::String(L1_TYPE.to_owned()));

        if let FitState::Fit(s) = self.state {
            cfg.insert("abs_sum".to_owned(), Variant::Float(as_f64(s.abs_sum)));
        }

        cfg
    }

    fn set_cfg(&mut self, args: &Params) {
        if let Some(abs_sum) = param_float(args, "abs_sum") {
            self.state = FitState::Fit(L1Stats { abs_sum });
        }
    }
}
