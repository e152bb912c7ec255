use log::{debug, warn};

use crate::normalizers::*;
use crate::util::*;

pub const L2_TYPE: &str = "l2";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct L2Stats<T> {
    pub norm: T,
}

/// `x' = x / sqrt(sum(x^2))`, the fitted vector gets unit length
#[derive(Debug, Clone)]
pub struct L2Normalizer<T: Float> {
    state: FitState<L2Stats<T>>,
}

impl<T: Float> L2Normalizer<T> {
    pub fn new() -> Self {
        Self {
            state: FitState::Unfit,
        }
    }

    pub fn with_norm(norm: T) -> Self {
        Self {
            state: FitState::Fit(L2Stats { norm }),
        }
    }

    pub fn stats(&self) -> Option<L2Stats<T>> {
        self.state.stats()
    }
}

impl<T: Float> Default for L2Normalizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Normalizer for L2Normalizer<T> {
    type Elem = T;

    fn fit_normalize(&mut self, data: &DataVec<T>) -> DataVec<T> {
        let norm = array_helpers::sqrt_sum_squared(data);

        debug!("[ok] L2Normalizer fit : norm {}", as_f64(norm));

        if norm == T::zero() {
            warn!("L2Normalizer fit on a zero vector, output is not finite");
        }

        self.state = FitState::Fit(L2Stats { norm });

        l2_normalize_params(data, norm)
    }

    fn normalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => l2_normalize_val(val, s.norm),
        }
    }

    fn denormalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => l2_denormalize_val(val, s.norm),
        }
    }

    fn is_fit(&self) -> bool {
        self.state.is_fit()
    }

    fn normalizer_type(&self) -> &'static str {
        L2_TYPE
    }
}

impl<T: Float> WithParams for L2Normalizer<T> {
    fn cfg(&self) -> Params {
        let mut cfg = Params::new();

        cfg.insert("type".to_owned(), Variant::String(L2_TYPE.to_owned()));

        if let FitState::Fit(s) = self.state {
            cfg.insert("norm".to_owned(), Variant::Float(as_f64(s.norm)));
        }

        cfg
    }

    fn set_cfg(&mut self, args: &Params) {
        if let Some(norm) = param_float(args, "norm") {
            self.state = FitState::Fit(L2Stats { norm });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn test_unit_length() {
        let mut norm = L2Normalizer::<f64>::new();
        let out = norm.fit_normalize(&array![3.0, 4.0]);

        assert_eq!(out, array![0.6, 0.8]);
        assert_eq!(norm.stats(), Some(L2Stats { norm: 5.0 }));
        assert!((out.dot(&out) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_seeded() {
        let norm = L2Normalizer::with_norm(2.0f32);

        assert_eq!(norm.normalize(3.0), 1.5);
        assert_eq!(norm.denormalize(1.5), 3.0);
    }

    #[test]
    fn test_zero_vector_not_finite() {
        let mut norm = L2Normalizer::<f32>::new();
        let out = norm.fit_normalize(&array![0.0, 0.0]);

        assert_eq!(norm.stats(), Some(L2Stats { norm: 0.0 }));
        assert!(out.iter().all(|x| x.is_nan()));
        assert_eq!(norm.normalize(1.0), f32::INFINITY);
    }
}
