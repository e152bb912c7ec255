use log::{debug, warn};

use crate::normalizers::*;
use crate::util::*;

pub const MINMAX_TYPE: &str = "minmax";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxStats<T> {
    pub min: T,
    pub max: T,
}

/// `x' = (x - min) / (max - min)`, fitted values land in 0..1
#[derive(Debug, Clone)]
pub struct MinMaxNormalizer<T: Float> {
    state: FitState<MinMaxStats<T>>,
}

impl<T: Float> MinMaxNormalizer<T> {
    pub fn new() -> Self {
        Self {
            state: FitState::Unfit,
        }
    }

    /// Normalizer seeded with known bounds, a later fit overwrites them
    pub fn with_min_max(min: T, max: T) -> Self {
        Self {
            state: FitState::Fit(MinMaxStats { min, max }),
        }
    }

    pub fn stats(&self) -> Option<MinMaxStats<T>> {
        self.state.stats()
    }
}

impl<T: Float> Default for MinMaxNormalizer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Normalizer for MinMaxNormalizer<T> {
    type Elem = T;

    fn fit_normalize(&mut self, data: &DataVec<T>) -> DataVec<T> {
        let (min, max) = match array_helpers::min_max(data) {
            Some(bounds) => bounds,
            None => return data.clone(),
        };

        debug!("[ok] MinMaxNormalizer fit : min {}, max {}", as_f64(min), as_f64(max));

        if max == min {
            warn!("MinMaxNormalizer fit on a constant vector, output is not finite");
        }

        self.state = FitState::Fit(MinMaxStats { min, max });

        minmax_normalize_params(data, min, max)
    }

    fn normalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => minmax_normalize_val(val, s.min, s.max),
        }
    }

    fn denormalize(&self, val: T) -> T {
        match self.state {
            FitState::Unfit => val,
            FitState::Fit(s) => minmax_denormalize_val(val, s.min, s.max),
        }
    }

    fn is_fit(&self) -> bool {
        self.state.is_fit()
    }

    fn normalizer_type(&self) -> &'static str {
        MINMAX_TYPE
    }
}

impl<T: Float> WithParams for MinMaxNormalizer<T> {
    fn cfg(&self) -> Params {
        let mut cfg = Params::new();

        cfg.insert("type".to_owned(), Variant::String(MINMAX_TYPE.to_owned()));

        if let FitState::Fit(s) = self.state {
            cfg.insert("min".to_owned(), Variant::Float(as_f64(s.min)));
            cfg.insert("max".to_owned(), Variant::Float(as_f64(s.max)));
        }

        cfg
    }

    fn set_cfg(&mut self, args: &Params) {
        if let (Some(min), Some(max)) = (param_float(args, "min"), param_float(args, "max")) {
            self.state = FitState::Fit(MinMaxStats { min, max });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn test_fit_normalize() {
        let mut norm = MinMaxNormalizer::<f32>::new();
        let out = norm.fit_normalize(&array![1.0, 2.0, 3.0, 4.0, 5.0]);

        assert_eq!(out, array![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(norm.stats(), Some(MinMaxStats { min: 1.0, max: 5.0 }));
    }

    #[test]
    fn test_unfit_passthrough() {
        let norm = MinMaxNormalizer::<f64>::new();

        assert!(!norm.is_fit());
        assert_eq!(norm.normalize(12.5), 12.5);
        assert_eq!(norm.denormalize(-3.0), -3.0);
    }

    #[test]
    fn test_empty_keeps_state() {
        let mut norm = MinMaxNormalizer::<f64>::with_min_max(0.0, 2.0);
        let out = norm.fit_normalize(&DataVec::zeros(0));

        assert_eq!(out.len(), 0);
        assert_eq!(norm.normalize(1.0), 0.5);
    }

    #[test]
    fn test_seeded() {
        let norm = MinMaxNormalizer::with_min_max(10.0f64, 20.0);

        assert_eq!(norm.normalize(15.0), 0.5);
        assert_eq!(norm.denormalize(0.5), 15.0);
        assert_eq!(norm.normalize(30.0), 2.0);
    }

    #[test]
    fn test_refit_overwrites() {
        let mut norm = MinMaxNormalizer::<f64>::new();
        norm.fit_normalize(&array![0.0, 4.0]);
        norm.fit_normalize(&array![-10.0, 10.0]);

        assert_eq!(norm.stats(), Some(MinMaxStats { min: -10.0, max: 10.0 }));
    }

    #[test]
    fn test_cfg() {
        let mut norm = MinMaxNormalizer::<f64>::new();
        assert_eq!(norm.cfg().len(), 1);

        norm.fit_normalize(&array![1.0, 3.0]);
        let cfg = norm.cfg();
        assert_eq!(cfg["min"], Variant::Float(1.0));
        assert_eq!(cfg["max"], Variant::Float(3.0));

        let mut other = MinMaxNormalizer::<f32>::new();
        other.set_cfg(&cfg);
        assert_eq!(other.stats(), Some(MinMaxStats { min: 1.0, max: 3.0 }));
    }
}
