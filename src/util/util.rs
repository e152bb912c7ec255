use serde::Deserialize;

use std::collections::HashMap;

use ndarray::Array1;

pub use num_traits::{Float, NumCast};

pub type DataVec<T> = Array1<T>;
pub type Params = HashMap<String, Variant>;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Variant {
    Int(i32),
    Float(f64),
    String(String),
}

impl Variant {
    /// Numeric value of the variant, ints are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Variant::Int(val) => Some(*val as f64),
            Variant::Float(val) => Some(*val),
            Variant::String(_) => None,
        }
    }
}

/// Lossless for f32/f64, NaN for a float type that can't be represented
pub fn as_f64<T: Float>(val: T) -> f64 {
    val.to_f64().unwrap_or(f64::NAN)
}

/// Reads `key` from `params` as a float of type `T`
pub fn param_float<T: Float>(params: &Params, key: &str) -> Option<T> {
    params.get(key)?.as_float().and_then(|val| <T as NumCast>::from(val))
}
