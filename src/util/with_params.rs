use crate::util::*;

/// Exposes the fitted statistics of a normalizer as a flat config map.
pub trait WithParams {
    fn cfg(&self) -> Params {
        Params::new()
    }

    fn set_cfg(&mut self, _args: &Params) {}
}
