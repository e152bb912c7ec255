use std::error::Error;
use std::fs::File;

use log::debug;

use crate::err::*;
use crate::normalizers::*;
use crate::util::*;

/// Builds a normalizer from a config map.
///
/// `type` picks the variant. When every statistic of that variant is present
/// the normalizer comes back pre-seeded, otherwise it is unfit.
pub fn normalizer_from_cfg<T: Float + 'static>(
    params: &Params,
) -> Result<Box<dyn Normalizer<Elem = T>>, CustomError> {
    let norm_type = match params.get("type") {
        Some(Variant::String(norm_type)) => norm_type,
        Some(_) => return Err(CustomError::InvalidFormat),
        None => return Err(CustomError::MissingParam("type".to_owned())),
    };

    let mut norm = normalizer_from_type::<T>(norm_type)?;
    norm.set_cfg(params);

    debug!("Created {} normalizer, fit : {}", norm.normalizer_type(), norm.is_fit());

    Ok(norm)
}

pub fn normalizer_from_yaml_str<T: Float + 'static>(
    yaml: &str,
) -> Result<Box<dyn Normalizer<Elem = T>>, Box<dyn Error>> {
    let params: Params = serde_yaml::from_str(yaml)?;
    Ok(normalizer_from_cfg(&params)?)
}

pub fn normalizer_from_file<T: Float + 'static>(
    filepath: &str,
) -> Result<Box<dyn Normalizer<Elem = T>>, Box<dyn Error>> {
    let cfg_file = File::open(filepath)?;
    let params: Params = serde_yaml::from_reader(cfg_file)?;

    Ok(normalizer_from_cfg(&params)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_from_cfg_unfit() {
        let mut params = Params::new();
        params.insert("type".to_owned(), Variant::String("l2".to_owned()));

        let norm = normalizer_from_cfg::<f32>(&params).unwrap();
        assert_eq!(norm.normalizer_type(), "l2");
        assert!(!norm.is_fit());
    }

    #[test]
    fn test_from_cfg_errors() {
        let params = Params::new();
        assert!(matches!(
            normalizer_from_cfg::<f64>(&params),
            Err(CustomError::MissingParam(_))
        ));

        let mut params = Params::new();
        params.insert("type".to_owned(), Variant::Int(1));
        assert!(matches!(
            normalizer_from_cfg::<f64>(&params),
            Err(CustomError::InvalidFormat)
        ));

        params.insert("type".to_owned(), Variant::String("median".to_owned()));
        assert!(matches!(
            normalizer_from_cfg::<f64>(&params),
            Err(CustomError::WrongArg)
        ));
    }

    #[test]
    fn test_from_yaml_seeded() {
        let norm = normalizer_from_yaml_str::<f64>("type: zscore\nmean: 3.0\nstd: 2\n").unwrap();

        assert!(norm.is_fit());
        assert_eq!(norm.normalize(7.0), 2.0);
        assert_eq!(norm.denormalize(2.0), 7.0);
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(normalizer_from_yaml_str::<f64>("- just\n- a list\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir()
            .join(format!("nevermind_norm_from_file_{}.yaml", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            file.write_all(b"type: minmax\nmin: -1.0\nmax: 1.0\n").unwrap();
        }

        let norm = normalizer_from_file::<f32>(path.to_str().unwrap()).unwrap();
        assert_eq!(norm.normalizer_type(), "minmax");
        assert_eq!(norm.normalize(0.0), 0.5);

        std::fs::remove_file(&path).unwrap();

        assert!(normalizer_from_file::<f32>(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_cfg_round_trip_through_creator() {
        let mut norm = MeanNormalizer::<f64>::new();
        norm.fit_normalize(&ndarray::array![1.0, 2.0, 3.0, 4.0, 5.0]);

        let other = normalizer_from_cfg::<f64>(&norm.cfg()).unwrap();
        assert_eq!(other.normalize(4.0), norm.normalize(4.0));
    }
}
