use log::info;

#[cfg(feature = "log_log4rs")]
use log::LevelFilter;
#[cfg(feature = "log_log4rs")]
use log4rs::append::console::ConsoleAppender;
#[cfg(feature = "log_log4rs")]
use log4rs::config::{Appender, Config, Root};
#[cfg(feature = "log_log4rs")]
use log4rs::encode::pattern::PatternEncoder;

#[cfg(all(feature = "log_env_logger", not(feature = "log_log4rs")))]
use env_logger::Env;

use ndarray::array;

use nevermind_norm::normalizers::*;
use nevermind_norm::util::*;

#[cfg(feature = "log_log4rs")]
fn init_logger() {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::default()))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(Root::builder().appender("console").build(LevelFilter::Debug));

    match config {
        Ok(config) => {
            if log4rs::init_config(config).is_err() {
                eprintln!("Couldn't initialize logger !!!");
            }
        }
        Err(err) => eprintln!("Couldn't build logger config : {}", err),
    }
}

#[cfg(all(feature = "log_env_logger", not(feature = "log_log4rs")))]
fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
}

#[cfg(not(any(feature = "log_log4rs", feature = "log_env_logger")))]
fn init_logger() {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let data: DataVec<f64> = array![1.0, 2.0, 3.0, 4.0, 5.0];

    for norm_type in ["minmax", "max", "mean", "l1", "l2", "zscore"] {
        let mut norm = normalizer_from_type::<f64>(norm_type)?;
        let out = norm.fit_normalize(&data);

        info!("{:>6} : {}", norm_type, out);
        info!(
            "{:>6} : normalize(10) = {}, denormalize back = {}",
            norm_type,
            norm.normalize(10.0),
            norm.denormalize(norm.normalize(10.0))
        );
    }

    let seeded = normalizer_from_yaml_str::<f32>("type: zscore\nmean: 3.0\nstd: 1.5811388\n")?;
    info!("seeded zscore : {}", seeded.normalize_vec(&array![1.0, 3.0, 5.0]));

    Ok(())
}
