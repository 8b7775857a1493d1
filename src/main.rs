use std::io::Write;

use fractions::{config, demo};

fn main() {
    // load environment variables from `.env` if present
    let _ = dotenv::dotenv();
    // use INFO log level by default, use RUST_LOG env variable to override it
    let log_env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(log_env)
        .format(|buf, record| {
            let ts = buf.timestamp_seconds();
            writeln!(buf, "[{}] {}: {}", record.level(), ts, record.args())
        })
        .init();

    let path = config::config_path();
    let config = match config::load_config(&path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to parse {path}: {:?}", err);
            panic!("Failed to parse {path}: {}", err);
        }
    };

    log::info!("Running fraction demo");
    let sections = match demo::run(&config) {
        Ok(sections) => sections,
        Err(err) => {
            log::error!("Demo failed: {:?}", err);
            panic!("Demo failed: {}", err);
        }
    };
    for section in sections {
        println!("{section}");
    }
}
