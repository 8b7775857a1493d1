use std::{env, fs, io};

use serde::Deserialize;

use crate::fraction::{Fraction, error::Error};

// a numerator/denominator pair as written in the config file,
// canonicalized only when turned into a Fraction
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct Operand {
    pub numerator: i64,
    pub denominator: i64,
}

impl Operand {
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn to_fraction(&self) -> Result<Fraction, Error> {
        Fraction::new(self.numerator, self.denominator)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_left")]
    pub left: Operand,
    #[serde(default = "default_right")]
    pub right: Operand,
    #[serde(default = "default_samples")]
    pub samples: Vec<Operand>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left: default_left(),
            right: default_right(),
            samples: default_samples(),
        }
    }
}

fn default_left() -> Operand {
    Operand::new(1, 2)
}

fn default_right() -> Operand {
    Operand::new(1, 4)
}

// reduction, reduction to an integer and sign normalization
fn default_samples() -> Vec<Operand> {
    vec![Operand::new(5, 10), Operand::new(8, 4), Operand::new(1, -2)]
}

pub const DEFAULT_CONFIG_PATH: &str = "demo.json";
pub const CONFIG_PATH_ENV: &str = "FRACTIONS_CONFIG";

pub fn config_path() -> String {
    match env::var(CONFIG_PATH_ENV).unwrap_or_default().as_str() {
        "" => DEFAULT_CONFIG_PATH.to_string(),
        path => path.to_string(),
    }
}

pub fn load_config(path: &str) -> Result<Config, io::Error> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("Failed to read {path}: {}", err);
            return Ok(Config::default());
        }
    };
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
