pub mod config;
pub mod demo;
pub mod fraction;

pub use fraction::{Fraction, error::Error};
