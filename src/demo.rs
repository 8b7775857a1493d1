use std::fmt;

use crate::{
    config::Config,
    fraction::{Fraction, error::Error},
};

pub struct Line {
    pub label: String,
    pub value: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

pub struct Section {
    pub title: &'static str,
    pub lines: Vec<Line>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, label: String, value: impl ToString) {
        let value = value.to_string();
        log::debug!("{}: {label} = {value}", self.title);
        self.lines.push(Line { label, value });
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", self.title)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

pub const CONSTRUCTION: &str = "Construction and reduction";
pub const ARITHMETIC: &str = "Arithmetic";
pub const IN_PLACE: &str = "In-place addition";
pub const COMPARISON: &str = "Comparison";

// walks through construction, arithmetic, in-place addition and comparisons
// for the configured operands
pub fn run(config: &Config) -> Result<Vec<Section>, Error> {
    let left = config.left.to_fraction()?;
    let right = config.right.to_fraction()?;

    let mut construction = Section::new(CONSTRUCTION);
    construction.push(operand_label(config.left.numerator, config.left.denominator), left);
    construction.push(operand_label(config.right.numerator, config.right.denominator), right);
    let mut samples = Vec::with_capacity(config.samples.len());
    for operand in &config.samples {
        let sample = operand.to_fraction()?;
        construction.push(operand_label(operand.numerator, operand.denominator), sample);
        samples.push(sample);
    }

    let mut arithmetic = Section::new(ARITHMETIC);
    let sum = left.checked_add(right)?;
    arithmetic.push(format!("{left} + {right}"), sum);
    let difference = left.checked_sub(right)?;
    arithmetic.push(format!("{left} - {right}"), difference);
    let product = sum.checked_mul(right)?;
    arithmetic.push(format!("{sum} * {right}"), product);
    let quotient = sum.checked_div(right)?;
    arithmetic.push(format!("{sum} / {right}"), quotient);

    let mut in_place = Section::new(IN_PLACE);
    let mut accumulator = left;
    in_place.push("before".to_string(), accumulator);
    accumulator.checked_add_assign(right)?;
    in_place.push(format!("after += {right}"), accumulator);

    let mut comparison = Section::new(COMPARISON);
    compare(&mut comparison, left, right);
    compare(&mut comparison, right, left);
    for sample in samples {
        compare(&mut comparison, left, sample);
    }

    Ok(vec![construction, arithmetic, in_place, comparison])
}

fn operand_label(numerator: i64, denominator: i64) -> String {
    format!("{numerator}/{denominator}")
}

fn compare(section: &mut Section, a: Fraction, b: Fraction) {
    section.push(format!("{a} == {b}"), a == b);
    section.push(format!("{a} != {b}"), a != b);
    section.push(format!("{a} < {b}"), a < b);
    section.push(format!("{a} > {b}"), a > b);
    section.push(format!("{a} <= {b}"), a <= b);
    section.push(format!("{a} >= {b}"), a >= b);
}
