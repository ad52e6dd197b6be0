use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Probability that a freshly seeded cell is alive, always in (0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "f64")]
pub struct Density(f64);

/// Error for a density outside (0, 1]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DensityError {
    #[error("density must be a number, got {0:?}")]
    NotANumber(String),
    #[error("density must be greater than 0 and at most 1, got {0}")]
    OutOfRange(f64),
}

impl Density {
    pub fn new(p: f64) -> Result<Self, DensityError> {
        // NaN fails both comparisons
        if p > 0.0 && p <= 1.0 {
            Ok(Self(p))
        } else {
            Err(DensityError::OutOfRange(p))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Density {
    /// One cell in five starts alive
    fn default() -> Self {
        Self(0.2)
    }
}

impl TryFrom<f64> for Density {
    type Error = DensityError;

    fn try_from(p: f64) -> Result<Self, Self::Error> {
        Self::new(p)
    }
}

impl FromStr for Density {
    type Err = DensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let p: f64 = s
            .trim()
            .parse()
            .map_err(|_| DensityError::NotANumber(s.to_string()))?;
        Self::new(p)
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved configuration for a Game of Life session
#[derive(Clone, Debug)]
pub struct LifeConfig {
    pub wrap: bool,
    pub density: Density,
    pub time_step: f32,
    pub seed: Option<u64>,
    pub alive_char: char,
    pub dead_char: char,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            wrap: false,
            density: Density::default(),
            time_step: 0.1,
            seed: None,
            alive_char: '•',
            dead_char: ' ',
        }
    }
}

/// Dimensions and length of a headless run
#[derive(Clone, Copy, Debug)]
pub struct PrintConfig {
    pub width: usize,
    pub height: usize,
    pub generations: u64,
}
