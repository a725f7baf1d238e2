use std::env;
use std::path::PathBuf;

use anyhow::Context;

pub use common::Environment;

use crate::postprocessing::{DEFAULT_MINIMUM_CONFIDENCE, DetectionDecoder};

#[derive(Debug, Clone)]
pub struct DecoderConfig {
    pub environment: Environment,
    pub minimum_confidence: f32,
    pub raw_output_path: Option<PathBuf>,
}

impl DecoderConfig {
    /// Load configuration from environment variables.
    ///
    /// `MIN_CONFIDENCE` is validated here, so a bad threshold fails at startup
    /// rather than on the first decode.
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = Environment::from_env();

        let minimum_confidence = match env::var("MIN_CONFIDENCE") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("MIN_CONFIDENCE is not a number: {raw:?}"))?,
            Err(_) => DEFAULT_MINIMUM_CONFIDENCE,
        };
        DetectionDecoder::new(minimum_confidence).context("Invalid MIN_CONFIDENCE")?;

        let raw_output_path = env::var_os("RAW_OUTPUT_PATH").map(PathBuf::from);

        Ok(Self {
            environment,
            minimum_confidence,
            raw_output_path,
        })
    }

    pub fn decoder(&self) -> anyhow::Result<DetectionDecoder> {
        Ok(DetectionDecoder::new(self.minimum_confidence)?)
    }

    /// Create default configuration for testing
    #[cfg(test)]
    pub fn test_default() -> Self {
        Self {
            environment: Environment::Development,
            minimum_confidence: DEFAULT_MINIMUM_CONFIDENCE,
            raw_output_path: None,
        }
    }
}
