pub mod config;
pub mod errors;
pub mod logging;
pub mod output;
pub mod postprocessing;
pub mod types;

// Re-export commonly used types for convenience
pub use config::DecoderConfig;
pub use errors::DecoderError;
pub use output::{OutputProcessor, RawOutput, load_raw_output};
pub use postprocessing::{DetectionDecoder, sigmoid};
pub use types::{Classification, Detection};
