use crate::config::DecoderConfig;

pub fn setup_logging(config: &DecoderConfig) {
    common::setup_logging(config.environment);
}
