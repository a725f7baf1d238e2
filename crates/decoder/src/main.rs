use anyhow::Context;
use decoder::{DecoderConfig, load_raw_output, logging::setup_logging};

fn main() -> anyhow::Result<()> {
    let config = DecoderConfig::from_env()?;

    setup_logging(&config);

    tracing::info!(
        config = ?config,
        "Loaded configuration"
    );

    let path = config
        .raw_output_path
        .as_ref()
        .context("RAW_OUTPUT_PATH must point to a raw output JSON file")?;

    let output = load_raw_output(path)
        .with_context(|| format!("Failed to load raw output from {}", path.display()))?;
    tracing::info!(
        boxes = ?output.boxes.shape(),
        logits = ?output.logits.shape(),
        "Raw output loaded"
    );

    let decoder = config.decoder()?;
    let detections = decoder.decode(&output)?;
    tracing::info!(
        detections = detections.len(),
        queries = output.num_queries(),
        "Decoding finished"
    );

    let stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(stdout, &detections)?;
    println!();

    Ok(())
}
