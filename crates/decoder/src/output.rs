use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use crate::errors::DecoderError;

/// Tensors produced by a DETR-style detection head.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawOutput {
    pub boxes: ArrayD<f32>,  // [1, Q, 4] cxcywh (normalized 0-1)
    pub logits: ArrayD<f32>, // [1, Q, C] raw class scores
}

impl RawOutput {
    pub fn new(boxes: ArrayD<f32>, logits: ArrayD<f32>) -> Self {
        Self { boxes, logits }
    }

    /// Check both tensors against `[1, Q, >=4]` / `[1, Q, >=1]`.
    ///
    /// Returns `(queries, classes)` on success.
    pub fn validate(&self) -> Result<(usize, usize), DecoderError> {
        let boxes = self.boxes.shape();
        if boxes.len() != 3 || boxes[0] != 1 || boxes[2] < 4 {
            return Err(DecoderError::shape_mismatch("boxes", "[1, Q, >=4]", boxes));
        }
        let queries = boxes[1];

        let logits = self.logits.shape();
        if logits.len() != 3 || logits[0] != 1 || logits[1] != queries || logits[2] < 1 {
            return Err(DecoderError::shape_mismatch(
                "logits",
                format!("[1, {queries}, >=1]"),
                logits,
            ));
        }

        Ok((queries, logits[2]))
    }

    pub fn num_queries(&self) -> usize {
        self.boxes.shape().get(1).copied().unwrap_or(0)
    }
}

/// Turns a model's raw output into something semantic.
///
/// One implementation per model head layout.
pub trait OutputProcessor {
    type Output;

    fn process(&self, output: &RawOutput) -> Result<Self::Output, DecoderError>;
}

/// Load a [`RawOutput`] saved as JSON using ndarray's serde layout:
/// `{"boxes": {"v": 1, "dim": [...], "data": [...]}, "logits": {...}}`.
pub fn load_raw_output(path: impl AsRef<Path>) -> Result<RawOutput, DecoderError> {
    let file = File::open(path)?;
    let output = serde_json::from_reader(BufReader::new(file))?;
    Ok(output)
}
