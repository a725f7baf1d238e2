use geometry::BoundingBox;
use ndarray::ArrayD;

use crate::errors::DecoderError;
use crate::output::{OutputProcessor, RawOutput};
use crate::types::{Classification, Detection};

pub const DEFAULT_MINIMUM_CONFIDENCE: f32 = 0.5;

const BATCH_INDEX: usize = 0;

/// Decodes RF-DETR style `boxes` + `logits` into [`Detection`]s.
///
/// Each query is handled on its own: argmax over the class logits, sigmoid on
/// the winning logit only, threshold, then box decoding. Output order is query
/// order. No suppression, sorting or deduplication happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionDecoder {
    minimum_confidence: f32,
}

impl Default for DetectionDecoder {
    fn default() -> Self {
        Self {
            minimum_confidence: DEFAULT_MINIMUM_CONFIDENCE,
        }
    }
}

impl DetectionDecoder {
    pub fn new(minimum_confidence: f32) -> Result<Self, DecoderError> {
        let mut decoder = Self::default();
        decoder.set_minimum_confidence(minimum_confidence)?;
        Ok(decoder)
    }

    pub fn minimum_confidence(&self) -> f32 {
        self.minimum_confidence
    }

    /// Set the threshold. Must lie strictly inside (0, 1); on error the
    /// previous value is kept.
    pub fn set_minimum_confidence(&mut self, value: f32) -> Result<(), DecoderError> {
        if !(value > 0.0 && value < 1.0) {
            return Err(DecoderError::InvalidMinimumConfidence(value));
        }
        self.minimum_confidence = value;
        Ok(())
    }

    /// Decode into a freshly allocated vector.
    pub fn decode(&self, output: &RawOutput) -> Result<Vec<Detection>, DecoderError> {
        let mut detections = Vec::new();
        self.decode_into(output, &mut detections)?;
        Ok(detections)
    }

    /// Append decoded detections to `target` and return how many were added.
    ///
    /// Existing entries in `target` are never touched, so the same buffer can
    /// be reused across frames after a `clear()` by the caller. Shapes are
    /// validated before anything is appended.
    #[tracing::instrument(skip(self, output, target), fields(minimum_confidence = self.minimum_confidence))]
    pub fn decode_into(
        &self,
        output: &RawOutput,
        target: &mut Vec<Detection>,
    ) -> Result<usize, DecoderError> {
        let (num_queries, num_classes) = output.validate()?;
        let start_len = target.len();

        for query_index in 0..num_queries {
            let classification = classify(&output.logits, query_index, num_classes);

            // Strict: a confidence equal to the threshold is kept.
            if classification.confidence < self.minimum_confidence {
                tracing::trace!(
                    query_index,
                    class_id = classification.class_id,
                    confidence = classification.confidence,
                    "Query below threshold"
                );
                continue;
            }

            let bounding = decode_box(&output.boxes, query_index);
            target.push(Detection::new(
                classification,
                bounding,
                query_index as u32,
            ));
        }

        let decoded = target.len() - start_len;
        tracing::debug!(num_queries, num_classes, decoded, "Decoded detections");
        Ok(decoded)
    }
}

impl OutputProcessor for DetectionDecoder {
    type Output = Vec<Detection>;

    fn process(&self, output: &RawOutput) -> Result<Self::Output, DecoderError> {
        self.decode(output)
    }
}

/// Argmax over the class logits of one query, then sigmoid of the winner.
///
/// Strict `>` keeps the lowest class id on ties and never lets NaN win, so the
/// confidence is never NaN (all-NaN logits give class 0 with confidence 0).
fn classify(logits: &ArrayD<f32>, query_index: usize, num_classes: usize) -> Classification {
    let mut max_logit = f32::NEG_INFINITY;
    let mut class_id = 0usize;
    for c in 0..num_classes {
        let logit = logits[[BATCH_INDEX, query_index, c]];
        if logit > max_logit {
            max_logit = logit;
            class_id = c;
        }
    }

    Classification::new(class_id as u32, sigmoid(max_logit))
}

/// Read `(cx, cy, w, h)` for one query. No clamping.
fn decode_box(boxes: &ArrayD<f32>, query_index: usize) -> BoundingBox {
    let cx = boxes[[BATCH_INDEX, query_index, 0]];
    let cy = boxes[[BATCH_INDEX, query_index, 1]];
    let w = boxes[[BATCH_INDEX, query_index, 2]];
    let h = boxes[[BATCH_INDEX, query_index, 3]];

    BoundingBox::from_cxcywh(cx, cy, w, h)
}

/// Logistic function, maps any logit to (0, 1).
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
