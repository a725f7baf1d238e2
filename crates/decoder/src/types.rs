use geometry::BoundingBox;
use serde::{Deserialize, Serialize};

/// Most likely class of a query and its sigmoid confidence.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Classification {
    pub class_id: u32,
    /// Probability in (0, 1). Raw logits never end up here.
    pub confidence: f32,
}

impl Classification {
    pub const fn new(class_id: u32, confidence: f32) -> Self {
        Self {
            class_id,
            confidence,
        }
    }
}

/// One decoded object: what it is, where it is, and which query produced it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Detection {
    pub classification: Classification,
    pub bounding: BoundingBox,
    /// 0-based index of the network query slot.
    pub query_index: u32,
}

impl Detection {
    pub const fn new(
        classification: Classification,
        bounding: BoundingBox,
        query_index: u32,
    ) -> Self {
        Self {
            classification,
            bounding,
            query_index,
        }
    }

    pub fn class_id(&self) -> u32 {
        self.classification.class_id
    }

    pub fn confidence(&self) -> f32 {
        self.classification.confidence
    }
}
