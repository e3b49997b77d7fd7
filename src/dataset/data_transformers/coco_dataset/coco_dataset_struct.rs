use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// The parts of a DENTEX annotation json we read, other top-level keys are ignored
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DentexAnnotations {
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    /// Base name only, no directory
    pub file_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `area` and `bbox` keep the numbers exactly as written in the json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: i64,
    pub image_id: i64,
    pub area: Number,
    pub iscrowd: i64,
    pub bbox: [Number; 4],
    /// category_id_1, category_id_2, segmentation, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
