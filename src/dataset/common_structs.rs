use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::path::PathBuf;
/// Structs handed to the detection training loop

/// Every box is trained as a single "tooth" class.
pub const RCNN_CATEGORY_ID: i64 = 0;

/// How the four numbers of a bbox are to be read, same codes as Detectron2's BoxMode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoxMode {
    XyxyAbs,
    XywhAbs,
    XyxyRel,
    XywhRel,
    XywhaAbs,
}

impl BoxMode {
    pub fn code(self) -> u8 {
        match self {
            BoxMode::XyxyAbs => 0,
            BoxMode::XywhAbs => 1,
            BoxMode::XyxyRel => 2,
            BoxMode::XywhRel => 3,
            BoxMode::XywhaAbs => 4,
        }
    }
}

/// A single Bounding Box as the RCNN data loader expects it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcnnAnnotation {
    pub id: i64,
    pub area: Number,
    pub iscrowd: i64,
    /// [x, y, width, height] in pixels
    pub bbox: [Number; 4],
    pub bbox_mode: BoxMode,
    pub category_id: i64,
}

/// An image with its full path and Bounding Boxes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RcnnImageRecord {
    pub file_name: PathBuf,
    pub image_id: i64,
    /// Image keys we do not touch (height, width, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub annotations: Vec<RcnnAnnotation>,
}

/// Renders a projection result as json, an invalid image becomes `{}`
pub fn record_to_json(record: Option<&RcnnImageRecord>) -> serde_json::Result<Value> {
    match record {
        Some(record) => serde_json::to_value(record),
        None => Ok(Value::Object(Map::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn box_mode_codes_match_detectron() {
        assert_eq!(BoxMode::XyxyAbs.code(), 0);
        assert_eq!(BoxMode::XywhAbs.code(), 1);
        assert_eq!(BoxMode::XywhaAbs.code(), 4);
        assert_eq!(serde_json::to_value(BoxMode::XywhAbs).unwrap(), json!("XYWH_ABS"));
    }

    #[test]
    fn record_serializes_flat_without_id() {
        let mut extra = Map::new();
        extra.insert("height".to_string(), json!(1316));
        let record = RcnnImageRecord {
            file_name: PathBuf::from("/data/train_12.png"),
            image_id: 12,
            extra,
            annotations: vec![RcnnAnnotation {
                id: 3,
                area: Number::from(50),
                iscrowd: 0,
                bbox: [
                    Number::from(1),
                    Number::from(2),
                    Number::from_f64(5.5).unwrap(),
                    Number::from(10),
                ],
                bbox_mode: BoxMode::XywhAbs,
                category_id: RCNN_CATEGORY_ID,
            }],
        };
        let value = record_to_json(Some(&record)).unwrap();
        assert_eq!(
            value,
            json!({
                "file_name": "/data/train_12.png",
                "image_id": 12,
                "height": 1316,
                "annotations": [{
                    "id": 3,
                    "area": 50,
                    "iscrowd": 0,
                    "bbox": [1, 2, 5.5, 10],
                    "bbox_mode": "XYWH_ABS",
                    "category_id": 0
                }]
            })
        );
        assert!(value.get("id").is_none());
    }

    #[test]
    fn missing_record_is_empty_object() {
        assert_eq!(record_to_json(None).unwrap(), json!({}));
    }
}
