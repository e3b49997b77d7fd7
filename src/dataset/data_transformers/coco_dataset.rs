mod coco2rcnn;
mod coco_dataset_struct;

pub use coco2rcnn::*;
pub use coco_dataset_struct::*;
