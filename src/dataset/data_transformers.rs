pub mod coco_dataset;
