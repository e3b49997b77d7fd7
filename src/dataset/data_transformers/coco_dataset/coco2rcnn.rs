use super::coco_dataset_struct::*;
use crate::dataset::common_structs::{BoxMode, RcnnAnnotation, RcnnImageRecord, RCNN_CATEGORY_ID};
use crate::dataset::{is_image, DatasetError};
use itertools::Itertools;
use log::{debug, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Takes the annotation json of a DENTEX split and converts it into a rust struct
pub fn read_annotations_file<P: AsRef<Path>>(filepath: P) -> Result<DentexAnnotations, DatasetError> {
    let filepath = filepath.as_ref();
    let input_file = File::open(filepath).map_err(|source| DatasetError::Io {
        path: filepath.to_owned(),
        source,
    })?;
    let annotations: DentexAnnotations = serde_json::from_reader(BufReader::new(input_file))
        .map_err(|source| DatasetError::Json {
            path: filepath.to_owned(),
            source,
        })?;
    info!(
        "loaded {} images and {} annotations from {}",
        annotations.images.len(),
        annotations.annotations.len(),
        filepath.display()
    );
    Ok(annotations)
}

fn annotation2rcnn(annotation: &Annotation) -> RcnnAnnotation {
    RcnnAnnotation {
        id: annotation.id,
        area: annotation.area.clone(),
        iscrowd: annotation.iscrowd,
        bbox: annotation.bbox.clone(),
        bbox_mode: BoxMode::XywhAbs,
        category_id: RCNN_CATEGORY_ID,
    }
}

/// Builds the RCNN record of `file`, checking it with [is_image].
///
/// See [create_rcnn_annotations_with].
pub fn create_rcnn_annotations<P: AsRef<Path>>(
    annotations: &DentexAnnotations,
    file: P,
) -> Result<Option<RcnnImageRecord>, DatasetError> {
    create_rcnn_annotations_with(annotations, file, |path| is_image(path))
}

/// Builds the RCNN record of `file` from the image entry whose `file_name` is the base name of
/// `file`.
///
/// Returns `Ok(None)` if `is_image` rejects the file and [DatasetError::ImageNotFound] if no image
/// entry has that base name. When several entries share the name the first one is used.
/// The record keeps every key of the image entry except `id`, which becomes `image_id`, and any
/// stale `image_id` or `annotations` keys. Its `file_name` is `file` as given. Its annotations are all boxes pointing at the image, in file
/// order, each with `category_id` 0 and `bbox_mode` XYWH_ABS.
pub fn create_rcnn_annotations_with<P, F>(
    annotations: &DentexAnnotations,
    file: P,
    is_image: F,
) -> Result<Option<RcnnImageRecord>, DatasetError>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    let file = file.as_ref();
    if !is_image(file) {
        debug!("{} is not an image, skipping", file.display());
        return Ok(None);
    }

    let base_name = file.file_name();
    let matches = match base_name.and_then(|name| name.to_str()) {
        Some(file_name) => annotations
            .images
            .iter()
            .filter(|img| img.file_name == file_name)
            .collect_vec(),
        None => vec![],
    };
    let image = match matches.as_slice() {
        [] => {
            return Err(DatasetError::ImageNotFound {
                file_name: base_name
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            })
        }
        [image] => *image,
        [image, ..] => {
            warn!(
                "{} image entries named {}, using the one with id {}",
                matches.len(),
                image.file_name,
                image.id
            );
            *image
        }
    };

    let bboxes: Vec<RcnnAnnotation> = annotations
        .annotations
        .iter()
        .filter(|annotation| annotation.image_id == image.id)
        .map(annotation2rcnn)
        .collect();
    debug!(
        "{} has image_id {} and {} bboxes",
        file.display(),
        image.id,
        bboxes.len()
    );

    // the record's own keys replace any copies the image entry carries
    let mut extra = image.extra.clone();
    extra.remove("image_id");
    extra.remove("annotations");

    Ok(Some(RcnnImageRecord {
        file_name: file.to_owned(),
        image_id: image.id,
        extra,
        annotations: bboxes,
    }))
}
