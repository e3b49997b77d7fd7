use anyhow::{Context, Result};
use dentex::dataset::common_structs::record_to_json;
use dentex::dataset::data_transformers::coco_dataset::{
    create_rcnn_annotations, read_annotations_file,
};
use dentex::{DatasetError, DentexConfig};
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
/// Convert the DENTEX annotations of one x-ray into an RCNN training record.
struct Args {
    #[structopt(long, env = "DENTEX_DATA_DIR", parse(from_os_str))]
    /// dataset directory, defaults to $HOME/data/dentex/dentex_detection
    data_dir: Option<PathBuf>,
    #[structopt(long, env = "DENTEX_ANNOTATION_FILE", parse(from_os_str))]
    /// annotation json, relative to the dataset directory unless absolute
    annotation_file: Option<PathBuf>,
    #[structopt(long, short, parse(from_os_str))]
    /// write the record here instead of stdout
    output: Option<PathBuf>,
    #[structopt(parse(from_os_str))]
    /// x-ray image file
    image: PathBuf,
}

impl Args {
    fn config(&self) -> Result<DentexConfig, DatasetError> {
        DentexConfig::resolve(
            self.data_dir.clone(),
            self.annotation_file.clone(),
            env::var_os("HOME").map(PathBuf::from),
        )
    }
}

fn run<W: Write>(args: Args, stdout: W) -> Result<()> {
    let config = args.config()?;
    info!("reading annotations from {}", config.annotation_file.display());

    let annotations = read_annotations_file(&config.annotation_file)
        .with_context(|| "unable to load the annotation file")?;
    let image = &args.image;
    let record = create_rcnn_annotations(&annotations, image)
        .with_context(|| format!("unable to build the record of {}", image.display()))?;
    if record.is_none() {
        info!("{} is not a readable image", image.display());
    }
    let value = record_to_json(record.as_ref())?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("unable to create {}", path.display()))?;
            serde_json::to_writer_pretty(file, &value)?;
        }
        None => {
            let mut stdout = stdout;
            serde_json::to_writer_pretty(&mut stdout, &value)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    run(Args::from_args(), io::stdout())
}
