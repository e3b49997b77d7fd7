pub mod config;
pub mod dataset;

pub use config::DentexConfig;
pub use dataset::DatasetError;
