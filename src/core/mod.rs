pub mod classifier;
pub mod etl;
pub mod exporter;
pub mod filter;
pub mod loader;
pub mod pipeline;
pub mod ranker;

pub use crate::domain::model::{Lead, RawRecord, Tier, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
