pub mod bouquet;
pub mod codec;
pub mod connector;
pub mod engine;
pub mod report;
pub mod text;

pub use crate::domain::model::{FlowerRecord, JobInput, JobResult, RenderedReport};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
