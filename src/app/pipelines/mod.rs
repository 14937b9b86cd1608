pub mod job_pipeline;

pub use job_pipeline::JobPipeline;
