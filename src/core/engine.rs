use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct JobEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> JobEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting bouquet job...");

        // Extract
        let input = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} flowers{}",
            input.flowers.len(),
            if input.text.is_some() { " and one text file" } else { "" }
        );

        // Transform
        let result = self.pipeline.transform(input).await?;
        tracing::info!(
            "Transformed bouquet: {} flowers, total cost {}",
            result.bouquet.len(),
            result.bouquet.total_cost()
        );

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bouquet::Bouquet;
    use crate::domain::model::{FlowerRecord, JobInput, JobResult};
    use crate::utils::error::BouquetError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPipeline {
        stages: Mutex<Vec<&'static str>>,
        fail_transform: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for RecordingPipeline {
        async fn extract(&self) -> Result<JobInput> {
            self.stages.lock().unwrap().push("extract");
            Ok(JobInput {
                text: None,
                flowers: vec![FlowerRecord::rose(5.0, 7, 40)],
            })
        }

        async fn transform(&self, input: JobInput) -> Result<JobResult> {
            self.stages.lock().unwrap().push("transform");
            if self.fail_transform {
                return Err(BouquetError::NotFound { min: 0, max: 1 });
            }
            Ok(JobResult {
                cleaned_text: None,
                bouquet: Bouquet::from(input.flowers),
                stem_match: None,
                reports: Vec::new(),
            })
        }

        async fn load(&self, _result: JobResult) -> Result<String> {
            self.stages.lock().unwrap().push("load");
            Ok("./out".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_executes_stages_in_order() {
        let engine = JobEngine::new(RecordingPipeline::default());
        assert_eq!(engine.run().await.unwrap(), "./out");
        assert_eq!(
            *engine.pipeline.stages.lock().unwrap(),
            vec!["extract", "transform", "load"]
        );
    }

    #[tokio::test]
    async fn test_run_stops_on_transform_error() {
        let engine = JobEngine::new(RecordingPipeline {
            fail_transform: true,
            ..Default::default()
        });

        assert!(matches!(
            engine.run().await,
            Err(BouquetError::NotFound { .. })
        ));
        assert_eq!(
            *engine.pipeline.stages.lock().unwrap(),
            vec!["extract", "transform"]
        );
    }
}
