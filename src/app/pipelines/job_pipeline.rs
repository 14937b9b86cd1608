use crate::config::toml_config::JobConfig;
use crate::core::bouquet::Bouquet;
use crate::core::connector::FlowerConnector;
use crate::core::report;
use crate::core::text::TextProcessor;
use crate::core::{JobInput, JobResult, Pipeline, Storage};
use crate::utils::error::{BouquetError, Result};

/// 依 TOML job 設定執行：清理文字檔、整理花束並輸出報表
pub struct JobPipeline<S: Storage> {
    pub(crate) source: S,
    pub(crate) output: S,
    pub(crate) config: JobConfig,
    processor: TextProcessor,
}

impl<S: Storage> JobPipeline<S> {
    /// `source` resolves the input paths of the job, `output` is rooted at
    /// `load.output_path`.
    pub fn new(source: S, output: S, config: JobConfig) -> Self {
        Self {
            source,
            output,
            config,
            processor: TextProcessor::new(),
        }
    }

    fn clean_text(&self, text: &str) -> String {
        let Some(text_config) = &self.config.text else {
            return text.to_string();
        };

        if text_config.remove.is_empty() {
            return self.processor.remove_substring_from_lines(text, "");
        }

        text_config
            .remove
            .iter()
            .fold(text.to_string(), |acc, target| {
                self.processor.remove_substring_from_lines(&acc, target)
            })
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for JobPipeline<S> {
    async fn extract(&self) -> Result<JobInput> {
        let mut input = JobInput::default();

        if let Some(text_config) = &self.config.text {
            tracing::info!("📄 Reading text from: {}", text_config.input);
            let bytes = self.source.read_file(&text_config.input).await?;
            let text = String::from_utf8(bytes).map_err(|e| {
                BouquetError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            })?;
            input.text = Some(text);
        }

        if let Some(bouquet_config) = &self.config.bouquet {
            tracing::info!("💐 Loading flowers from: {}", bouquet_config.records);
            let connector = FlowerConnector::new(&self.source);
            input.flowers = connector.load(&bouquet_config.records).await?;
        }

        Ok(input)
    }

    async fn transform(&self, input: JobInput) -> Result<JobResult> {
        let cleaned_text = input.text.as_deref().map(|text| self.clean_text(text));

        let mut bouquet = Bouquet::from(input.flowers);
        let mut stem_match = None;
        let mut reports = Vec::new();

        if let Some(bouquet_config) = &self.config.bouquet {
            if bouquet_config.sort_by_freshness() {
                tracing::debug!("Sorting {} flowers by freshness", bouquet.len());
                bouquet.sort_by_freshness_desc();
            }

            if let Some(range) = bouquet_config.stem_range {
                match bouquet.find_by_stem_length(range.min, range.max) {
                    Ok(flower) => {
                        tracing::info!("🔎 Stem match: {}", flower);
                        stem_match = Some(flower.clone());
                    }
                    Err(e @ BouquetError::NotFound { .. }) if bouquet_config.warn_on_not_found() => {
                        tracing::warn!("⚠️ {}", e);
                    }
                    Err(e) => return Err(e),
                }
            }

            reports = report::render_all(&bouquet, &self.config.report_formats()?)?;
        }

        Ok(JobResult {
            cleaned_text,
            bouquet,
            stem_match,
            reports,
        })
    }

    async fn load(&self, result: JobResult) -> Result<String> {
        if let (Some(text), Some(text_config)) = (&result.cleaned_text, &self.config.text) {
            self.output
                .write_file(&text_config.output, text.as_bytes())
                .await?;
            tracing::debug!("Wrote cleaned text to {}", text_config.output);
        }

        for rendered in &result.reports {
            self.output
                .write_file(&rendered.file_name, rendered.contents.as_bytes())
                .await?;
            tracing::debug!("Wrote report {}", rendered.file_name);
        }

        if let Some(flower) = &result.stem_match {
            self.output
                .write_file("match.txt", format!("{}\n", flower).as_bytes())
                .await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
