use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::bouquet::Bouquet;
use crate::domain::model::{FlowerRecord, RenderedReport};
use crate::utils::error::{BouquetError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
    Tsv,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 4] = ["text", "json", "csv", "tsv"];

    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Text => "bouquet.txt",
            ReportFormat::Json => "bouquet.json",
            ReportFormat::Csv => "bouquet.csv",
            ReportFormat::Tsv => "bouquet.tsv",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = BouquetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "tsv" => Ok(ReportFormat::Tsv),
            other => Err(BouquetError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BouquetReport {
    pub flowers: Vec<FlowerRecord>,
    pub total_cost: f64,
    pub flower_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl BouquetReport {
    pub fn from_bouquet(bouquet: &Bouquet) -> Self {
        Self {
            flowers: bouquet.flowers().to_vec(),
            total_cost: bouquet.total_cost(),
            flower_count: bouquet.len(),
            generated_at: Utc::now(),
        }
    }
}

pub fn render(bouquet: &Bouquet, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(bouquet.to_string()),
        ReportFormat::Json => {
            let report = BouquetReport::from_bouquet(bouquet);
            Ok(serde_json::to_string_pretty(&report)?)
        }
        ReportFormat::Csv => render_delimited(bouquet, b','),
        ReportFormat::Tsv => render_delimited(bouquet, b'\t'),
    }
}

pub fn render_all(bouquet: &Bouquet, formats: &[ReportFormat]) -> Result<Vec<RenderedReport>> {
    formats
        .iter()
        .map(|format| {
            Ok(RenderedReport {
                file_name: format.file_name().to_string(),
                contents: render(bouquet, *format)?,
            })
        })
        .collect()
}

fn render_delimited(bouquet: &Bouquet, delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["name", "cost", "freshness_level", "stem_length"])?;
    for flower in bouquet {
        writer.write_record([
            flower.name.clone(),
            flower.cost.to_string(),
            flower.freshness_level.to_string(),
            flower.stem_length.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BouquetError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| BouquetError::ProcessingError {
        message: format!("report is not valid UTF-8: {}", e),
    })
}
