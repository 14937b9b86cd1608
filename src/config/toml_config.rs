use crate::core::report::ReportFormat;
use crate::utils::error::{BouquetError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub job: JobInfo,
    pub text: Option<TextConfig>,
    pub bouquet: Option<BouquetConfig>,
    pub load: LoadConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInfo {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub remove: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BouquetConfig {
    pub records: String,
    pub sort_by_freshness: Option<bool>,
    pub stem_range: Option<StemRange>,
    pub on_not_found: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemRange {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl BouquetConfig {
    pub fn sort_by_freshness(&self) -> bool {
        self.sort_by_freshness.unwrap_or(false)
    }

    /// 找不到符合莖長的花時是否只發出警告 (預設為失敗)
    pub fn warn_on_not_found(&self) -> bool {
        self.on_not_found.as_deref() == Some("warn")
    }
}

impl JobConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| BouquetError::ConfigError {
            message: format!("cannot read job file '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BouquetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FLOWER_DIR})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("job.name", &self.job.name)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;

        if self.text.is_none() && self.bouquet.is_none() {
            return Err(BouquetError::MissingConfigError {
                field: "text or bouquet".to_string(),
            });
        }

        if let Some(text) = &self.text {
            validation::validate_path("text.input", &text.input)?;
            validation::validate_path("text.output", &text.output)?;
        }

        if let Some(bouquet) = &self.bouquet {
            validation::validate_path("bouquet.records", &bouquet.records)?;
            if let Some(range) = bouquet.stem_range {
                validation::validate_ordered_range("bouquet.stem_range", range.min, range.max)?;
            }
            if let Some(policy) = &bouquet.on_not_found {
                validation::validate_one_of("bouquet.on_not_found", policy, &["fail", "warn"])?;
            }
        }

        for format in &self.load.output_formats {
            validation::validate_one_of("load.output_formats", format, &ReportFormat::NAMES)?;
        }

        if let Some(logging) = &self.logging {
            if let Some(format) = &logging.format {
                validation::validate_one_of("logging.format", format, &["compact", "json"])?;
            }
            if let Some(level) = &logging.level {
                validation::validate_one_of(
                    "logging.level",
                    level,
                    &["trace", "debug", "info", "warn", "error"],
                )?;
            }
        }

        Ok(())
    }

    /// 設定檔所在目錄；相對路徑都以此為準
    pub fn base_dir_of<P: AsRef<Path>>(job_file: P) -> PathBuf {
        job_file
            .as_ref()
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Rewrites `load.output_path` relative to `base_dir` and returns it.
    pub fn rebase_output_path(&mut self, base_dir: &Path) -> &str {
        self.load.output_path = base_dir
            .join(&self.load.output_path)
            .to_string_lossy()
            .into_owned();
        &self.load.output_path
    }

    pub fn output_path(&self) -> &str {
        &self.load.output_path
    }

    pub fn report_formats(&self) -> Result<Vec<ReportFormat>> {
        self.load.output_formats.iter().map(|f| f.parse()).collect()
    }

    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|f| f == "json")
            .unwrap_or(false)
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
