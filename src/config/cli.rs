use crate::core::report::ReportFormat;
use crate::domain::model::{FlowerKind, FlowerRecord};
use crate::utils::error::{BouquetError, Result};
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "bouquet-kit")]
#[command(about = "Flower bouquet records and line-oriented text cleanup")]
pub struct CliConfig {
    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Remove a substring from every line of a text
    Strip {
        #[arg(long, short)]
        target: String,

        /// Input file (stdin when omitted)
        #[arg(long, short)]
        input: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Print the bouquet stored in a records file
    Show {
        #[arg(long, short)]
        records: String,

        /// Sort by freshness, freshest first
        #[arg(long)]
        sort: bool,

        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,
    },

    /// Find the first flower whose stem length lies in [min, max]
    Find {
        #[arg(long, short)]
        records: String,

        #[arg(long, allow_negative_numbers = true)]
        min: i32,

        #[arg(long, allow_negative_numbers = true)]
        max: i32,
    },

    /// Append a flower to a records file
    Add(AddArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[arg(long, short)]
    pub records: String,

    #[arg(long, value_enum, conflicts_with = "name", required_unless_present = "name")]
    pub kind: Option<KindArg>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub cost: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub freshness: i32,

    #[arg(long, allow_negative_numbers = true)]
    pub stem: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Csv,
    Tsv,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Tsv => ReportFormat::Tsv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Rose,
    Tulip,
    Lily,
}

impl From<KindArg> for FlowerKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Rose => FlowerKind::Rose,
            KindArg::Tulip => FlowerKind::Tulip,
            KindArg::Lily => FlowerKind::Lily,
        }
    }
}

impl AddArgs {
    pub fn to_record(&self) -> Result<FlowerRecord> {
        match (&self.kind, &self.name) {
            (Some(kind), _) => Ok(FlowerRecord::of_kind(
                (*kind).into(),
                self.cost,
                self.freshness,
                self.stem,
            )),
            (None, Some(name)) => Ok(FlowerRecord::new(
                name.clone(),
                self.cost,
                self.freshness,
                self.stem,
            )),
            (None, None) => Err(BouquetError::MissingConfigError {
                field: "--kind or --name".to_string(),
            }),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Strip { input, output, .. } => {
                if let Some(path) = input {
                    validation::validate_path("--input", path)?;
                }
                if let Some(path) = output {
                    validation::validate_path("--output", path)?;
                }
            }
            Command::Show { records, .. } => validation::validate_path("--records", records)?,
            Command::Find { records, min, max } => {
                validation::validate_path("--records", records)?;
                validation::validate_ordered_range("--min/--max", *min, *max)?;
            }
            Command::Add(args) => {
                validation::validate_path("--records", &args.records)?;
                if !args.cost.is_finite() {
                    return Err(BouquetError::InvalidConfigValueError {
                        field: "--cost".to_string(),
                        value: args.cost.to_string(),
                        reason: "Cost must be a finite number".to_string(),
                    });
                }
                validation::validate_range("--cost", args.cost, 0.0, f64::MAX)?;
                if let Some(name) = &args.name {
                    // 平面格式以空白分隔欄位，名稱不能含空白
                    validation::validate_non_empty_string("--name", name)?;
                    if name.chars().any(char::is_whitespace) {
                        return Err(BouquetError::InvalidConfigValueError {
                            field: "--name".to_string(),
                            value: name.clone(),
                            reason: "Flower names cannot contain whitespace".to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
