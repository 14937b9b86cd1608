use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::bouquet::Bouquet;

/// 透過建構子建立過的花朵總數 (整個行程共用)
///
/// Starts at zero and only goes back to zero through [`reset_created_count`].
/// Intended for single-threaded use; the atomic only keeps the test harness sound.
static FLOWERS_CREATED: AtomicUsize = AtomicUsize::new(0);

pub fn created_count() -> usize {
    FLOWERS_CREATED.load(Ordering::SeqCst)
}

pub fn reset_created_count() {
    FLOWERS_CREATED.store(0, Ordering::SeqCst);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerKind {
    Rose,
    Tulip,
    Lily,
}

impl FlowerKind {
    pub fn name(&self) -> &'static str {
        match self {
            FlowerKind::Rose => "Rose",
            FlowerKind::Tulip => "Tulip",
            FlowerKind::Lily => "Lily",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowerRecord {
    pub name: String,
    pub cost: f64,
    pub freshness_level: i32,
    pub stem_length: i32,
    /// 只存在於記憶體，不會被序列化
    #[serde(skip)]
    pub session_tag: i32,
}

impl FlowerRecord {
    pub fn new(name: impl Into<String>, cost: f64, freshness_level: i32, stem_length: i32) -> Self {
        FLOWERS_CREATED.fetch_add(1, Ordering::SeqCst);
        Self {
            name: name.into(),
            cost,
            freshness_level,
            stem_length,
            session_tag: 0,
        }
    }

    pub fn of_kind(kind: FlowerKind, cost: f64, freshness_level: i32, stem_length: i32) -> Self {
        Self::new(kind.name(), cost, freshness_level, stem_length)
    }

    pub fn rose(cost: f64, freshness_level: i32, stem_length: i32) -> Self {
        Self::of_kind(FlowerKind::Rose, cost, freshness_level, stem_length)
    }

    pub fn tulip(cost: f64, freshness_level: i32, stem_length: i32) -> Self {
        Self::of_kind(FlowerKind::Tulip, cost, freshness_level, stem_length)
    }

    pub fn lily(cost: f64, freshness_level: i32, stem_length: i32) -> Self {
        Self::of_kind(FlowerKind::Lily, cost, freshness_level, stem_length)
    }
}

// session_tag 不參與比較
impl PartialEq for FlowerRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.cost == other.cost
            && self.freshness_level == other.freshness_level
            && self.stem_length == other.stem_length
    }
}

impl fmt::Display for FlowerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flower: {}, Cost: {}, Freshness: {}, Stem Length: {}",
            self.name, self.cost, self.freshness_level, self.stem_length
        )
    }
}

/// Job 的 extract 階段輸出
#[derive(Debug, Clone, Default)]
pub struct JobInput {
    pub text: Option<String>,
    pub flowers: Vec<FlowerRecord>,
}

#[derive(Debug, Clone)]
pub struct JobResult {
    pub cleaned_text: Option<String>,
    pub bouquet: Bouquet,
    pub stem_match: Option<FlowerRecord>,
    pub reports: Vec<RenderedReport>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub file_name: String,
    pub contents: String,
}
