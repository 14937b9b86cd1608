use crate::core::codec;
use crate::domain::model::FlowerRecord;
use crate::domain::ports::Storage;
use crate::utils::error::{BouquetError, Result};

/// 透過 Storage 讀寫平面格式的花朵檔案
pub struct FlowerConnector<S: Storage> {
    storage: S,
}

impl<S: Storage> FlowerConnector<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// 空白或空名稱會讓後續紀錄在讀回時遺失，寫入前就拒絕
    pub async fn save(&self, path: &str, flowers: &[FlowerRecord]) -> Result<()> {
        if let Some(flower) = flowers.iter().find(|f| !codec::is_persistable_name(&f.name)) {
            return Err(BouquetError::ProcessingError {
                message: format!(
                    "flower name '{}' cannot be stored in {} (empty or contains whitespace)",
                    flower.name, path
                ),
            });
        }

        let data = codec::encode(flowers);
        self.storage.write_file(path, data.as_bytes()).await?;
        tracing::debug!("Saved {} flowers to {}", flowers.len(), path);
        Ok(())
    }

    pub async fn load(&self, path: &str) -> Result<Vec<FlowerRecord>> {
        let bytes = self.storage.read_file(path).await?;
        let text = String::from_utf8(bytes).map_err(|e| {
            BouquetError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        let flowers = codec::decode(&text);
        tracing::debug!("Loaded {} flowers from {}", flowers.len(), path);
        Ok(flowers)
    }

    /// 檔案不存在時視為空花束
    pub async fn load_or_default(&self, path: &str) -> Result<Vec<FlowerRecord>> {
        if !self.storage.exists(path).await {
            tracing::info!("📭 {} does not exist yet, starting empty", path);
            return Ok(Vec::new());
        }
        self.load(path).await
    }
}
