use crate::domain::model::{JobInput, JobResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

impl<T: Storage> Storage for &T {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        (**self).read_file(path).await
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data).await
    }

    async fn exists(&self, path: &str) -> bool {
        (**self).exists(path).await
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<JobInput>;
    async fn transform(&self, input: JobInput) -> Result<JobResult>;
    async fn load(&self, result: JobResult) -> Result<String>;
}
