use async_trait::async_trait;
use panwa_core::{ObjectStorage, ProviderResult};

use crate::client::ProviderClient;
use crate::error::ClientError;

#[async_trait]
impl ObjectStorage for ProviderClient {
    async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
        access_token: &str,
    ) -> ProviderResult<()> {
        let size = bytes.len();
        let resp = self
            .authed(
                self.http
                    .post(self.object_url(bucket, path))
                    .header(reqwest::header::CONTENT_TYPE, content_type)
                    .body(bytes),
                Some(access_token),
            )
            .send()
            .await
            .map_err(ClientError::Http)?;

        Self::check(resp).await?;
        tracing::debug!(bucket, path, size, "object uploaded");
        Ok(())
    }
}
