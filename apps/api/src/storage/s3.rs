use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::info;

use super::filename;
use super::{ResumeStorage, StorageError};

/// Uploads resumes to an S3 (or S3-compatible) bucket and returns the
/// object's public URL as the resume reference.
pub struct S3Storage {
    client: S3Client,
    bucket: String,
    region: String,
}

impl S3Storage {
    pub fn new(client: S3Client, bucket: String, region: String) -> Self {
        Self {
            client,
            bucket,
            region,
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}

#[async_trait]
impl ResumeStorage for S3Storage {
    async fn store(
        &self,
        raw_filename: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<String, StorageError> {
        // Keys carry no timestamp prefix: a repeat upload of the same
        // filename replaces the prior object.
        let key = filename::sanitize(raw_filename);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;

        info!("Uploaded resume to s3://{}/{}", self.bucket, key);
        Ok(self.public_url(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::Region;

    fn storage() -> S3Storage {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .region(Region::new("ap-south-1"))
            .build();
        S3Storage::new(
            S3Client::from_conf(config),
            "acme-resumes".to_string(),
            "ap-south-1".to_string(),
        )
    }

    #[test]
    fn test_public_url_shape() {
        assert_eq!(
            storage().public_url("resume.pdf"),
            "https://acme-resumes.s3.ap-south-1.amazonaws.com/resume.pdf"
        );
    }
}
