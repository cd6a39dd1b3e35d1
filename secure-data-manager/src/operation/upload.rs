/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;
use tracing::Instrument;

use crate::error;
/// Request type for encrypted uploads to Amazon S3
pub use input::{UploadInput, UploadInputBuilder};
/// Response type for encrypted uploads to Amazon S3
pub use output::{UploadOutput, UploadOutputBuilder};

/// Operation struct for encrypted single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `Upload` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: UploadInput,
    ) -> Result<UploadOutput, error::Error> {
        let config = &handle.config;
        let source = input.source().expect("source set");
        let key = input.key().expect("key set");

        let body = ByteStream::from_path(source).await?;

        let resp = config
            .s3_client()
            .put_object()
            .bucket(config.bucket())
            .key(key)
            .body(body)
            .server_side_encryption(config.encryption_mode().as_sse())
            .ssekms_key_id(config.kms_key_id())
            .set_content_type(input.content_type().map(str::to_string))
            .set_metadata(input.metadata().cloned())
            .send()
            .instrument(tracing::info_span!(
                "put-object",
                bucket = config.bucket(),
                key
            ))
            .await?;

        tracing::debug!(
            bucket = config.bucket(),
            key,
            e_tag = resp.e_tag().unwrap_or_default(),
            "uploaded object with server-side encryption"
        );

        Ok(UploadOutput::builder()
            .set_e_tag(resp.e_tag().map(str::to_string))
            .set_expiration(resp.expiration().map(str::to_string))
            .set_version_id(resp.version_id().map(str::to_string))
            .set_server_side_encryption(resp.server_side_encryption().cloned())
            .set_sse_kms_key_id(resp.ssekms_key_id().map(str::to_string))
            .set_bucket_key_enabled(resp.bucket_key_enabled())
            .build())
    }
}
