/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::sync::Arc;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::Instrument;

use crate::error;
/// Request type for downloads from Amazon S3
pub use input::{DownloadInput, DownloadInputBuilder};
/// Response type for downloads from Amazon S3
pub use output::{DownloadOutput, DownloadOutputBuilder};

/// Operation struct for single object download
#[derive(Clone, Default, Debug)]
pub(crate) struct Download;

impl Download {
    /// Execute a single `Download` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DownloadInput,
    ) -> Result<DownloadOutput, error::Error> {
        let config = &handle.config;
        let key = input.key().expect("key set");
        let destination = input.destination().expect("destination set");

        let resp = config
            .s3_client()
            .get_object()
            .bucket(config.bucket())
            .key(key)
            .send()
            .instrument(tracing::info_span!(
                "get-object",
                bucket = config.bucket(),
                key
            ))
            .await?;

        let output = DownloadOutput::builder()
            .set_content_length(resp.content_length())
            .set_e_tag(resp.e_tag().map(str::to_string))
            .set_version_id(resp.version_id().map(str::to_string))
            .set_server_side_encryption(resp.server_side_encryption().cloned())
            .set_sse_kms_key_id(resp.ssekms_key_id().map(str::to_string));

        // Object content arrives already decrypted by S3. Stream it to the
        // destination; the file is created (or truncated) before the first chunk.
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }
        let mut dest = fs::File::create(destination).await?;
        let mut body = resp.body;
        let mut bytes_written: u64 = 0;

        while let Some(chunk) = body.try_next().await? {
            dest.write_all(chunk.as_ref()).await?;
            bytes_written += chunk.len() as u64;
        }

        tracing::debug!(
            bucket = config.bucket(),
            key,
            bytes_written,
            "downloaded object"
        );

        Ok(output.set_bytes_written(bytes_written).build())
    }
}
