/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::sync::Arc;

use aws_smithy_types::Blob;
use tracing::Instrument;

use crate::error;
/// Request type for KMS data encryption
pub use input::{EncryptInput, EncryptInputBuilder};
/// Response type for KMS data encryption
pub use output::{EncryptOutput, EncryptOutputBuilder};

/// Operation struct for in-memory data encryption
#[derive(Clone, Default, Debug)]
pub(crate) struct Encrypt;

impl Encrypt {
    /// Execute a single `Encrypt` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: EncryptInput,
    ) -> Result<EncryptOutput, error::Error> {
        let config = &handle.config;
        let plaintext = input.plaintext().expect("plaintext set");

        let resp = config
            .kms_client()
            .encrypt()
            .key_id(config.kms_key_id())
            .plaintext(Blob::new(plaintext.to_vec()))
            .set_encryption_context(input.encryption_context().cloned())
            .send()
            .instrument(tracing::info_span!(
                "kms-encrypt",
                key_id = config.kms_key_id()
            ))
            .await?;

        let ciphertext_blob = resp
            .ciphertext_blob()
            .cloned()
            .ok_or_else(|| error::service_error("encrypt response contained no ciphertext blob"))?;

        tracing::debug!(
            key_id = resp.key_id().unwrap_or_default(),
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext_blob.as_ref().len(),
            "encrypted data"
        );

        Ok(EncryptOutput::builder()
            .ciphertext_blob(ciphertext_blob)
            .set_key_id(resp.key_id().map(str::to_string))
            .set_encryption_algorithm(resp.encryption_algorithm().cloned())
            .build())
    }
}
