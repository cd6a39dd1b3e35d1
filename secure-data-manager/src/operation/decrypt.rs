/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::sync::Arc;

use tracing::Instrument;

use crate::error;
/// Request type for KMS data decryption
pub use input::{DecryptInput, DecryptInputBuilder};
/// Response type for KMS data decryption
pub use output::{DecryptOutput, DecryptOutputBuilder};

/// Operation struct for in-memory data decryption
#[derive(Clone, Default, Debug)]
pub(crate) struct Decrypt;

impl Decrypt {
    /// Execute a single `Decrypt` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DecryptInput,
    ) -> Result<DecryptOutput, error::Error> {
        let config = &handle.config;
        let ciphertext = input.ciphertext.clone().expect("ciphertext set");

        // The key is discovered from the ciphertext blob unless the caller
        // pinned one explicitly.
        let resp = config
            .kms_client()
            .decrypt()
            .ciphertext_blob(ciphertext)
            .set_key_id(input.key_id().map(str::to_string))
            .set_encryption_context(input.encryption_context().cloned())
            .send()
            .instrument(tracing::info_span!("kms-decrypt"))
            .await?;

        let plaintext = resp
            .plaintext()
            .cloned()
            .ok_or_else(|| error::service_error("decrypt response contained no plaintext"))?;

        tracing::debug!(
            key_id = resp.key_id().unwrap_or_default(),
            plaintext_len = plaintext.as_ref().len(),
            "decrypted data"
        );

        Ok(DecryptOutput::builder()
            .plaintext(plaintext)
            .set_key_id(resp.key_id().map(str::to_string))
            .set_encryption_algorithm(resp.encryption_algorithm().cloned())
            .build())
    }
}
