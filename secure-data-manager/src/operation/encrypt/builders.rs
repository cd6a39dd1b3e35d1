/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use bytes::Bytes;

use crate::error::Error;

use super::{EncryptInputBuilder, EncryptOutput};

/// Fluent builder for constructing a KMS data encryption request
#[derive(Debug)]
pub struct EncryptFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: EncryptInputBuilder,
}

impl EncryptFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Data to encrypt. Required, non-empty; KMS caps plaintext at 4096 bytes.
    pub fn plaintext(mut self, plaintext: impl Into<Bytes>) -> Self {
        self.inner = self.inner.plaintext(plaintext);
        self
    }

    /// Adds a key-value pair to the encryption context bound to the ciphertext.
    ///
    /// The same context must be supplied again to decrypt.
    pub fn encryption_context(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.inner = self.inner.encryption_context(k, v);
        self
    }

    /// Encrypt the data and await the service response
    pub async fn send(self) -> Result<EncryptOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::encrypt::Encrypt::orchestrate(self.handle, input).await
    }
}

impl crate::operation::encrypt::EncryptInputBuilder {
    /// Encrypt data with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<EncryptOutput, Error> {
        let mut fluent_builder = client.encrypt();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
