/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_smithy_types::Blob;

use crate::error::Error;

use super::{DecryptInputBuilder, DecryptOutput};

/// Fluent builder for constructing a KMS data decryption request
#[derive(Debug)]
pub struct DecryptFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DecryptInputBuilder,
}

impl DecryptFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Ciphertext blob produced by a KMS encrypt operation. Required, non-empty.
    pub fn ciphertext(mut self, ciphertext: Blob) -> Self {
        self.inner = self.inner.ciphertext(ciphertext);
        self
    }

    /// Key to decrypt under. When unset, KMS discovers the key from the
    /// ciphertext blob.
    pub fn key_id(mut self, key_id: impl Into<String>) -> Self {
        self.inner = self.inner.key_id(key_id);
        self
    }

    /// Adds a key-value pair to the encryption context the ciphertext was
    /// bound to at encryption time.
    pub fn encryption_context(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.inner = self.inner.encryption_context(k, v);
        self
    }

    /// Decrypt the data and await the service response
    pub async fn send(self) -> Result<DecryptOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::decrypt::Decrypt::orchestrate(self.handle, input).await
    }
}

impl crate::operation::decrypt::DecryptInputBuilder {
    /// Decrypt data with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<DecryptOutput, Error> {
        let mut fluent_builder = client.decrypt();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
