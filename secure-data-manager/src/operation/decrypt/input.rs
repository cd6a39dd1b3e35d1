/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_smithy_types::error::operation::BuildError;
use aws_smithy_types::Blob;

/// Request type for decrypting a KMS ciphertext blob
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DecryptInput {
    /// Ciphertext blob produced by a KMS encrypt operation.
    pub ciphertext: Option<Blob>,

    /// Optional key to decrypt under. When unset, KMS discovers the key from
    /// the ciphertext blob.
    pub key_id: Option<String>,

    /// Encryption context the ciphertext was bound to at encryption time.
    pub encryption_context: Option<HashMap<String, String>>,
}

impl DecryptInput {
    /// Create a new builder
    pub fn builder() -> DecryptInputBuilder {
        DecryptInputBuilder::default()
    }

    /// Ciphertext blob produced by a KMS encrypt operation.
    pub fn ciphertext(&self) -> Option<&Blob> {
        self.ciphertext.as_ref()
    }

    /// Optional key to decrypt under.
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Encryption context the ciphertext was bound to at encryption time.
    pub fn encryption_context(&self) -> Option<&HashMap<String, String>> {
        self.encryption_context.as_ref()
    }
}

/// Builder for [`DecryptInput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DecryptInputBuilder {
    ciphertext: Option<Blob>,
    key_id: Option<String>,
    encryption_context: Option<HashMap<String, String>>,
}

impl DecryptInputBuilder {
    /// Ciphertext blob produced by a KMS encrypt operation. Required, non-empty.
    pub fn ciphertext(mut self, ciphertext: Blob) -> Self {
        self.ciphertext = Some(ciphertext);
        self
    }

    /// Ciphertext blob produced by a KMS encrypt operation.
    pub fn set_ciphertext(mut self, ciphertext: Option<Blob>) -> Self {
        self.ciphertext = ciphertext;
        self
    }

    /// Key to decrypt under. When unset, KMS discovers the key from the
    /// ciphertext blob.
    pub fn key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Key to decrypt under.
    pub fn set_key_id(mut self, key_id: Option<String>) -> Self {
        self.key_id = key_id;
        self
    }

    /// Adds a key-value pair to the encryption context the ciphertext was
    /// bound to at encryption time.
    pub fn encryption_context(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        let mut context = self.encryption_context.unwrap_or_default();
        context.insert(k.into(), v.into());
        self.encryption_context = Some(context);
        self
    }

    /// Encryption context the ciphertext was bound to at encryption time.
    pub fn set_encryption_context(
        mut self,
        encryption_context: Option<HashMap<String, String>>,
    ) -> Self {
        self.encryption_context = encryption_context;
        self
    }

    /// Consumes the builder and constructs a [`DecryptInput`]
    pub fn build(self) -> Result<DecryptInput, BuildError> {
        match &self.ciphertext {
            None => {
                return Err(BuildError::missing_field(
                    "ciphertext",
                    "ciphertext is required for decryption",
                ))
            }
            Some(blob) if blob.as_ref().is_empty() => {
                return Err(BuildError::invalid_field(
                    "ciphertext",
                    "ciphertext must not be empty",
                ))
            }
            Some(_) => {}
        }

        Ok(DecryptInput {
            ciphertext: self.ciphertext,
            key_id: self.key_id,
            encryption_context: self.encryption_context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_nonempty_ciphertext() {
        DecryptInput::builder().build().expect_err("ciphertext missing");

        DecryptInput::builder()
            .ciphertext(Blob::new(Vec::new()))
            .build()
            .expect_err("ciphertext empty");

        let input = DecryptInput::builder()
            .ciphertext(Blob::new(b"opaque".to_vec()))
            .key_id("alias/some-key")
            .build()
            .unwrap();
        assert_eq!(Some("alias/some-key"), input.key_id());
    }
}
