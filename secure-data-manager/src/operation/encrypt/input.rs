/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_smithy_types::error::operation::BuildError;
use bytes::Bytes;

/// Request type for encrypting in-memory data with KMS
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct EncryptInput {
    /// Data to encrypt. KMS caps plaintext at 4096 bytes.
    pub plaintext: Option<Bytes>,

    /// Encryption context bound to the ciphertext. The same context must be
    /// supplied again to decrypt.
    pub encryption_context: Option<HashMap<String, String>>,
}

impl EncryptInput {
    /// Create a new builder
    pub fn builder() -> EncryptInputBuilder {
        EncryptInputBuilder::default()
    }

    /// Data to encrypt.
    pub fn plaintext(&self) -> Option<&Bytes> {
        self.plaintext.as_ref()
    }

    /// Encryption context bound to the ciphertext.
    pub fn encryption_context(&self) -> Option<&HashMap<String, String>> {
        self.encryption_context.as_ref()
    }
}

/// Builder for [`EncryptInput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct EncryptInputBuilder {
    plaintext: Option<Bytes>,
    encryption_context: Option<HashMap<String, String>>,
}

impl EncryptInputBuilder {
    /// Data to encrypt. Required, non-empty.
    pub fn plaintext(mut self, plaintext: impl Into<Bytes>) -> Self {
        self.plaintext = Some(plaintext.into());
        self
    }

    /// Data to encrypt.
    pub fn set_plaintext(mut self, plaintext: Option<Bytes>) -> Self {
        self.plaintext = plaintext;
        self
    }

    /// Adds a key-value pair to the encryption context bound to the ciphertext.
    pub fn encryption_context(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        let mut context = self.encryption_context.unwrap_or_default();
        context.insert(k.into(), v.into());
        self.encryption_context = Some(context);
        self
    }

    /// Encryption context bound to the ciphertext.
    pub fn set_encryption_context(
        mut self,
        encryption_context: Option<HashMap<String, String>>,
    ) -> Self {
        self.encryption_context = encryption_context;
        self
    }

    /// Consumes the builder and constructs an [`EncryptInput`]
    pub fn build(self) -> Result<EncryptInput, BuildError> {
        match &self.plaintext {
            None => {
                return Err(BuildError::missing_field(
                    "plaintext",
                    "plaintext is required for encryption",
                ))
            }
            // KMS rejects empty plaintext
            Some(data) if data.is_empty() => {
                return Err(BuildError::invalid_field(
                    "plaintext",
                    "plaintext must not be empty",
                ))
            }
            Some(_) => {}
        }

        Ok(EncryptInput {
            plaintext: self.plaintext,
            encryption_context: self.encryption_context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_nonempty_plaintext() {
        EncryptInput::builder().build().expect_err("plaintext missing");

        EncryptInput::builder()
            .plaintext(Bytes::new())
            .build()
            .expect_err("plaintext empty");

        let input = EncryptInput::builder()
            .plaintext("This is sensitive information")
            .build()
            .unwrap();
        assert_eq!(
            b"This is sensitive information".as_slice(),
            input.plaintext().unwrap().as_ref()
        );
    }

    #[test]
    fn test_encryption_context_pairs_accumulate() {
        let input = EncryptInput::builder()
            .plaintext("secret")
            .encryption_context("tenant", "acme")
            .encryption_context("purpose", "billing")
            .build()
            .unwrap();

        let context = input.encryption_context().unwrap();
        assert_eq!(2, context.len());
        assert_eq!("acme", context["tenant"]);
    }
}
