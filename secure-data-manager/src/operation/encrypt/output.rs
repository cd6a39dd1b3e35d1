/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_kms::types::EncryptionAlgorithmSpec;
use aws_smithy_types::Blob;

/// Response fields for encrypting in-memory data with KMS
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct EncryptOutput {
    /// The encrypted data. Opaque; only KMS can interpret it.
    pub ciphertext_blob: Blob,

    /// The ARN of the key that was used to encrypt the plaintext.
    pub key_id: Option<String>,

    /// The encryption algorithm that was used.
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,
}

impl EncryptOutput {
    /// Create a new builder
    pub fn builder() -> EncryptOutputBuilder {
        EncryptOutputBuilder::default()
    }

    /// The encrypted data. Opaque; only KMS can interpret it.
    pub fn ciphertext_blob(&self) -> &Blob {
        &self.ciphertext_blob
    }

    /// The ARN of the key that was used to encrypt the plaintext.
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// The encryption algorithm that was used.
    pub fn encryption_algorithm(&self) -> Option<&EncryptionAlgorithmSpec> {
        self.encryption_algorithm.as_ref()
    }
}

/// Builder for [`EncryptOutput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct EncryptOutputBuilder {
    ciphertext_blob: Option<Blob>,
    key_id: Option<String>,
    encryption_algorithm: Option<EncryptionAlgorithmSpec>,
}

impl EncryptOutputBuilder {
    /// The encrypted data.
    pub fn ciphertext_blob(mut self, blob: Blob) -> Self {
        self.ciphertext_blob = Some(blob);
        self
    }

    /// The ARN of the key that was used to encrypt the plaintext.
    pub fn set_key_id(mut self, key_id: Option<String>) -> Self {
        self.key_id = key_id;
        self
    }

    /// The encryption algorithm that was used.
    pub fn set_encryption_algorithm(
        mut self,
        algorithm: Option<EncryptionAlgorithmSpec>,
    ) -> Self {
        self.encryption_algorithm = algorithm;
        self
    }

    /// Consumes the builder and constructs an [`EncryptOutput`]
    ///
    /// # Panics
    ///
    /// Panics if the ciphertext blob was not set.
    pub fn build(self) -> EncryptOutput {
        EncryptOutput {
            ciphertext_blob: self.ciphertext_blob.expect("ciphertext blob set"),
            key_id: self.key_id,
            encryption_algorithm: self.encryption_algorithm,
        }
    }
}
