/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_kms::types::EncryptionAlgorithmSpec;
use aws_smithy_types::Blob;

/// Response fields for decrypting a KMS ciphertext blob
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DecryptOutput {
    /// The decrypted data.
    pub plaintext: Blob,

    /// The ARN of the key that was used to decrypt the ciphertext.
    pub key_id: Option<String>,

    /// The encryption algorithm that was used.
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,
}

impl DecryptOutput {
    /// Create a new builder
    pub fn builder() -> DecryptOutputBuilder {
        DecryptOutputBuilder::default()
    }

    /// The decrypted data.
    pub fn plaintext(&self) -> &Blob {
        &self.plaintext
    }

    /// The ARN of the key that was used to decrypt the ciphertext.
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// The encryption algorithm that was used.
    pub fn encryption_algorithm(&self) -> Option<&EncryptionAlgorithmSpec> {
        self.encryption_algorithm.as_ref()
    }
}

/// Builder for [`DecryptOutput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DecryptOutputBuilder {
    plaintext: Option<Blob>,
    key_id: Option<String>,
    encryption_algorithm: Option<EncryptionAlgorithmSpec>,
}

impl DecryptOutputBuilder {
    /// The decrypted data.
    pub fn plaintext(mut self, plaintext: Blob) -> Self {
        self.plaintext = Some(plaintext);
        self
    }

    /// The ARN of the key that was used to decrypt the ciphertext.
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

    /// Consumes the builder and constructs a [`DecryptOutput`]
    ///
    /// # Panics
    ///
    /// Panics if the plaintext was not set.
    pub fn build(self) -> DecryptOutput {
        DecryptOutput {
            plaintext: self.plaintext.expect("plaintext set"),
            key_id: self.key_id,
            encryption_algorithm: self.encryption_algorithm,
        }
    }
}
