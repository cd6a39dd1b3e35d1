/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::EncryptionMode;

pub(crate) mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    bucket: String,
    kms_key_id: String,
    encryption_mode: EncryptionMode,
    s3_client: aws_sdk_s3::client::Client,
    kms_client: aws_sdk_kms::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the bucket that objects are uploaded to and downloaded from.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns the KMS key ID, ARN, or alias used for SSE-KMS uploads and
    /// direct encryption.
    pub fn kms_key_id(&self) -> &str {
        &self.kms_key_id
    }

    /// Returns the server-side encryption mode requested for uploads.
    pub fn encryption_mode(&self) -> &EncryptionMode {
        &self.encryption_mode
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn s3_client(&self) -> &aws_sdk_s3::Client {
        &self.s3_client
    }

    /// The AWS KMS client instance that will be used to send requests to KMS.
    pub fn kms_client(&self) -> &aws_sdk_kms::Client {
        &self.kms_client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    bucket: Option<String>,
    kms_key_id: Option<String>,
    encryption_mode: EncryptionMode,
    s3_client: Option<aws_sdk_s3::Client>,
    kms_client: Option<aws_sdk_kms::Client>,
}

impl Builder {
    /// Set the bucket that objects are uploaded to and downloaded from.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Set the KMS key ID, ARN, or alias used for SSE-KMS uploads and direct
    /// encryption.
    ///
    /// Decryption does not require the key: KMS discovers the key from the
    /// ciphertext blob, and S3 decrypts downloads transparently.
    pub fn kms_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(key_id.into());
        self
    }

    /// Set the server-side encryption mode requested for uploads.
    ///
    /// Default is [EncryptionMode::KmsManaged].
    pub fn encryption_mode(mut self, mode: EncryptionMode) -> Self {
        self.encryption_mode = mode;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn s3_client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.s3_client = Some(client);
        self
    }

    /// Set an explicit KMS client to use.
    pub fn kms_client(mut self, client: aws_sdk_kms::Client) -> Self {
        self.kms_client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Config {
        Config {
            bucket: self.bucket.expect("bucket set"),
            kms_key_id: self.kms_key_id.expect("kms key id set"),
            encryption_mode: self.encryption_mode,
            s3_client: self.s3_client.expect("s3 client set"),
            kms_client: self.kms_client.expect("kms client set"),
        }
    }
}
