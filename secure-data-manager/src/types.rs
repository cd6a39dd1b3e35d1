/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::ServerSideEncryption;

/// How uploaded objects are encrypted at rest in Amazon S3.
///
/// Every mode uses the KMS key configured on the
/// [`Config`](crate::config::Config); the mode only selects the server-side
/// encryption algorithm requested on `PutObject`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncryptionMode {
    /// Server-side encryption with the configured KMS key (`aws:kms`).
    #[default]
    KmsManaged,

    /// Dual-layer server-side encryption with the configured KMS key
    /// (`aws:kms:dsse`).
    KmsDualLayer,
}

impl EncryptionMode {
    /// The `ServerSideEncryption` request value for this mode.
    pub(crate) fn as_sse(&self) -> ServerSideEncryption {
        match self {
            EncryptionMode::KmsManaged => ServerSideEncryption::AwsKms,
            EncryptionMode::KmsDualLayer => ServerSideEncryption::AwsKmsDsse,
        }
    }
}
