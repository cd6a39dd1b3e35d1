/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::ServerSideEncryption;

/// Common response fields for uploading an encrypted object to Amazon S3
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutput {
    /// Entity tag for the uploaded object.
    pub e_tag: Option<String>,

    /// If object expiration is configured on the bucket, the expiry-date and
    /// rule-id of the matching lifecycle rule.
    pub expiration: Option<String>,

    /// Version ID of the object, when the bucket has versioning enabled.
    pub version_id: Option<String>,

    /// The server-side encryption algorithm used to store this object.
    pub server_side_encryption: Option<ServerSideEncryption>,

    /// The ID of the KMS key that was used for the object.
    pub sse_kms_key_id: Option<String>,

    /// Whether the object uses an S3 Bucket Key for SSE-KMS.
    pub bucket_key_enabled: Option<bool>,
}

impl UploadOutput {
    /// Create a new builder
    pub fn builder() -> UploadOutputBuilder {
        UploadOutputBuilder::default()
    }

    /// Entity tag for the uploaded object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// If object expiration is configured on the bucket, the expiry-date and
    /// rule-id of the matching lifecycle rule.
    pub fn expiration(&self) -> Option<&str> {
        self.expiration.as_deref()
    }

    /// Version ID of the object, when the bucket has versioning enabled.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// The server-side encryption algorithm used to store this object.
    pub fn server_side_encryption(&self) -> Option<&ServerSideEncryption> {
        self.server_side_encryption.as_ref()
    }

    /// The ID of the KMS key that was used for the object.
    pub fn sse_kms_key_id(&self) -> Option<&str> {
        self.sse_kms_key_id.as_deref()
    }

    /// Whether the object uses an S3 Bucket Key for SSE-KMS.
    pub fn bucket_key_enabled(&self) -> Option<bool> {
        self.bucket_key_enabled
    }
}

/// Builder for [`UploadOutput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct UploadOutputBuilder {
    e_tag: Option<String>,
    expiration: Option<String>,
    version_id: Option<String>,
    server_side_encryption: Option<ServerSideEncryption>,
    sse_kms_key_id: Option<String>,
    bucket_key_enabled: Option<bool>,
}

impl UploadOutputBuilder {
    /// Entity tag for the uploaded object.
    pub fn set_e_tag(mut self, e_tag: Option<String>) -> Self {
        self.e_tag = e_tag;
        self
    }

    /// Expiration rule information for the uploaded object.
    pub fn set_expiration(mut self, expiration: Option<String>) -> Self {
        self.expiration = expiration;
        self
    }

    /// Version ID of the object.
    pub fn set_version_id(mut self, version_id: Option<String>) -> Self {
        self.version_id = version_id;
        self
    }

    /// The server-side encryption algorithm used to store this object.
    pub fn set_server_side_encryption(mut self, sse: Option<ServerSideEncryption>) -> Self {
        self.server_side_encryption = sse;
        self
    }

    /// The ID of the KMS key that was used for the object.
    pub fn set_sse_kms_key_id(mut self, key_id: Option<String>) -> Self {
        self.sse_kms_key_id = key_id;
        self
    }

    /// Whether the object uses an S3 Bucket Key for SSE-KMS.
    pub fn set_bucket_key_enabled(mut self, enabled: Option<bool>) -> Self {
        self.bucket_key_enabled = enabled;
        self
    }

    /// Consumes the builder and constructs an [`UploadOutput`]
    pub fn build(self) -> UploadOutput {
        UploadOutput {
            e_tag: self.e_tag,
            expiration: self.expiration,
            version_id: self.version_id,
            server_side_encryption: self.server_side_encryption,
            sse_kms_key_id: self.sse_kms_key_id,
            bucket_key_enabled: self.bucket_key_enabled,
        }
    }
}
