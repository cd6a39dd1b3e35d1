/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::ServerSideEncryption;

/// Common response fields for downloading an object from Amazon S3
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOutput {
    /// Number of bytes written to the destination file.
    pub bytes_written: u64,

    /// Size of the object body as reported by the service.
    pub content_length: Option<i64>,

    /// Entity tag of the object.
    pub e_tag: Option<String>,

    /// Version ID of the object, when the bucket has versioning enabled.
    pub version_id: Option<String>,

    /// The server-side encryption algorithm the object was stored with.
    pub server_side_encryption: Option<ServerSideEncryption>,

    /// The ID of the KMS key that was used to decrypt the object.
    pub sse_kms_key_id: Option<String>,
}

impl DownloadOutput {
    /// Create a new builder
    pub fn builder() -> DownloadOutputBuilder {
        DownloadOutputBuilder::default()
    }

    /// Number of bytes written to the destination file.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Size of the object body as reported by the service.
    pub fn content_length(&self) -> Option<i64> {
        self.content_length
    }

    /// Entity tag of the object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// Version ID of the object, when the bucket has versioning enabled.
    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    /// The server-side encryption algorithm the object was stored with.
    pub fn server_side_encryption(&self) -> Option<&ServerSideEncryption> {
        self.server_side_encryption.as_ref()
    }

    /// The ID of the KMS key that was used to decrypt the object.
    pub fn sse_kms_key_id(&self) -> Option<&str> {
        self.sse_kms_key_id.as_deref()
    }
}

/// Builder for [`DownloadOutput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DownloadOutputBuilder {
    bytes_written: u64,
    content_length: Option<i64>,
    e_tag: Option<String>,
    version_id: Option<String>,
    server_side_encryption: Option<ServerSideEncryption>,
    sse_kms_key_id: Option<String>,
}

impl DownloadOutputBuilder {
    /// Number of bytes written to the destination file.
    pub fn set_bytes_written(mut self, bytes_written: u64) -> Self {
        self.bytes_written = bytes_written;
        self
    }

    /// Size of the object body as reported by the service.
    pub fn set_content_length(mut self, content_length: Option<i64>) -> Self {
        self.content_length = content_length;
        self
    }

    /// Entity tag of the object.
    pub fn set_e_tag(mut self, e_tag: Option<String>) -> Self {
        self.e_tag = e_tag;
        self
    }

    /// Version ID of the object.
    pub fn set_version_id(mut self, version_id: Option<String>) -> Self {
        self.version_id = version_id;
        self
    }

    /// The server-side encryption algorithm the object was stored with.
    pub fn set_server_side_encryption(mut self, sse: Option<ServerSideEncryption>) -> Self {
        self.server_side_encryption = sse;
        self
    }

    /// The ID of the KMS key that was used to decrypt the object.
    pub fn set_sse_kms_key_id(mut self, key_id: Option<String>) -> Self {
        self.sse_kms_key_id = key_id;
        self
    }

    /// Consumes the builder and constructs a [`DownloadOutput`]
    pub fn build(self) -> DownloadOutput {
        DownloadOutput {
            bytes_written: self.bytes_written,
            content_length: self.content_length,
            e_tag: self.e_tag,
            version_id: self.version_id,
            server_side_encryption: self.server_side_encryption,
            sse_kms_key_id: self.sse_kms_key_id,
        }
    }
}
