/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use aws_smithy_types::error::operation::BuildError;

/// Request type for uploading a single object with server-side encryption
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct UploadInput {
    /// Local file to upload.
    pub source: Option<PathBuf>,

    /// Destination key in the configured bucket.
    pub key: Option<String>,

    /// Content type stored with the object.
    pub content_type: Option<String>,

    /// User-defined metadata stored with the object.
    pub metadata: Option<HashMap<String, String>>,
}

impl UploadInput {
    /// Create a new builder
    pub fn builder() -> UploadInputBuilder {
        UploadInputBuilder::default()
    }

    /// Local file to upload.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Destination key in the configured bucket.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Content type stored with the object.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// User-defined metadata stored with the object.
    pub fn metadata(&self) -> Option<&HashMap<String, String>> {
        self.metadata.as_ref()
    }
}

/// Builder for [`UploadInput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct UploadInputBuilder {
    source: Option<PathBuf>,
    key: Option<String>,
    content_type: Option<String>,
    metadata: Option<HashMap<String, String>>,
}

impl UploadInputBuilder {
    /// Local file to upload. Required.
    pub fn source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Local file to upload.
    pub fn set_source(mut self, source: Option<PathBuf>) -> Self {
        self.source = source;
        self
    }

    /// Destination key in the configured bucket. Required.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Destination key in the configured bucket.
    pub fn set_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }

    /// Content type stored with the object.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Content type stored with the object.
    pub fn set_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }

    /// Adds a key-value pair to the user-defined metadata stored with the object.
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        let mut metadata = self.metadata.unwrap_or_default();
        metadata.insert(k.into(), v.into());
        self.metadata = Some(metadata);
        self
    }

    /// User-defined metadata stored with the object.
    pub fn set_metadata(mut self, metadata: Option<HashMap<String, String>>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Consumes the builder and constructs an [`UploadInput`]
    pub fn build(self) -> Result<UploadInput, BuildError> {
        if self.source.is_none() {
            return Err(BuildError::missing_field(
                "source",
                "source is required for an upload",
            ));
        }
        if self.key.is_none() {
            return Err(BuildError::missing_field(
                "key",
                "key is required for an upload",
            ));
        }

        Ok(UploadInput {
            source: self.source,
            key: self.key,
            content_type: self.content_type,
            metadata: self.metadata,
        })
    }
}
