/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use aws_smithy_types::error::operation::BuildError;

/// Request type for downloading a single object to a local file
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DownloadInput {
    /// Key of the object in the configured bucket.
    pub key: Option<String>,

    /// Local path the object content is written to.
    pub destination: Option<PathBuf>,
}

impl DownloadInput {
    /// Create a new builder
    pub fn builder() -> DownloadInputBuilder {
        DownloadInputBuilder::default()
    }

    /// Key of the object in the configured bucket.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Local path the object content is written to.
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }
}

/// Builder for [`DownloadInput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DownloadInputBuilder {
    key: Option<String>,
    destination: Option<PathBuf>,
}

impl DownloadInputBuilder {
    /// Key of the object in the configured bucket. Required.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Key of the object in the configured bucket.
    pub fn set_key(mut self, key: Option<String>) -> Self {
        self.key = key;
        self
    }

    /// Local path the object content is written to. Required.
    pub fn destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Local path the object content is written to.
    pub fn set_destination(mut self, destination: Option<PathBuf>) -> Self {
        self.destination = destination;
        self
    }

    /// Consumes the builder and constructs a [`DownloadInput`]
    pub fn build(self) -> Result<DownloadInput, BuildError> {
        if self.key.is_none() {
            return Err(BuildError::missing_field(
                "key",
                "key is required for a download",
            ));
        }
        if self.destination.is_none() {
            return Err(BuildError::missing_field(
                "destination",
                "destination is required for a download",
            ));
        }

        Ok(DownloadInput {
            key: self.key,
            destination: self.destination,
        })
    }
}
