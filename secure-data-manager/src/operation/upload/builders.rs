/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Error;

use super::{UploadInputBuilder, UploadOutput};

/// Fluent builder for constructing a single object encrypted upload
#[derive(Debug)]
pub struct UploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadInputBuilder,
}

impl UploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Local file to upload. Required.
    pub fn source(mut self, source: impl Into<PathBuf>) -> Self {
        self.inner = self.inner.source(source);
        self
    }

    /// Destination key in the configured bucket. Required.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.inner = self.inner.key(key);
        self
    }

    /// Content type stored with the object.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.inner = self.inner.content_type(content_type);
        self
    }

    /// Adds a key-value pair to the user-defined metadata stored with the object.
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.inner = self.inner.metadata(k, v);
        self
    }

    /// Upload the file and await the service response
    pub async fn send(self) -> Result<UploadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::upload::Upload::orchestrate(self.handle, input).await
    }
}

impl crate::operation::upload::UploadInputBuilder {
    /// Upload a single object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<UploadOutput, Error> {
        let mut fluent_builder = client.upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
