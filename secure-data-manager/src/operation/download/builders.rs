/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Error;

use super::{DownloadInputBuilder, DownloadOutput};

/// Fluent builder for constructing a single object download
#[derive(Debug)]
pub struct DownloadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DownloadInputBuilder,
}

impl DownloadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Key of the object in the configured bucket. Required.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.inner = self.inner.key(key);
        self
    }

    /// Local path the object content is written to. Required.
    pub fn destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.inner = self.inner.destination(destination);
        self
    }

    /// Download the object and await the service response
    pub async fn send(self) -> Result<DownloadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::download::Download::orchestrate(self.handle, input).await
    }
}

impl crate::operation::download::DownloadInputBuilder {
    /// Download a single object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<DownloadOutput, Error> {
        let mut fluent_builder = client.download();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
