/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::meta::region::RegionProviderChain;
use aws_types::region::Region;

use crate::config::Builder;
use crate::types::EncryptionMode;
use crate::Config;

/// Region used when none is set explicitly or resolvable from the environment.
const DEFAULT_REGION: &str = "us-east-1";

/// Load secure data manager [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    region: Option<Region>,
}

impl ConfigLoader {
    /// Set the bucket that objects are uploaded to and downloaded from.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.builder = self.builder.bucket(bucket);
        self
    }

    /// Set the KMS key ID, ARN, or alias used for SSE-KMS uploads and direct
    /// encryption.
    pub fn kms_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.builder = self.builder.kms_key_id(key_id);
        self
    }

    /// Set the server-side encryption mode requested for uploads.
    ///
    /// Default is [EncryptionMode::KmsManaged].
    pub fn encryption_mode(mut self, mode: EncryptionMode) -> Self {
        self.builder = self.builder.encryption_mode(mode);
        self
    }

    /// Set an explicit region instead of resolving one from the environment.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(Region::new(region.into()));
        self
    }

    /// Load the default configuration
    ///
    /// Credentials and any unset fields are resolved through the standard AWS
    /// environment/profile chain. When no region is set here or resolvable
    /// from the environment, `us-east-1` is used. Both SDK clients share one
    /// resolved [`aws_config::SdkConfig`] so credentials are loaded once.
    pub async fn load(self) -> Config {
        let region = RegionProviderChain::first_try(self.region)
            .or_default_provider()
            .or_else(Region::new(DEFAULT_REGION));

        let shared_config = aws_config::from_env().region(region).load().await;
        let s3_client = aws_sdk_s3::Client::new(&shared_config);
        let kms_client = aws_sdk_kms::Client::new(&shared_config);

        self.builder
            .s3_client(s3_client)
            .kms_client(kms_client)
            .build()
    }
}
