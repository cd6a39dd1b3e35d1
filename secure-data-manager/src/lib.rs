/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A client for storing and retrieving encrypted data with Amazon S3 and AWS KMS.
//!
//! The client wraps two AWS SDK handles behind a single configuration: objects
//! uploaded to S3 are encrypted at rest with server-side encryption (SSE-KMS)
//! under a configured KMS key, and small in-memory payloads can be encrypted
//! and decrypted directly against the same key via KMS.
//!
//! # Examples
//!
//! Load the default configuration and upload a file:
//!
//! ```no_run
//! # async fn example() -> Result<(), secure_data_manager::error::Error> {
//! let config = secure_data_manager::from_env()
//!     .bucket("my-bucket")
//!     .kms_key_id("alias/my-key")
//!     .load()
//!     .await;
//! let client = secure_data_manager::Client::new(config);
//!
//! let output = client
//!     .upload()
//!     .source("/tmp/report.csv")
//!     .key("reports/report.csv")
//!     .send()
//!     .await?;
//!
//! println!("uploaded, etag: {:?}", output.e_tag());
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`upload`](crate::Client::upload) - upload a local file with SSE-KMS encryption
//! * [`download`](crate::Client::download) - download an object to a local file
//! * [`encrypt`](crate::Client::encrypt) - encrypt in-memory data via KMS
//! * [`decrypt`](crate::Client::decrypt) - decrypt a KMS ciphertext blob

/// Error types emitted by `secure-data-manager`
pub mod error;

/// Common types used by `secure-data-manager`
pub mod types;

/// Secure data manager client
pub mod client;

/// Secure data manager operations
pub mod operation;

/// Secure data manager configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
