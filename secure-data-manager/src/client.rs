/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::Config;

/// Secure data manager client for Amazon S3 and AWS KMS.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, SDK clients, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a secure data manager config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Upload a local file to the configured bucket with SSE-KMS encryption.
    ///
    /// The object is encrypted at rest by S3 using the configured KMS key;
    /// no encryption is performed locally.
    ///
    /// Constructs a fluent builder for the
    /// [`Upload`](crate::operation::upload::builders::UploadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use secure_data_manager::error::Error;
    ///
    /// async fn upload_file(
    ///     client: &secure_data_manager::Client,
    ///     path: impl AsRef<Path>
    /// ) -> Result<(), Error> {
    ///     let output = client.upload()
    ///         .source(path.as_ref())
    ///         .key("my-key")
    ///         .send()
    ///         .await?;
    ///
    ///     // ... do something with output
    ///     Ok(())
    /// }
    /// ```
    pub fn upload(&self) -> crate::operation::upload::builders::UploadFluentBuilder {
        crate::operation::upload::builders::UploadFluentBuilder::new(self.handle.clone())
    }

    /// Download an object from the configured bucket to a local file.
    ///
    /// Objects stored with SSE-KMS are decrypted transparently by S3; the
    /// bytes written locally are plaintext.
    ///
    /// Constructs a fluent builder for the
    /// [`Download`](crate::operation::download::builders::DownloadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use secure_data_manager::error::Error;
    ///
    /// async fn get_object(client: &secure_data_manager::Client) -> Result<(), Error> {
    ///     let output = client
    ///         .download()
    ///         .key("my-key")
    ///         .destination("/tmp/my-key")
    ///         .send()
    ///         .await?;
    ///
    ///     println!("wrote {} bytes", output.bytes_written());
    ///     Ok(())
    /// }
    /// ```
    pub fn download(&self) -> crate::operation::download::builders::DownloadFluentBuilder {
        crate::operation::download::builders::DownloadFluentBuilder::new(self.handle.clone())
    }

    /// Encrypt in-memory data with the configured KMS key.
    ///
    /// Suitable for small payloads (KMS caps plaintext at 4096 bytes); larger
    /// data belongs in [`upload`](Client::upload).
    ///
    /// Constructs a fluent builder for the
    /// [`Encrypt`](crate::operation::encrypt::builders::EncryptFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use secure_data_manager::error::Error;
    ///
    /// async fn encrypt_secret(client: &secure_data_manager::Client) -> Result<(), Error> {
    ///     let output = client
    ///         .encrypt()
    ///         .plaintext("This is sensitive information")
    ///         .send()
    ///         .await?;
    ///
    ///     // ... persist output.ciphertext_blob() somewhere
    ///     Ok(())
    /// }
    /// ```
    pub fn encrypt(&self) -> crate::operation::encrypt::builders::EncryptFluentBuilder {
        crate::operation::encrypt::builders::EncryptFluentBuilder::new(self.handle.clone())
    }

    /// Decrypt a ciphertext blob previously produced by [`encrypt`](Client::encrypt).
    ///
    /// KMS discovers the key from the ciphertext blob, so no key needs to be
    /// specified for symmetric ciphertexts.
    ///
    /// Constructs a fluent builder for the
    /// [`Decrypt`](crate::operation::decrypt::builders::DecryptFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_smithy_types::Blob;
    /// use secure_data_manager::error::Error;
    ///
    /// async fn decrypt_secret(
    ///     client: &secure_data_manager::Client,
    ///     ciphertext: Blob
    /// ) -> Result<(), Error> {
    ///     let output = client
    ///         .decrypt()
    ///         .ciphertext(ciphertext)
    ///         .send()
    ///         .await?;
    ///
    ///     // ... do something with output.plaintext()
    ///     Ok(())
    /// }
    /// ```
    pub fn decrypt(&self) -> crate::operation::decrypt::builders::DecryptFluentBuilder {
        crate::operation::decrypt::builders::DecryptFluentBuilder::new(self.handle.clone())
    }
}
