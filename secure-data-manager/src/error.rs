/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of secure data errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// I/O errors
    IOError,

    /// Resource not found (e.g. bucket, key, or KMS key not found)
    NotFound,

    /// An S3 or KMS call failed (auth, network, permission, throttling, ...)
    ServiceError,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::ServiceError => write!(f, "service call failed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn service_error<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ServiceError, err)
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        let kind = match value.code() {
            Some("NotFound" | "NoSuchKey" | "NoSuchBucket" | "NotFoundException") => {
                ErrorKind::NotFound
            }
            _ => ErrorKind::ServiceError,
        };

        Error::new(kind, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::operation::get_object::GetObjectError;
    use aws_smithy_types::error::ErrorMetadata;

    fn service_err(
        code: &str,
    ) -> SdkError<GetObjectError, aws_smithy_runtime_api::client::orchestrator::HttpResponse> {
        SdkError::service_error(
            GetObjectError::generic(ErrorMetadata::builder().code(code).build()),
            aws_smithy_runtime_api::client::orchestrator::HttpResponse::new(
                aws_smithy_runtime_api::http::StatusCode::try_from(400).unwrap(),
                aws_smithy_types::body::SdkBody::empty(),
            ),
        )
    }

    #[test]
    fn test_not_found_code_mapping() {
        for code in ["NotFound", "NoSuchKey", "NoSuchBucket", "NotFoundException"] {
            let err: Error = service_err(code).into();
            assert_eq!(&ErrorKind::NotFound, err.kind());
        }
    }

    #[test]
    fn test_other_codes_collapse_to_service_error() {
        for code in ["AccessDenied", "Throttling", "InternalError"] {
            let err: Error = service_err(code).into();
            assert_eq!(&ErrorKind::ServiceError, err.kind());
        }
    }

    #[test]
    fn test_io_error_kind() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert_eq!(&ErrorKind::IOError, err.kind());
    }
}
