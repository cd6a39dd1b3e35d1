/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_kms::operation::decrypt::{DecryptError, DecryptOutput};
use aws_sdk_kms::operation::encrypt::{EncryptError, EncryptOutput};
use aws_smithy_mocks_experimental::{mock, RuleMode};
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use aws_smithy_types::error::ErrorMetadata;
use aws_smithy_types::Blob;
use secure_data_manager::error::ErrorKind;
use test_common::mock_client_with_stubbed_http_client;

const BUCKET: &str = "test-bucket";
const KEY_ID: &str = "alias/test-key";
const KEY_ARN: &str = "arn:aws:kms:us-east-1:123456789012:key/12345678-1234-1234-1234-123456789012";

fn stub_s3_client() -> aws_sdk_s3::Client {
    let rules: [aws_smithy_mocks_experimental::Rule; 0] = [];
    mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::MatchAny, &rules)
}

fn test_client(kms_client: aws_sdk_kms::Client) -> secure_data_manager::Client {
    let config = secure_data_manager::Config::builder()
        .bucket(BUCKET)
        .kms_key_id(KEY_ID)
        .s3_client(stub_s3_client())
        .kms_client(kms_client)
        .build();
    secure_data_manager::Client::new(config)
}

/// Stand-in for the opaque transform KMS applies; tests only care that the
/// blob is non-empty and different from the plaintext.
fn fake_ciphertext(plaintext: &[u8]) -> Vec<u8> {
    let mut blob = b"kms-ciphertext:".to_vec();
    blob.extend(plaintext.iter().rev());
    blob
}

#[tokio::test]
async fn test_encrypt_decrypt_round_trip() {
    let (_guard, _rx) = capture_test_logs();
    let plaintext = b"This is sensitive information".to_vec();
    let ciphertext = fake_ciphertext(&plaintext);

    let encrypt = mock!(aws_sdk_kms::Client::encrypt)
        .match_requests({
            let plaintext = plaintext.clone();
            move |input| {
                input.key_id() == Some(KEY_ID)
                    && input.plaintext().map(|b| b.as_ref()) == Some(plaintext.as_slice())
            }
        })
        .then_output({
            let ciphertext = ciphertext.clone();
            move || {
                EncryptOutput::builder()
                    .ciphertext_blob(Blob::new(ciphertext.clone()))
                    .key_id(KEY_ARN)
                    .build()
            }
        });
    let decrypt = mock!(aws_sdk_kms::Client::decrypt)
        .match_requests({
            let ciphertext = ciphertext.clone();
            move |input| input.ciphertext_blob().map(|b| b.as_ref()) == Some(ciphertext.as_slice())
        })
        .then_output({
            let plaintext = plaintext.clone();
            move || {
                DecryptOutput::builder()
                    .plaintext(Blob::new(plaintext.clone()))
                    .key_id(KEY_ARN)
                    .build()
            }
        });
    let kms_client =
        mock_client_with_stubbed_http_client!(aws_sdk_kms, RuleMode::MatchAny, &[encrypt, decrypt]);

    let client = test_client(kms_client);

    let encrypted = client
        .encrypt()
        .plaintext(plaintext.clone())
        .send()
        .await
        .unwrap();

    let blob = encrypted.ciphertext_blob();
    assert!(!blob.as_ref().is_empty());
    assert_ne!(plaintext.as_slice(), blob.as_ref());
    assert_eq!(Some(KEY_ARN), encrypted.key_id());

    let decrypted = client
        .decrypt()
        .ciphertext(blob.clone())
        .send()
        .await
        .unwrap();

    assert_eq!(plaintext.as_slice(), decrypted.plaintext().as_ref());
    assert_eq!(Some(KEY_ARN), decrypted.key_id());
}

#[tokio::test]
async fn test_encrypt_forwards_encryption_context() {
    let encrypt = mock!(aws_sdk_kms::Client::encrypt)
        .match_requests(|input| {
            input
                .encryption_context()
                .is_some_and(|ctx| ctx.get("tenant").map(String::as_str) == Some("acme"))
        })
        .then_output(|| {
            EncryptOutput::builder()
                .ciphertext_blob(Blob::new(b"opaque".to_vec()))
                .build()
        });
    let kms_client = mock_client_with_stubbed_http_client!(aws_sdk_kms, &[&encrypt]);

    let client = test_client(kms_client);

    client
        .encrypt()
        .plaintext("secret")
        .encryption_context("tenant", "acme")
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_encrypt_failure_returns_error_value() {
    let encrypt = mock!(aws_sdk_kms::Client::encrypt).then_error(|| {
        EncryptError::generic(ErrorMetadata::builder().code("AccessDeniedException").build())
    });
    let kms_client = mock_client_with_stubbed_http_client!(aws_sdk_kms, &[&encrypt]);

    let client = test_client(kms_client);

    let err = client
        .encrypt()
        .plaintext("This is sensitive information")
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::ServiceError, err.kind());
}

#[tokio::test]
async fn test_decrypt_failure_returns_error_value() {
    let decrypt = mock!(aws_sdk_kms::Client::decrypt).then_error(|| {
        DecryptError::generic(
            ErrorMetadata::builder()
                .code("InvalidCiphertextException")
                .build(),
        )
    });
    let kms_client = mock_client_with_stubbed_http_client!(aws_sdk_kms, &[&decrypt]);

    let client = test_client(kms_client);

    let err = client
        .decrypt()
        .ciphertext(Blob::new(b"garbage".to_vec()))
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::ServiceError, err.kind());
}

#[tokio::test]
async fn test_missing_kms_key_returns_not_found() {
    let encrypt = mock!(aws_sdk_kms::Client::encrypt).then_error(|| {
        EncryptError::generic(ErrorMetadata::builder().code("NotFoundException").build())
    });
    let kms_client = mock_client_with_stubbed_http_client!(aws_sdk_kms, &[&encrypt]);

    let client = test_client(kms_client);

    let err = client
        .encrypt()
        .plaintext("secret")
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::NotFound, err.kind());
}

#[tokio::test]
async fn test_decrypt_pins_key_when_requested() {
    let decrypt = mock!(aws_sdk_kms::Client::decrypt)
        .match_requests(|input| input.key_id() == Some(KEY_ARN))
        .then_output(|| {
            DecryptOutput::builder()
                .plaintext(Blob::new(b"secret".to_vec()))
                .key_id(KEY_ARN)
                .build()
        });
    let kms_client = mock_client_with_stubbed_http_client!(aws_sdk_kms, &[&decrypt]);

    let client = test_client(kms_client);

    let output = client
        .decrypt()
        .ciphertext(Blob::new(b"opaque".to_vec()))
        .key_id(KEY_ARN)
        .send()
        .await
        .unwrap();

    assert_eq!(b"secret".as_slice(), output.plaintext().as_ref());
}

#[tokio::test]
async fn test_empty_plaintext_is_input_invalid() {
    let rules: [aws_smithy_mocks_experimental::Rule; 0] = [];
    let kms_client = mock_client_with_stubbed_http_client!(aws_sdk_kms, RuleMode::MatchAny, &rules);

    let client = test_client(kms_client);

    let err = client
        .encrypt()
        .plaintext(bytes::Bytes::new())
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}
