/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectOutput};
use aws_sdk_s3::types::ServerSideEncryption;
use aws_smithy_mocks_experimental::{mock, RuleMode};
use aws_smithy_types::error::ErrorMetadata;
use secure_data_manager::error::ErrorKind;
use secure_data_manager::types::EncryptionMode;
use test_common::{create_source_file, mock_client_with_stubbed_http_client};

const BUCKET: &str = "test-bucket";
const KEY_ID: &str = "alias/test-key";

fn stub_kms_client() -> aws_sdk_kms::Client {
    let rules: [aws_smithy_mocks_experimental::Rule; 0] = [];
    mock_client_with_stubbed_http_client!(aws_sdk_kms, RuleMode::MatchAny, &rules)
}

fn test_client(s3_client: aws_sdk_s3::Client) -> secure_data_manager::Client {
    let config = secure_data_manager::Config::builder()
        .bucket(BUCKET)
        .kms_key_id(KEY_ID)
        .s3_client(s3_client)
        .kms_client(stub_kms_client())
        .build();
    secure_data_manager::Client::new(config)
}

#[tokio::test]
async fn test_upload_requests_sse_kms() {
    let put_object = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|input| {
            input.bucket() == Some(BUCKET)
                && input.key() == Some("docs/report.csv")
                && input.server_side_encryption() == Some(&ServerSideEncryption::AwsKms)
                && input.ssekms_key_id() == Some(KEY_ID)
        })
        .then_output(|| {
            PutObjectOutput::builder()
                .e_tag("\"e6cf947r\"")
                .server_side_encryption(ServerSideEncryption::AwsKms)
                .ssekms_key_id(KEY_ID)
                .build()
        });
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]);

    let (_source_dir, source) = create_source_file("report.csv", b"name,total\nwidgets,42\n");
    let client = test_client(s3_client);

    let output = client
        .upload()
        .source(source)
        .key("docs/report.csv")
        .send()
        .await
        .unwrap();

    assert_eq!(Some("\"e6cf947r\""), output.e_tag());
    assert_eq!(
        Some(&ServerSideEncryption::AwsKms),
        output.server_side_encryption()
    );
    assert_eq!(Some(KEY_ID), output.sse_kms_key_id());
}

#[tokio::test]
async fn test_upload_dual_layer_mode_requests_dsse() {
    let put_object = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|input| {
            input.server_side_encryption() == Some(&ServerSideEncryption::AwsKmsDsse)
                && input.ssekms_key_id() == Some(KEY_ID)
        })
        .then_output(|| PutObjectOutput::builder().build());
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]);

    let (_source_dir, source) = create_source_file("data.bin", &[0u8; 64]);
    let config = secure_data_manager::Config::builder()
        .bucket(BUCKET)
        .kms_key_id(KEY_ID)
        .encryption_mode(EncryptionMode::KmsDualLayer)
        .s3_client(s3_client)
        .kms_client(stub_kms_client())
        .build();
    let client = secure_data_manager::Client::new(config);

    client
        .upload()
        .source(source)
        .key("data.bin")
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_forwards_content_type_and_metadata() {
    let put_object = mock!(aws_sdk_s3::Client::put_object)
        .match_requests(|input| {
            input.content_type() == Some("text/csv")
                && input
                    .metadata()
                    .is_some_and(|m| m.get("owner").map(String::as_str) == Some("data-platform"))
        })
        .then_output(|| PutObjectOutput::builder().build());
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]);

    let (_source_dir, source) = create_source_file("report.csv", b"name,total\n");
    let client = test_client(s3_client);

    client
        .upload()
        .source(source)
        .key("docs/report.csv")
        .content_type("text/csv")
        .metadata("owner", "data-platform")
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_invalid_bucket_returns_not_found() {
    let put_object = mock!(aws_sdk_s3::Client::put_object).then_error(|| {
        PutObjectError::generic(ErrorMetadata::builder().code("NoSuchBucket").build())
    });
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]);

    let (_source_dir, source) = create_source_file("report.csv", b"data");
    let client = test_client(s3_client);

    let err = client
        .upload()
        .source(source)
        .key("docs/report.csv")
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::NotFound, err.kind());
}

#[tokio::test]
async fn test_upload_service_failure_returns_service_error() {
    let put_object = mock!(aws_sdk_s3::Client::put_object).then_error(|| {
        PutObjectError::generic(ErrorMetadata::builder().code("AccessDenied").build())
    });
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]);

    let (_source_dir, source) = create_source_file("report.csv", b"data");
    let client = test_client(s3_client);

    let err = client
        .upload()
        .source(source)
        .key("docs/report.csv")
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::ServiceError, err.kind());
}

#[tokio::test]
async fn test_upload_missing_source_is_io_error() {
    let put_object =
        mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build());
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]);

    let client = test_client(s3_client);

    let err = client
        .upload()
        .source("/definitely/not/a/real/file")
        .key("docs/report.csv")
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::IOError, err.kind());
}

#[tokio::test]
async fn test_upload_missing_key_is_input_invalid() {
    let put_object =
        mock!(aws_sdk_s3::Client::put_object).then_output(|| PutObjectOutput::builder().build());
    let s3_client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&put_object]);

    let (_source_dir, source) = create_source_file("report.csv", b"data");
    let client = test_client(s3_client);

    let err = client.upload().source(source).send().await.unwrap_err();

    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}
