/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// Create a mocked SDK client backed by the given rules, with the HTTP layer
/// stubbed out so a request that matches no rule cannot reach the network.
///
/// Works for any AWS SDK crate ident, e.g.
/// `mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&rule])` or
/// `mock_client_with_stubbed_http_client!(aws_sdk_kms, RuleMode::MatchAny, &[rule])`.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rules: expr) => {
        $crate::mock_client_with_stubbed_http_client!(
            $aws_crate,
            aws_smithy_mocks_experimental::RuleMode::Sequential,
            $rules
        )
    };
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {{
        let client = aws_smithy_mocks_experimental::mock_client!($aws_crate, $rule_mode, $rules);
        $aws_crate::client::Client::from_conf(
            client
                .config()
                .to_builder()
                .http_client(aws_smithy_http_client::test_util::infallible_client_fn(
                    |_req| {
                        ::http::Response::builder()
                            .status(200)
                            .body(aws_smithy_types::body::SdkBody::empty())
                            .unwrap()
                    },
                ))
                .build(),
        )
    }};
}

/// Create a temp directory holding a single file with the given contents.
///
/// Returns the directory guard (dropping it removes the file) along with the
/// file's path.
pub fn create_source_file(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    (temp_dir, path)
}
