/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for encrypted single object upload operation
pub mod upload;

/// Types for single object download operation
pub mod download;

/// Types for in-memory data encryption via KMS
pub mod encrypt;

/// Types for in-memory data decryption via KMS
pub mod decrypt;
