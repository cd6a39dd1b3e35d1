/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "sensitive-data")]
#[command(about = "Encrypts a small secret via KMS and optionally round-trips a file through S3.")]
pub struct Args {
    /// Bucket to upload to / download from
    #[arg(long)]
    bucket: String,

    /// KMS key ID, ARN, or alias
    #[arg(long, default_value = "alias/s3-encryption-key")]
    kms_key_id: String,

    /// Region (defaults to the environment, then us-east-1)
    #[arg(long)]
    region: Option<String>,

    /// Optional local file to upload with SSE-KMS and download back
    #[arg(long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut loader = secure_data_manager::from_env()
        .bucket(&args.bucket)
        .kms_key_id(&args.kms_key_id);
    if let Some(region) = &args.region {
        loader = loader.region(region);
    }
    let client = secure_data_manager::Client::new(loader.load().await);

    let sensitive_data = "This is sensitive information";
    let encrypted = match client.encrypt().plaintext(sensitive_data).send().await {
        Ok(output) => output,
        Err(e) => {
            eprintln!("failed to encrypt: {}", DisplayErrorContext(&e));
            return Err(e.into());
        }
    };
    println!(
        "data encrypted successfully ({} ciphertext bytes)",
        encrypted.ciphertext_blob().as_ref().len()
    );

    let decrypted = client
        .decrypt()
        .ciphertext(encrypted.ciphertext_blob().clone())
        .send()
        .await?;
    println!(
        "decrypted data: {}",
        String::from_utf8_lossy(decrypted.plaintext().as_ref())
    );

    if let Some(file) = &args.file {
        let key = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "sensitive-data".to_string());

        client.upload().source(file).key(&key).send().await?;
        println!("uploaded {} with SSE-KMS", file.display());

        let restored = file.with_extension("restored");
        let output = client
            .download()
            .key(&key)
            .destination(&restored)
            .send()
            .await?;
        println!(
            "downloaded {} bytes back to {}",
            output.bytes_written(),
            restored.display()
        );
    }

    Ok(())
}
