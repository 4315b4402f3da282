//! Capability interface over the AWS S3 client.
//!
//! [`StorageClient`] names the six object operations consumers rely on, [`AwsS3`] forwards
//! each of them unchanged to `aws_sdk_s3::Client`, and [`MockStorageClient`] stands in for it
//! in tests.

pub mod client;
pub mod config;
pub mod error;
pub mod s3;

pub use client::{MockStorageClient, StorageClient};
pub use config::{get_aws_config, AwsConfigArgs};
pub use error::ConfigError;
pub use s3::AwsS3;
