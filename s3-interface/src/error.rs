use aws_credential_types::provider::error::CredentialsError;
use thiserror::Error;

/// Failure to build a usable client from ambient or supplied configuration.
///
/// Per-call failures are never converted into this type; operations return the SDK's own
/// `SdkError` untouched.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No AWS region could be resolved")]
    MissingRegion,

    #[error("No AWS credentials provider is configured")]
    MissingCredentialsProvider,

    #[error("Failed to resolve AWS credentials: {0}")]
    Credentials(#[from] CredentialsError),
}
