use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use clap::Args;

/// Parameters used to configure the AWS S3 client.
///
/// Everything is optional: unset values fall through to the SDK's default provider chain
/// (environment, shared config files, instance metadata). Flatten this into a binary's CLI
/// with `#[clap(flatten)]`.
#[derive(Debug, Clone, Default, Args)]
pub struct AwsConfigArgs {
    /// The access key ID. Only used together with the secret access key.
    #[arg(env = "AWS_ACCESS_KEY_ID", long)]
    pub aws_access_key_id: Option<String>,

    /// The secret access key.
    #[arg(env = "AWS_SECRET_ACCESS_KEY", long, hide_env_values = true)]
    pub aws_secret_access_key: Option<String>,

    /// Session token for temporary credentials.
    #[arg(env = "AWS_SESSION_TOKEN", long, hide_env_values = true)]
    pub aws_session_token: Option<String>,

    /// The region. Tried first, before the default region chain.
    #[arg(env = "AWS_REGION", long)]
    pub aws_region: Option<String>,

    /// Custom endpoint, e.g. LocalStack or MinIO.
    #[arg(env = "AWS_ENDPOINT_URL", long)]
    pub aws_endpoint_url: Option<String>,

    /// Address buckets as `endpoint/bucket` instead of `bucket.endpoint`.
    #[arg(env = "AWS_S3_FORCE_PATH_STYLE", long)]
    pub s3_force_path_style: bool,
}

impl AwsConfigArgs {
    /// Static credentials from the access key pair, if both halves were supplied.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.aws_access_key_id, &self.aws_secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Some(Credentials::from_keys(
                access_key_id.clone(),
                secret_access_key.clone(),
                self.aws_session_token.clone(),
            )),
            _ => None,
        }
    }
}

/// To build a `SdkConfig` for the AWS provider.
///
/// Explicit values from `args` take precedence; anything left unset is resolved by the
/// default chain. The result is not validated here, see [`crate::AwsS3::try_from_sdk_config`].
pub async fn get_aws_config(args: &AwsConfigArgs) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &args.aws_region {
        let region_provider = RegionProviderChain::first_try(Region::new(region.clone())).or_default_provider();
        loader = loader.region(region_provider);
    }

    if let Some(credentials) = args.credentials() {
        loader = loader.credentials_provider(credentials);
    }

    if let Some(endpoint_url) = &args.aws_endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}
