use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::operation::delete_object::DeleteObjectInput;
use aws_sdk_s3::operation::delete_objects::DeleteObjectsInput;
use aws_sdk_s3::operation::get_object::GetObjectInput;
use aws_sdk_s3::operation::list_object_versions::ListObjectVersionsInput;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Input;
use aws_sdk_s3::operation::put_object::PutObjectInput;
use aws_sdk_s3::Client;

use crate::client::{
    DeleteObjectResult, DeleteObjectsResult, GetObjectResult, ListObjectVersionsResult, ListObjectsResult,
    PutObjectResult, StorageClient,
};
use crate::config::{get_aws_config, AwsConfigArgs};
use crate::error::ConfigError;

/// [`StorageClient`] backed by `aws_sdk_s3::Client`.
///
/// Holds the S3 configuration it was built from and the client built from it. Neither changes
/// after construction, so clones can be shared freely across tasks.
#[derive(Clone, Debug)]
pub struct AwsS3 {
    config: aws_sdk_s3::Config,
    client: Client,
}

impl AwsS3 {
    /// Creates a new instance of AwsS3 from an already resolved AWS configuration.
    ///
    /// The configuration is trusted as-is; a missing region or bad credentials will only show
    /// up as per-call errors.
    pub fn new(aws_config: &SdkConfig) -> Self {
        Self::from_conf(aws_sdk_s3::config::Builder::from(aws_config).build())
    }

    /// Creates a new instance of AwsS3 from an S3 specific configuration.
    pub fn from_conf(config: aws_sdk_s3::Config) -> Self {
        let client = Client::from_conf(config.clone());
        log_initialized(&config);
        Self { config, client }
    }

    /// Wraps an existing client, keeping a copy of its configuration.
    pub fn from_client(client: Client) -> Self {
        let config = client.config().clone();
        log_initialized(&config);
        Self { config, client }
    }

    /// Resolves configuration from the ambient environment through the SDK's default chain.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if no region can be resolved or no credentials can be
    /// obtained. Credentials are resolved once here so that a broken environment fails at
    /// startup instead of on the first request.
    pub async fn from_env() -> Result<Self, ConfigError> {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::try_from_sdk_config(&aws_config).await
    }

    /// Resolves configuration from explicit arguments layered over the default chain.
    ///
    /// # Arguments
    /// * `args` - Overrides for credentials, region, endpoint and addressing style.
    ///
    /// # Errors
    /// Same as [`AwsS3::from_env`].
    pub async fn from_args(args: &AwsConfigArgs) -> Result<Self, ConfigError> {
        let aws_config = get_aws_config(args).await;
        validate_sdk_config(&aws_config).await?;

        let s3_config =
            aws_sdk_s3::config::Builder::from(&aws_config).force_path_style(args.s3_force_path_style).build();
        Ok(Self::from_conf(s3_config))
    }

    /// Validates a loaded `SdkConfig` and builds the client from it.
    ///
    /// # Errors
    /// * [`ConfigError::MissingRegion`] - no region was resolved.
    /// * [`ConfigError::MissingCredentialsProvider`] - the config carries no credentials provider.
    /// * [`ConfigError::Credentials`] - the provider could not produce credentials.
    pub async fn try_from_sdk_config(aws_config: &SdkConfig) -> Result<Self, ConfigError> {
        validate_sdk_config(aws_config).await?;
        Ok(Self::new(aws_config))
    }

    /// The S3 configuration the client was built from.
    pub fn config(&self) -> &aws_sdk_s3::Config {
        &self.config
    }

    /// The underlying SDK client, for operations outside [`StorageClient`].
    pub fn client(&self) -> &Client {
        &self.client
    }
}

async fn validate_sdk_config(aws_config: &SdkConfig) -> Result<(), ConfigError> {
    let Some(region) = aws_config.region() else {
        tracing::error!(log_type = "StorageClient", "No AWS region could be resolved");
        return Err(ConfigError::MissingRegion);
    };

    let Some(credentials_provider) = aws_config.credentials_provider() else {
        tracing::error!(log_type = "StorageClient", "No AWS credentials provider is configured");
        return Err(ConfigError::MissingCredentialsProvider);
    };

    credentials_provider.provide_credentials().await.map_err(|e| {
        tracing::error!(log_type = "StorageClient", error = %e, "Failed to resolve AWS credentials");
        ConfigError::Credentials(e)
    })?;

    tracing::info!(
        log_type = "StorageClient",
        region = %region,
        endpoint = aws_config.endpoint_url(),
        "AWS configuration resolved"
    );
    Ok(())
}

fn log_initialized(config: &aws_sdk_s3::Config) {
    tracing::info!(
        log_type = "StorageClient",
        region = config.region().map(ToString::to_string),
        "S3 storage client initialized"
    );
}

#[async_trait]
impl StorageClient for AwsS3 {
    #[tracing::instrument(
        skip_all,
        fields(category = "storage", bucket = input.bucket.as_deref(), key = input.key.as_deref())
    )]
    async fn get_object(&self, input: GetObjectInput) -> GetObjectResult {
        let result = self
            .client
            .get_object()
            .set_bucket(input.bucket)
            .set_if_match(input.if_match)
            .set_if_modified_since(input.if_modified_since)
            .set_if_none_match(input.if_none_match)
            .set_if_unmodified_since(input.if_unmodified_since)
            .set_key(input.key)
            .set_range(input.range)
            .set_response_cache_control(input.response_cache_control)
            .set_response_content_disposition(input.response_content_disposition)
            .set_response_content_encoding(input.response_content_encoding)
            .set_response_content_language(input.response_content_language)
            .set_response_content_type(input.response_content_type)
            .set_response_expires(input.response_expires)
            .set_version_id(input.version_id)
            .set_sse_customer_algorithm(input.sse_customer_algorithm)
            .set_sse_customer_key(input.sse_customer_key)
            .set_sse_customer_key_md5(input.sse_customer_key_md5)
            .set_request_payer(input.request_payer)
            .set_part_number(input.part_number)
            .set_expected_bucket_owner(input.expected_bucket_owner)
            .set_checksum_mode(input.checksum_mode)
            .send()
            .await;

        tracing::debug!(success = result.is_ok(), "get_object forwarded");
        result
    }

    #[tracing::instrument(
        skip_all,
        fields(category = "storage", bucket = input.bucket.as_deref(), prefix = input.prefix.as_deref())
    )]
    async fn list_object_versions(&self, input: ListObjectVersionsInput) -> ListObjectVersionsResult {
        let result = self
            .client
            .list_object_versions()
            .set_bucket(input.bucket)
            .set_delimiter(input.delimiter)
            .set_encoding_type(input.encoding_type)
            .set_key_marker(input.key_marker)
            .set_max_keys(input.max_keys)
            .set_prefix(input.prefix)
            .set_version_id_marker(input.version_id_marker)
            .set_expected_bucket_owner(input.expected_bucket_owner)
            .set_request_payer(input.request_payer)
            .set_optional_object_attributes(input.optional_object_attributes)
            .send()
            .await;

        tracing::debug!(success = result.is_ok(), "list_object_versions forwarded");
        result
    }

    #[tracing::instrument(
        skip_all,
        fields(category = "storage", bucket = input.bucket.as_deref(), prefix = input.prefix.as_deref())
    )]
    async fn list_objects(&self, input: ListObjectsV2Input) -> ListObjectsResult {
        let result = self
            .client
            .list_objects_v2()
            .set_bucket(input.bucket)
            .set_delimiter(input.delimiter)
            .set_encoding_type(input.encoding_type)
            .set_max_keys(input.max_keys)
            .set_prefix(input.prefix)
            .set_continuation_token(input.continuation_token)
            .set_fetch_owner(input.fetch_owner)
            .set_start_after(input.start_after)
            .set_request_payer(input.request_payer)
            .set_expected_bucket_owner(input.expected_bucket_owner)
            .set_optional_object_attributes(input.optional_object_attributes)
            .send()
            .await;

        tracing::debug!(success = result.is_ok(), "list_objects forwarded");
        result
    }

    #[tracing::instrument(
        skip_all,
        fields(category = "storage", bucket = input.bucket.as_deref(), key = input.key.as_deref())
    )]
    async fn put_object(&self, input: PutObjectInput) -> PutObjectResult {
        let result = self
            .client
            .put_object()
            .set_acl(input.acl)
            .body(input.body)
            .set_bucket(input.bucket)
            .set_cache_control(input.cache_control)
            .set_content_disposition(input.content_disposition)
            .set_content_encoding(input.content_encoding)
            .set_content_language(input.content_language)
            .set_content_length(input.content_length)
            .set_content_md5(input.content_md5)
            .set_content_type(input.content_type)
            .set_checksum_algorithm(input.checksum_algorithm)
            .set_checksum_crc32(input.checksum_crc32)
            .set_checksum_crc32_c(input.checksum_crc32_c)
            .set_checksum_sha1(input.checksum_sha1)
            .set_checksum_sha256(input.checksum_sha256)
            .set_checksum_crc64_nvme(input.checksum_crc64_nvme)
            .set_checksum_sha512(input.checksum_sha512)
            .set_checksum_md5(input.checksum_md5)
            .set_checksum_xxhash64(input.checksum_xxhash64)
            .set_checksum_xxhash3(input.checksum_xxhash3)
            .set_checksum_xxhash128(input.checksum_xxhash128)
            .set_expires(input.expires)
            .set_if_match(input.if_match)
            .set_if_none_match(input.if_none_match)
            .set_grant_full_control(input.grant_full_control)
            .set_grant_read(input.grant_read)
            .set_grant_read_acp(input.grant_read_acp)
            .set_grant_write_acp(input.grant_write_acp)
            .set_key(input.key)
            .set_write_offset_bytes(input.write_offset_bytes)
            .set_metadata(input.metadata)
            .set_server_side_encryption(input.server_side_encryption)
            .set_storage_class(input.storage_class)
            .set_website_redirect_location(input.website_redirect_location)
            .set_sse_customer_algorithm(input.sse_customer_algorithm)
            .set_sse_customer_key(input.sse_customer_key)
            .set_sse_customer_key_md5(input.sse_customer_key_md5)
            .set_ssekms_key_id(input.ssekms_key_id)
            .set_ssekms_encryption_context(input.ssekms_encryption_context)
            .set_bucket_key_enabled(input.bucket_key_enabled)
            .set_request_payer(input.request_payer)
            .set_tagging(input.tagging)
            .set_object_lock_mode(input.object_lock_mode)
            .set_object_lock_retain_until_date(input.object_lock_retain_until_date)
            .set_object_lock_legal_hold_status(input.object_lock_legal_hold_status)
            .set_object_lock_event_hold(input.object_lock_event_hold)
            .set_object_lock_event_hold_duration_days(input.object_lock_event_hold_duration_days)
            .set_object_lock_event_hold_duration_years(input.object_lock_event_hold_duration_years)
            .set_expected_bucket_owner(input.expected_bucket_owner)
            .send()
            .await;

        tracing::debug!(success = result.is_ok(), "put_object forwarded");
        result
    }

    #[tracing::instrument(
        skip_all,
        fields(category = "storage", bucket = input.bucket.as_deref(), key = input.key.as_deref())
    )]
    async fn delete_object(&self, input: DeleteObjectInput) -> DeleteObjectResult {
        let result = self
            .client
            .delete_object()
            .set_bucket(input.bucket)
            .set_key(input.key)
            .set_mfa(input.mfa)
            .set_version_id(input.version_id)
            .set_request_payer(input.request_payer)
            .set_bypass_governance_retention(input.bypass_governance_retention)
            .set_expected_bucket_owner(input.expected_bucket_owner)
            .set_if_match(input.if_match)
            .set_if_match_last_modified_time(input.if_match_last_modified_time)
            .set_if_match_size(input.if_match_size)
            .send()
            .await;

        tracing::debug!(success = result.is_ok(), "delete_object forwarded");
        result
    }

    #[tracing::instrument(skip_all, fields(category = "storage", bucket = input.bucket.as_deref()))]
    async fn delete_objects(&self, input: DeleteObjectsInput) -> DeleteObjectsResult {
        let result = self
            .client
            .delete_objects()
            .set_bucket(input.bucket)
            .set_delete(input.delete)
            .set_mfa(input.mfa)
            .set_request_payer(input.request_payer)
            .set_bypass_governance_retention(input.bypass_governance_retention)
            .set_expected_bucket_owner(input.expected_bucket_owner)
            .set_checksum_algorithm(input.checksum_algorithm)
            .send()
            .await;

        // Partial failures are a successful response carrying an `errors` list.
        tracing::debug!(success = result.is_ok(), "delete_objects forwarded");
        result
    }
}
