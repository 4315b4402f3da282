use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::delete_object::{DeleteObjectError, DeleteObjectInput, DeleteObjectOutput};
use aws_sdk_s3::operation::delete_objects::{DeleteObjectsError, DeleteObjectsInput, DeleteObjectsOutput};
use aws_sdk_s3::operation::get_object::{GetObjectError, GetObjectInput, GetObjectOutput};
use aws_sdk_s3::operation::list_object_versions::{
    ListObjectVersionsError, ListObjectVersionsInput, ListObjectVersionsOutput,
};
use aws_sdk_s3::operation::list_objects_v2::{ListObjectsV2Error, ListObjectsV2Input, ListObjectsV2Output};
use aws_sdk_s3::operation::put_object::{PutObjectError, PutObjectInput, PutObjectOutput};
use mockall::automock;

pub type GetObjectResult = Result<GetObjectOutput, SdkError<GetObjectError>>;
pub type ListObjectVersionsResult = Result<ListObjectVersionsOutput, SdkError<ListObjectVersionsError>>;
pub type ListObjectsResult = Result<ListObjectsV2Output, SdkError<ListObjectsV2Error>>;
pub type PutObjectResult = Result<PutObjectOutput, SdkError<PutObjectError>>;
pub type DeleteObjectResult = Result<DeleteObjectOutput, SdkError<DeleteObjectError>>;
pub type DeleteObjectsResult = Result<DeleteObjectsOutput, SdkError<DeleteObjectsError>>;

/// The object operations a consumer needs from S3.
///
/// Requests and responses are the SDK's own operation types. Implementations must hand the
/// request to the backend as-is and return whatever the backend produced, error included:
/// no retries, no pagination, no translation of failures.
///
/// Timeouts and cancellation belong to the caller. Dropping the returned future abandons the
/// request.
#[automock]
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Fetch an object's body and metadata.
    async fn get_object(&self, input: GetObjectInput) -> GetObjectResult;

    /// List the versions of objects in a bucket.
    async fn list_object_versions(&self, input: ListObjectVersionsInput) -> ListObjectVersionsResult;

    /// List a single page of objects (`ListObjectsV2`).
    ///
    /// A continuation token in the response is returned to the caller, never followed.
    async fn list_objects(&self, input: ListObjectsV2Input) -> ListObjectsResult;

    /// Store an object.
    async fn put_object(&self, input: PutObjectInput) -> PutObjectResult;

    /// Delete a single object.
    async fn delete_object(&self, input: DeleteObjectInput) -> DeleteObjectResult;

    /// Delete a batch of objects.
    ///
    /// Keys the backend failed to delete come back in the output's `errors` list, exactly as
    /// reported.
    async fn delete_objects(&self, input: DeleteObjectsInput) -> DeleteObjectsResult;
}
