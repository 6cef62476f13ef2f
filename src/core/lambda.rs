//! Lambda function-code updates

use tracing::info;

use crate::core::service::{error_chain, ServiceError, ServiceResult};

/// Point `function_name` at the container image `image_uri`.
///
/// Success carries no payload; the provider's own eventual-consistency
/// window applies to when the new image starts serving.
pub async fn update_function_code(
    client: &aws_sdk_lambda::Client,
    function_name: &str,
    image_uri: &str,
) -> ServiceResult<()> {
    client
        .update_function_code()
        .function_name(function_name)
        .image_uri(image_uri)
        .send()
        .await
        .map_err(|e| {
            ServiceError::Upstream(format!(
                "UpdateFunctionCode failed for '{}': {}",
                function_name,
                error_chain(&e)
            ))
        })?;

    info!("updated function '{}' to image '{}'", function_name, image_uri);
    Ok(())
}
