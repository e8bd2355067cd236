// POST /api/chat handler

use crate::error::ApiError;
use crate::llm::gemini::Part;
use crate::llm::prompt::{build_system_instruction, strip_data_uri_prefix};
use crate::llm::GeminiClient;
use crate::models::{ChatRequest, ChatResponse};
use crate::state::AppState;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::sync::Arc;

/// Returned with HTTP 200 when the image branch fails; the frontend shows
/// it as a normal assistant reply.
const IMAGE_APOLOGY: &str =
    "Error processing image. Please try text only or check the image format.";

pub async fn chat_handler(
    request: ChatRequest,
    state: Arc<AppState>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let Some(client) = &state.gemini else {
        return Err(ApiError::internal("Gemini API Key missing on server").reject());
    };

    let system_instruction = build_system_instruction(&request.language);

    if let Some(image) = &request.image {
        // Image failures soft-fail to a 200 apology instead of an error
        let text = match describe_image(client, image, &system_instruction, &request.prompt).await
        {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, "Image processing error");
                IMAGE_APOLOGY.to_string()
            }
        };
        return Ok(warp::reply::json(&ChatResponse { response: text }));
    }

    // Text only: system instruction and prompt as two ordered parts
    let parts = vec![
        Part::text(&system_instruction),
        Part::text(&request.prompt),
    ];
    match client.generate(parts).await {
        Ok(text) => Ok(warp::reply::json(&ChatResponse { response: text })),
        Err(err) => {
            tracing::error!(error = %err, "Gemini API error");
            Err(ApiError::internal(format!("AI Service Error: {}", err)).reject())
        }
    }
}

// Decode the payload and run the vision request. Any error here belongs to
// the soft-fail branch.
async fn describe_image(
    client: &GeminiClient,
    image: &str,
    system_instruction: &str,
    prompt: &str,
) -> Result<String, ChatImageError> {
    let image_data = BASE64.decode(strip_data_uri_prefix(image))?;

    // Mime type is always image/jpeg, whatever the payload declared
    let parts = vec![
        Part::jpeg(&image_data),
        Part::text(format!("{}\n\n{}", system_instruction, prompt)),
    ];
    Ok(client.generate(parts).await?)
}

#[derive(Debug, thiserror::Error)]
enum ChatImageError {
    #[error("invalid base64 image data: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error(transparent)]
    Provider(#[from] crate::llm::LlmError),
}
