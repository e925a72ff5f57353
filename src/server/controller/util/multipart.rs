//! Reading the multipart application form.
//!
//! The form carries the household data as JSON in a `data` part and each supporting document in
//! a file part named after its kind (see [`DocumentKind::field_name`]).

use axum::extract::{multipart::MultipartError, Multipart};
use dioxus_logger::tracing;

use crate::{
    model::application::CreateApplicationDto,
    server::{
        error::{application::ApplicationError, Error},
        model::application::document::{DocumentKind, DocumentUpload, DocumentUploads},
    },
};

/// Name of the part holding the JSON encoded [`CreateApplicationDto`].
pub const DATA_FIELD: &str = "data";

/// Reads the household data and documents from a multipart application form.
///
/// File parts left empty by the browser (no file name, no content) are treated as not submitted.
/// Unknown parts are ignored. Document content is not checked here, size and type rules belong
/// to form validation.
///
/// # Returns
/// - `Ok((CreateApplicationDto, DocumentUploads))` - Form read successfully
/// - `Err(ApplicationError::MalformedRequest)` - Body is not valid multipart, the `data` part is
///   missing, or it is not valid JSON
pub async fn read_application_form(
    mut multipart: Multipart,
) -> Result<(CreateApplicationDto, DocumentUploads), Error> {
    let mut data: Option<CreateApplicationDto> = None;
    let mut uploads = DocumentUploads::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == DATA_FIELD {
            let text = field.text().await.map_err(malformed)?;
            let dto = serde_json::from_str(&text).map_err(|e| {
                ApplicationError::MalformedRequest(format!("invalid `{}` part: {}", DATA_FIELD, e))
            })?;

            data = Some(dto);
        } else if let Some(kind) = DocumentKind::from_field_name(&name) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(malformed)?;

            if file_name.is_empty() && bytes.is_empty() {
                continue;
            }

            uploads.set(kind, DocumentUpload::new(file_name, bytes.to_vec()));
        } else {
            tracing::debug!("Ignoring unexpected multipart part {:?}", name);
        }
    }

    let data = data.ok_or_else(|| {
        ApplicationError::MalformedRequest(format!("missing `{}` part", DATA_FIELD))
    })?;

    Ok((data, uploads))
}

fn malformed(err: MultipartError) -> ApplicationError {
    ApplicationError::MalformedRequest(err.body_text())
}
