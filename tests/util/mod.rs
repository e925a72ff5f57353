//! Helpers shared by controller integration tests.

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    response::Response,
};
use kk_intake::server::model::session::user::SessionUserId;
use kk_test_utils::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

const BOUNDARY: &str = "kk-integration-boundary";

/// Builds the multipart body of an application form.
#[derive(Default)]
pub struct FormBuilder {
    body: Vec<u8>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The valid household data with a birth certificate and an ID card.
    pub fn valid() -> Self {
        Self::new()
            .data(&factory::valid_form_json())
            .file("birth_certificate", "akta.pdf", &factory::mock_pdf())
            .file("head_id_card", "ktp.jpg", &factory::mock_jpg())
    }

    pub fn data(mut self, value: &Value) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"data\"\r\n\r\n{}\r\n",
                BOUNDARY, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, name, file_name
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub async fn build(mut self) -> Multipart {
        self.body
            .extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri("/api/applications")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(self.body))
            .unwrap();

        Multipart::from_request(request, &()).await.unwrap()
    }
}

/// Stores `user_id` in the test session as the identity provider would.
pub async fn sign_in(test: &TestContext, user_id: i32) {
    SessionUserId::insert(&test.session, user_id).await.unwrap();
}

/// Reads a JSON response body.
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
