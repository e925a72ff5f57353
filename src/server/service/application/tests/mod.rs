
use chrono::{DateTime, TimeZone, Utc};
use kk_test_utils::prelude::*;

use super::*;
use crate::{
    model::application::CreateApplicationDto,
    server::model::application::document::{DocumentKind, DocumentUpload, DocumentUploads},
};

fn form() -> CreateApplicationDto {
    serde_json::from_value(factory::valid_form_json()).unwrap()
}

fn uploads() -> DocumentUploads {
    let mut uploads = DocumentUploads::default();
    uploads.set(
        DocumentKind::BirthCertificate,
        DocumentUpload::new("akta.pdf", factory::mock_pdf()),
    );
    uploads.set(
        DocumentKind::HeadIdCard,
        DocumentUpload::new("ktp.jpg", factory::mock_jpg()),
    );
    uploads
}

fn march_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap()
}

fn storage(test: &TestContext) -> DocumentStorage {
    DocumentStorage::new(test.storage_path())
}
