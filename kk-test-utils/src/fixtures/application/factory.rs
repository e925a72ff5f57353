//! Request payloads and document contents for application tests.

use serde_json::{json, Value};

pub const FAMILY_CARD_NUMBER: &str = "3201010101010001";
pub const HEAD_NIK: &str = "3201010101800001";

/// A household form that passes every field rule, in the JSON shape of the `data` part.
pub fn valid_form_json() -> Value {
    json!({
        "family_card_number": FAMILY_CARD_NUMBER,
        "head_name": "Budi Santoso",
        "head_nik": HEAD_NIK,
        "address": "Jl. Merdeka No. 1",
        "rt": "001",
        "rw": "002",
        "sub_district": "Pakansari",
        "district": "Cibinong",
        "regency": "Kabupaten Bogor",
        "province": "Jawa Barat",
        "postal_code": "16915",
        "members": [
            {
                "name": "Budi Santoso",
                "nik": HEAD_NIK,
                "sex": "male",
                "birth_place": "Bogor",
                "birth_date": "1980-01-01",
                "religion": "Islam",
                "education": "S1",
                "occupation": "Karyawan Swasta",
                "marital_status": "Kawin",
                "relationship": "Kepala Keluarga",
                "citizenship": "WNI"
            },
            {
                "name": "Siti Aminah",
                "nik": "3201014102850002",
                "sex": "female",
                "birth_place": "Bandung",
                "birth_date": "1985-02-01",
                "religion": "Islam",
                "education": "SMA",
                "occupation": "Mengurus Rumah Tangga",
                "marital_status": "Kawin",
                "relationship": "Istri",
                "citizenship": "WNI"
            }
        ],
        "consent": true
    })
}

/// Smallest byte sequence recognisable as a PDF.
pub fn mock_pdf() -> Vec<u8> {
    b"%PDF-1.4\n%%EOF\n".to_vec()
}

/// JPEG start and end markers.
pub fn mock_jpg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0xFF, 0xD9]
}
