//! Field rules for new applications.
//!
//! [`validate`] collects every failing field before returning so the applicant sees all problems
//! in one response. Field keys follow the JSON shape of the submitted form, family members are
//! keyed by index (`members.0.nik`).

use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use entity::sea_orm_active_enums::Sex;

use crate::{
    model::application::{CreateApplicationDto, FamilyMemberDto},
    server::{
        error::application::ApplicationError,
        model::application::document::{
            DocumentKind, DocumentUploads, ACCEPTED_EXTENSIONS, MAX_DOCUMENT_BYTES,
        },
    },
};

/// Length of a family card number and of a national ID (NIK).
pub const IDENTITY_NUMBER_LENGTH: usize = 16;
/// Upper bound for short text fields.
pub const MAX_TEXT_LENGTH: usize = 255;
/// Upper bound for RT and RW.
pub const MAX_RT_RW_LENGTH: usize = 3;
/// Exact length of a postal code.
pub const POSTAL_CODE_LENGTH: usize = 5;

/// Validation messages keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Adds a message for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages keyed by field name.
    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();

        write!(f, "{} field(s) failed validation: {}", fields.len(), fields.join(", "))
    }
}

/// A family member that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberForm {
    /// Full name
    pub name: String,
    /// 16-digit national identity number
    pub nik: String,
    /// Sex
    pub sex: Sex,
    /// Place of birth
    pub birth_place: String,
    /// Date of birth, not in the future
    pub birth_date: NaiveDate,
    /// Religion
    pub religion: String,
    /// Highest education
    pub education: String,
    /// Occupation
    pub occupation: String,
    /// Marital status
    pub marital_status: String,
    /// Relationship to the head of family
    pub relationship: String,
    /// Citizenship
    pub citizenship: String,
}

/// Household data that passed validation, text fields are trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationForm {
    /// 16-digit family card number (`no_kk`)
    pub family_card_number: String,
    /// Name of the head of family
    pub head_name: String,
    /// NIK of the head of family
    pub head_nik: String,
    /// Street address
    pub address: String,
    /// Neighbourhood unit (RT)
    pub rt: String,
    /// Community unit (RW)
    pub rw: String,
    /// Kelurahan or desa
    pub sub_district: String,
    /// Kecamatan
    pub district: String,
    /// Kabupaten or kota
    pub regency: String,
    /// Province
    pub province: String,
    /// 5-digit postal code
    pub postal_code: String,
    /// Family members, at least one
    pub members: Vec<MemberForm>,
}

/// Validates the submitted form together with its documents.
///
/// # Returns
/// - `Ok(ApplicationForm)` - Every field rule passed
/// - `Err(ApplicationError::ValidationFailed)` - One or more fields failed, with a message per
///   failing field
pub fn validate(
    dto: CreateApplicationDto,
    documents: &DocumentUploads,
) -> Result<ApplicationForm, ApplicationError> {
    let mut errors = FieldErrors::default();

    let form = ApplicationForm {
        family_card_number: exact_length(
            &mut errors,
            "family_card_number",
            &dto.family_card_number,
            IDENTITY_NUMBER_LENGTH,
        ),
        head_name: required(&mut errors, "head_name", &dto.head_name, Some(MAX_TEXT_LENGTH)),
        head_nik: exact_length(&mut errors, "head_nik", &dto.head_nik, IDENTITY_NUMBER_LENGTH),
        address: required(&mut errors, "address", &dto.address, None),
        rt: bounded(&mut errors, "rt", &dto.rt, MAX_RT_RW_LENGTH),
        rw: bounded(&mut errors, "rw", &dto.rw, MAX_RT_RW_LENGTH),
        sub_district: required(
            &mut errors,
            "sub_district",
            &dto.sub_district,
            Some(MAX_TEXT_LENGTH),
        ),
        district: required(&mut errors, "district", &dto.district, Some(MAX_TEXT_LENGTH)),
        regency: required(&mut errors, "regency", &dto.regency, Some(MAX_TEXT_LENGTH)),
        province: required(&mut errors, "province", &dto.province, Some(MAX_TEXT_LENGTH)),
        postal_code: exact_length(&mut errors, "postal_code", &dto.postal_code, POSTAL_CODE_LENGTH),
        members: validate_members(&mut errors, &dto.members),
    };

    validate_documents(&mut errors, documents);

    if !dto.consent {
        errors.add("consent", "You must confirm the submitted data is truthful");
    }

    if errors.is_empty() {
        Ok(form)
    } else {
        Err(ApplicationError::ValidationFailed(errors))
    }
}

fn validate_members(errors: &mut FieldErrors, members: &[FamilyMemberDto]) -> Vec<MemberForm> {
    if members.is_empty() {
        errors.add("members", "At least one family member is required");
    }

    members
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let key = |field: &str| format!("members.{}.{}", index, field);

            MemberForm {
                name: required(errors, key("name"), &member.name, Some(MAX_TEXT_LENGTH)),
                nik: exact_length(errors, key("nik"), &member.nik, IDENTITY_NUMBER_LENGTH),
                sex: member.sex.into(),
                birth_place: required(
                    errors,
                    key("birth_place"),
                    &member.birth_place,
                    Some(MAX_TEXT_LENGTH),
                ),
                birth_date: member.birth_date,
                religion: required(errors, key("religion"), &member.religion, Some(MAX_TEXT_LENGTH)),
                education: required(
                    errors,
                    key("education"),
                    &member.education,
                    Some(MAX_TEXT_LENGTH),
                ),
                occupation: required(
                    errors,
                    key("occupation"),
                    &member.occupation,
                    Some(MAX_TEXT_LENGTH),
                ),
                marital_status: required(
                    errors,
                    key("marital_status"),
                    &member.marital_status,
                    Some(MAX_TEXT_LENGTH),
                ),
                relationship: required(
                    errors,
                    key("relationship"),
                    &member.relationship,
                    Some(MAX_TEXT_LENGTH),
                ),
                citizenship: required(
                    errors,
                    key("citizenship"),
                    &member.citizenship,
                    Some(MAX_TEXT_LENGTH),
                ),
            }
        })
        .collect()
}

fn validate_documents(errors: &mut FieldErrors, documents: &DocumentUploads) {
    for kind in DocumentKind::ALL {
        let field = kind.field_name();

        let Some(upload) = documents.get(kind) else {
            if kind.is_required() {
                errors.add(field, "This document is required");
            }
            continue;
        };

        if upload.bytes.is_empty() {
            errors.add(field, "The uploaded file is empty");
        }

        if upload.bytes.len() > MAX_DOCUMENT_BYTES {
            errors.add(field, "The uploaded file must not exceed 2 MB");
        }

        let accepted = upload
            .extension()
            .is_some_and(|extension| ACCEPTED_EXTENSIONS.contains(&extension.as_str()));
        if !accepted {
            errors.add(field, "Only PDF, JPG, JPEG or PNG files are accepted");
        }
    }
}

fn required(
    errors: &mut FieldErrors,
    field: impl Into<String>,
    value: &str,
    max: Option<usize>,
) -> String {
    let field = field.into();
    let value = value.trim();

    if value.is_empty() {
        errors.add(field, "This field is required");
    } else if let Some(max) = max {
        if value.chars().count() > max {
            errors.add(field, format!("Must be at most {} characters", max));
        }
    }

    value.to_string()
}

fn bounded(errors: &mut FieldErrors, field: impl Into<String>, value: &str, max: usize) -> String {
    let value = value.trim();

    if value.chars().count() > max {
        errors.add(field, format!("Must be at most {} characters", max));
    }

    value.to_string()
}

fn exact_length(
    errors: &mut FieldErrors,
    field: impl Into<String>,
    value: &str,
    length: usize,
) -> String {
    let value = value.trim();

    if value.chars().count() != length {
        errors.add(field, format!("Must be exactly {} characters", length));
    }

    value.to_string()
}
