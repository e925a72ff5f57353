use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::server::model::application::workflow::AdminAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatusDto {
    Pending,
    Verification,
    Printing,
    Completed,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SexDto {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKindDto {
    BirthCertificate,
    HeadIdCard,
    MarriageCertificate,
    RelocationLetter,
}

/// Household data submitted as the `data` part of a new application.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateApplicationDto {
    /// Family card number (`no_kk`), 16 characters
    pub family_card_number: String,
    pub head_name: String,
    /// National ID (NIK) of the head of household, 16 characters
    pub head_nik: String,
    pub address: String,
    pub rt: String,
    pub rw: String,
    pub sub_district: String,
    pub district: String,
    pub regency: String,
    pub province: String,
    pub postal_code: String,
    #[serde(default)]
    pub members: Vec<FamilyMemberDto>,
    /// Applicant confirms the submitted data is truthful
    #[serde(default)]
    pub consent: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FamilyMemberDto {
    pub name: String,
    pub nik: String,
    pub sex: SexDto,
    pub birth_place: String,
    pub birth_date: NaiveDate,
    pub religion: String,
    pub education: String,
    pub occupation: String,
    pub marital_status: String,
    /// Relationship to the head of household
    pub relationship: String,
    pub citizenship: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationSummaryDto {
    pub id: i32,
    pub application_number: String,
    pub family_card_number: String,
    pub head_name: String,
    pub status: ApplicationStatusDto,
    pub submitted_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationDto {
    pub id: i32,
    pub owner_id: i32,
    pub application_number: String,
    pub family_card_number: String,
    pub head_name: String,
    pub head_nik: String,
    pub address: String,
    pub rt: String,
    pub rw: String,
    pub sub_district: String,
    pub district: String,
    pub regency: String,
    pub province: String,
    pub postal_code: String,
    pub status: ApplicationStatusDto,
    pub note: Option<String>,
    pub documents: Vec<DocumentKindDto>,
    pub members: Vec<FamilyMemberDto>,
    pub submitted_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TransitionRequestDto {
    pub action: AdminAction,
    /// Optional note shown to the applicant, e.g. a rejection reason
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NumberAvailabilityDto {
    pub number: String,
    pub available: bool,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApplicationFilterParams {
    /// Only return applications with this status
    pub status: Option<ApplicationStatusDto>,
}

/// Multipart body of a new application, documented for the OpenAPI schema only.
#[derive(ToSchema)]
pub struct CreateApplicationForm {
    /// JSON encoded [`CreateApplicationDto`]
    pub data: CreateApplicationDto,
    /// Birth certificate scan (pdf, jpg, jpeg or png, at most 2 MiB)
    #[schema(value_type = String, format = Binary)]
    pub birth_certificate: Vec<u8>,
    /// ID card (KTP) scan of the head of household
    #[schema(value_type = String, format = Binary)]
    pub head_id_card: Vec<u8>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub marriage_certificate: Option<Vec<u8>>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub relocation_letter: Option<Vec<u8>>,
}
