pub mod document;
pub mod number;
pub mod validation;
pub mod workflow;

use entity::sea_orm_active_enums::{ApplicationStatus, Sex};

use crate::{
    model::application::{
        ApplicationDto, ApplicationStatusDto, ApplicationSummaryDto, DocumentKindDto,
        FamilyMemberDto, SexDto,
    },
    server::model::{
        application::document::DocumentPaths,
        db::{ApplicationModel, FamilyMemberModel},
    },
};

impl From<ApplicationStatus> for ApplicationStatusDto {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => Self::Pending,
            ApplicationStatus::Verification => Self::Verification,
            ApplicationStatus::Printing => Self::Printing,
            ApplicationStatus::Completed => Self::Completed,
            ApplicationStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<ApplicationStatusDto> for ApplicationStatus {
    fn from(status: ApplicationStatusDto) -> Self {
        match status {
            ApplicationStatusDto::Pending => Self::Pending,
            ApplicationStatusDto::Verification => Self::Verification,
            ApplicationStatusDto::Printing => Self::Printing,
            ApplicationStatusDto::Completed => Self::Completed,
            ApplicationStatusDto::Rejected => Self::Rejected,
        }
    }
}

impl From<Sex> for SexDto {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => Self::Male,
            Sex::Female => Self::Female,
        }
    }
}

impl From<SexDto> for Sex {
    fn from(sex: SexDto) -> Self {
        match sex {
            SexDto::Male => Self::Male,
            SexDto::Female => Self::Female,
        }
    }
}

impl From<FamilyMemberModel> for FamilyMemberDto {
    fn from(member: FamilyMemberModel) -> Self {
        Self {
            name: member.name,
            nik: member.nik,
            sex: member.sex.into(),
            birth_place: member.birth_place,
            birth_date: member.birth_date,
            religion: member.religion,
            education: member.education,
            occupation: member.occupation,
            marital_status: member.marital_status,
            relationship: member.relationship,
            citizenship: member.citizenship,
        }
    }
}

impl From<ApplicationModel> for ApplicationSummaryDto {
    fn from(application: ApplicationModel) -> Self {
        Self {
            id: application.id,
            application_number: application.application_number,
            family_card_number: application.family_card_number,
            head_name: application.head_name,
            status: application.status.into(),
            submitted_at: application.submitted_at,
            completed_at: application.completed_at,
        }
    }
}

impl From<(ApplicationModel, Vec<FamilyMemberModel>)> for ApplicationDto {
    fn from((application, members): (ApplicationModel, Vec<FamilyMemberModel>)) -> Self {
        let documents: Vec<DocumentKindDto> = DocumentPaths::from_application(&application)
            .kinds()
            .into_iter()
            .map(DocumentKindDto::from)
            .collect();

        Self {
            id: application.id,
            owner_id: application.owner_id,
            application_number: application.application_number,
            family_card_number: application.family_card_number,
            head_name: application.head_name,
            head_nik: application.head_nik,
            address: application.address,
            rt: application.rt,
            rw: application.rw,
            sub_district: application.sub_district,
            district: application.district,
            regency: application.regency,
            province: application.province,
            postal_code: application.postal_code,
            status: application.status.into(),
            note: application.note,
            documents,
            members: members.into_iter().map(FamilyMemberDto::from).collect(),
            submitted_at: application.submitted_at,
            completed_at: application.completed_at,
        }
    }
}
