//! Supporting documents uploaded with an application.

use crate::{model::application::DocumentKindDto, server::model::db::ApplicationModel};

/// Largest accepted document, 2 MiB.
pub const MAX_DOCUMENT_BYTES: usize = 2 * 1024 * 1024;

/// File extensions accepted for scanned documents.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// Kinds of supporting document an application can carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Akta kelahiran, required
    BirthCertificate,
    /// KTP of the head of family, required
    HeadIdCard,
    /// Buku nikah, optional
    MarriageCertificate,
    /// Surat pindah, optional
    RelocationLetter,
}

impl DocumentKind {
    /// Every kind, in the order documents are listed
    pub const ALL: [DocumentKind; 4] = [
        Self::BirthCertificate,
        Self::HeadIdCard,
        Self::MarriageCertificate,
        Self::RelocationLetter,
    ];

    /// Multipart field name the document is uploaded under.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::BirthCertificate => "birth_certificate",
            Self::HeadIdCard => "head_id_card",
            Self::MarriageCertificate => "marriage_certificate",
            Self::RelocationLetter => "relocation_letter",
        }
    }

    /// Storage bucket (sub-directory) the document is written to.
    pub fn bucket(self) -> &'static str {
        match self {
            Self::BirthCertificate => "birth-certificates",
            Self::HeadIdCard => "id-cards",
            Self::MarriageCertificate => "marriage-certificates",
            Self::RelocationLetter => "relocation-letters",
        }
    }

    /// Whether an application is rejected without this document
    pub fn is_required(self) -> bool {
        matches!(self, Self::BirthCertificate | Self::HeadIdCard)
    }

    /// Kind uploaded under a multipart field name
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.field_name() == name)
    }
}

impl From<DocumentKind> for DocumentKindDto {
    fn from(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::BirthCertificate => Self::BirthCertificate,
            DocumentKind::HeadIdCard => Self::HeadIdCard,
            DocumentKind::MarriageCertificate => Self::MarriageCertificate,
            DocumentKind::RelocationLetter => Self::RelocationLetter,
        }
    }
}

/// A single uploaded file, held in memory until it is staged to storage.
#[derive(Clone, Debug)]
pub struct DocumentUpload {
    /// Name the client gave the file
    pub file_name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    /// Creates a new instance of [`DocumentUpload`]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Lowercased extension of the original file name, if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_ascii_lowercase())
            .filter(|extension| !extension.is_empty())
    }
}

/// The documents submitted with one application, at most one per kind.
#[derive(Clone, Debug, Default)]
pub struct DocumentUploads {
    /// Birth certificate upload
    pub birth_certificate: Option<DocumentUpload>,
    /// Head of family ID card upload
    pub head_id_card: Option<DocumentUpload>,
    /// Marriage certificate upload
    pub marriage_certificate: Option<DocumentUpload>,
    /// Relocation letter upload
    pub relocation_letter: Option<DocumentUpload>,
}

impl DocumentUploads {
    /// Upload of the given kind, if submitted.
    pub fn get(&self, kind: DocumentKind) -> Option<&DocumentUpload> {
        match kind {
            DocumentKind::BirthCertificate => self.birth_certificate.as_ref(),
            DocumentKind::HeadIdCard => self.head_id_card.as_ref(),
            DocumentKind::MarriageCertificate => self.marriage_certificate.as_ref(),
            DocumentKind::RelocationLetter => self.relocation_letter.as_ref(),
        }
    }

    /// Stores an upload, replacing an earlier one of the same kind.
    pub fn set(&mut self, kind: DocumentKind, upload: DocumentUpload) {
        let slot = match kind {
            DocumentKind::BirthCertificate => &mut self.birth_certificate,
            DocumentKind::HeadIdCard => &mut self.head_id_card,
            DocumentKind::MarriageCertificate => &mut self.marriage_certificate,
            DocumentKind::RelocationLetter => &mut self.relocation_letter,
        };

        *slot = Some(upload);
    }

    /// Submitted documents in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (DocumentKind, &DocumentUpload)> {
        DocumentKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|upload| (kind, upload)))
    }
}

/// Storage paths of an application's documents, relative to the storage root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentPaths {
    /// Birth certificate path
    pub birth_certificate: Option<String>,
    /// Head of family ID card path
    pub head_id_card: Option<String>,
    /// Marriage certificate path
    pub marriage_certificate: Option<String>,
    /// Relocation letter path
    pub relocation_letter: Option<String>,
}

impl DocumentPaths {
    /// Records where a document of `kind` was stored.
    pub fn set(&mut self, kind: DocumentKind, path: String) {
        let slot = match kind {
            DocumentKind::BirthCertificate => &mut self.birth_certificate,
            DocumentKind::HeadIdCard => &mut self.head_id_card,
            DocumentKind::MarriageCertificate => &mut self.marriage_certificate,
            DocumentKind::RelocationLetter => &mut self.relocation_letter,
        };

        *slot = Some(path);
    }

    /// Paths stored on an application row.
    pub fn from_application(application: &ApplicationModel) -> Self {
        Self {
            birth_certificate: application.birth_certificate_path.clone(),
            head_id_card: application.head_id_card_path.clone(),
            marriage_certificate: application.marriage_certificate_path.clone(),
            relocation_letter: application.relocation_letter_path.clone(),
        }
    }

    /// Kinds that have a stored path.
    pub fn kinds(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .collect()
    }

    /// Path of the given kind, if stored.
    pub fn get(&self, kind: DocumentKind) -> Option<&String> {
        match kind {
            DocumentKind::BirthCertificate => self.birth_certificate.as_ref(),
            DocumentKind::HeadIdCard => self.head_id_card.as_ref(),
            DocumentKind::MarriageCertificate => self.marriage_certificate.as_ref(),
            DocumentKind::RelocationLetter => self.relocation_letter.as_ref(),
        }
    }

    /// Every stored path.
    pub fn into_vec(self) -> Vec<String> {
        [
            self.birth_certificate,
            self.head_id_card,
            self.marriage_certificate,
            self.relocation_letter,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
