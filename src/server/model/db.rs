//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so services and controllers don't import from the generated
//! `entity` crate directly.

/// Type alias for a user identity.
///
/// # Fields (from `entity::kk_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `display_name` - Name shown in the review queue
/// - `email` - Unique contact address
/// - `role` - Citizen or administrator, assigned when the identity is provisioned
/// - `created_at` - Timestamp when the user record was created
pub type UserModel = entity::kk_user::Model;

/// Type alias for a family card application.
///
/// # Fields (from `entity::kk_application::Model`)
/// - `id` - Primary key
/// - `owner_id` - Submitting user
/// - `application_number` - `KK-YYYYMM-NNNN`, unique
/// - `active_owner_id` - `owner_id` while active, NULL once terminal (unique)
/// - household fields - family card number, head of household, address
/// - `status` - Workflow status
/// - `note` - Administrator note
/// - document paths - Relative paths inside the document storage root
/// - `submitted_at` / `completed_at` / `updated_at` - Timestamps
pub type ApplicationModel = entity::kk_application::Model;

/// Type alias for a family member listed on an application.
pub type FamilyMemberModel = entity::kk_family_member::Model;

/// Type alias for the per-month application number counter.
pub type ApplicationSequenceModel = entity::kk_application_sequence::Model;
