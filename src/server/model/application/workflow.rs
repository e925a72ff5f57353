//! Application review workflow.
//!
//! [`WorkflowAction::transition_from`] is the only place that knows which actions are legal
//! from which status. Services ask it before touching a record and never branch on status
//! values themselves.
//!
//! ```text
//! Pending ──verify──▶ Verification ──advance_to_printing──▶ Printing ──complete──▶ Completed
//!    │                     │
//!    ├──reject──▶ Rejected ◀──reject──┘
//!    └──cancel (owner)──▶ deleted
//! ```
//!
//! Printing cannot be rejected, once a card is sent to print it can only be completed.

use std::fmt;

use entity::sea_orm_active_enums::ApplicationStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Review actions available to administrators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    /// Accept a pending application for document verification
    Verify,
    /// Reject a pending or in-verification application
    Reject,
    /// Send a verified application to card printing
    AdvanceToPrinting,
    /// Mark a printed card as handed over
    Complete,
}

/// Any action that changes an application after it is submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowAction {
    /// Review step taken by an administrator
    Admin(AdminAction),
    /// Owner withdraws their own application
    OwnerCancel,
}

/// Outcome of a legal action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Record stays, status changes to the given value
    MoveTo(ApplicationStatus),
    /// Record and its documents are removed
    Delete,
}

impl WorkflowAction {
    /// Returns the outcome of applying this action to an application in status `from`, or
    /// `None` when the action is not allowed from that status.
    pub fn transition_from(self, from: ApplicationStatus) -> Option<Transition> {
        use AdminAction::*;
        use ApplicationStatus::*;

        match (from, self) {
            (Pending, Self::Admin(Verify)) => Some(Transition::MoveTo(Verification)),
            (Pending | Verification, Self::Admin(Reject)) => Some(Transition::MoveTo(Rejected)),
            (Verification, Self::Admin(AdvanceToPrinting)) => Some(Transition::MoveTo(Printing)),
            (Printing, Self::Admin(Complete)) => Some(Transition::MoveTo(Completed)),
            (Pending, Self::OwnerCancel) => Some(Transition::Delete),
            _ => None,
        }
    }

    /// Whether only administrators may take this action
    pub fn requires_administrator(self) -> bool {
        matches!(self, Self::Admin(_))
    }
}

impl From<AdminAction> for WorkflowAction {
    fn from(action: AdminAction) -> Self {
        Self::Admin(action)
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Verify => "verify",
            Self::Reject => "reject",
            Self::AdvanceToPrinting => "send to printing",
            Self::Complete => "complete",
        })
    }
}

impl fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin(action) => action.fmt(f),
            Self::OwnerCancel => f.write_str("cancel"),
        }
    }
}
