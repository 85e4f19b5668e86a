use crate::repo::RepoError;
use slotdesk_core::{FormAction, FormId, ViolationCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("{subject} is not allowed to {action:?} this resource")]
    Forbidden { subject: String, action: FormAction },
    #[error("form not found: {0}")]
    NotFound(FormId),
    #[error("form {form_id} breaks {} constraint(s)", .violations.len())]
    InvalidForm {
        form_id: FormId,
        violations: Vec<ViolationCode>,
    },
    #[error("no pending edit for this session")]
    NoPendingEdit,
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
