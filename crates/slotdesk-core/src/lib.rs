pub mod domain;
pub mod dto;
pub mod error;
pub mod messages;
pub mod permissions;
pub mod rules;
pub mod time;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use messages::{Locale, MessageCatalog, RenderedViolation};
pub use permissions::{
    is_allowed, permission_matrix, FormAction, FormPermissionRow, FormResource, Grant, GrantScope,
    Subject,
};
pub use rules::*;
