pub mod console;
pub mod error;
pub mod params;
pub mod repo;
pub mod session;

pub use console::{FormConsole, SubmitOutcome};
pub use error::{ConsoleError, Result};
pub use params::{parse_form_params, FormParamError, FormSubmission};
pub use repo::{FormNew, FormRepository, FormUpdate, InMemoryFormRepository, RepoError};
pub use session::{FormDraft, PendingEdits, SessionId};
