//! Add/edit form bookkeeping.
//!
//! - **draft**: field values and the commit-eligibility rule
//! - **session**: open/closed state and the save/edit enabled flags
//! - **indicator**: idle/loading/error status of store round trips

pub mod draft;
pub mod indicator;
pub mod session;

pub use draft::{is_commit_eligible, ContactDraft, DraftChange, FormMode};
pub use indicator::LoadingIndicator;
pub use session::{ContactForm, FormError, FormSnapshot, FormState};
