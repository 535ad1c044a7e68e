//! Domain value objects and field formatting.
//!
//! Validation rules for the contact fields (phone, email) and the display
//! transforms used by the contact table and the edit form. Everything here is a
//! pure function of its input.

pub mod birth_date;
pub mod email;
pub mod errors;
pub mod phone;
pub mod whitespace;

pub use birth_date::{to_display_date, to_human_date};
pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
pub use phone::{is_valid_phone, normalize_phone, to_human_phone, PhoneNumber};
pub use whitespace::is_form_whitespace;
