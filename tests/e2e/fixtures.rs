//! Sample data for E2E tests.

use chrono::Utc;
use contatos_mcp_server::Contact;

/// Suffix that keeps test records distinguishable between runs.
pub fn unique_suffix() -> String {
    Utc::now().format("%Y%m%d%H%M%S").to_string()
}

/// A valid, unsaved contact whose name and email carry `suffix`.
pub fn sample_contact(suffix: &str) -> Contact {
    Contact::new(
        format!("E2ETest{}", suffix),
        "11987654321",
        format!("e2etest{}@example.com", suffix),
        true,
        "2000-01-05",
    )
}
