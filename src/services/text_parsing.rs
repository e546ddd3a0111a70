//! Text parsing collaborator contract
//!
//! Signatures are stored as full HTML; users edit them either as plain forum
//! code or as client-editable HTML depending on their profile preference.
//! The conversions live in the text-parsing engine outside this crate.

/// Conversions between stored HTML, forum code, and client-editable HTML.
pub trait TextParsingService: Send + Sync {
    /// Stored HTML to plain forum code, for plain-text editors.
    fn html_to_forum_code(&self, text: &str) -> String;

    /// Stored HTML to the HTML the rich-text client edits.
    fn html_to_client_html(&self, text: &str) -> String;

    /// Forum code submitted by a plain-text editor to stored HTML.
    fn forum_code_to_html(&self, text: &str) -> String;

    /// Client-edited HTML to sanitized stored HTML.
    fn client_html_to_html(&self, text: &str) -> String;
}
