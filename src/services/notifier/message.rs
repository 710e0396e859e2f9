use crate::models::rsvp::{Choice, RsvpResponse};

pub const ATTENDING_YES: &str = "Yes, will attend";
pub const ATTENDING_NO: &str = "No, will not attend";
// Labels follow a "Field: " prefix, so they are sentence-cased
// ("With partner" reads as "with partner" in running text).
pub const COMPANION_YES: &str = "With partner";
pub const COMPANION_NO: &str = "Alone";
pub const COMPANION_NOT_APPLICABLE: &str = "Not applicable";

/// Build the summary sent to the couple's chat.
///
/// The text is sent with HTML parse mode, so guest-typed names are escaped.
pub fn format_message(response: &RsvpResponse) -> String {
    let attending = match response.attending {
        Choice::Yes => ATTENDING_YES,
        Choice::No | Choice::Unset => ATTENDING_NO,
    };

    let companion = match response.effective_companion() {
        Some(Choice::Yes) => COMPANION_YES,
        Some(Choice::No) => COMPANION_NO,
        Some(Choice::Unset) | None => COMPANION_NOT_APPLICABLE,
    };

    [
        "🎊 <b>New invitation response</b>".to_string(),
        String::new(),
        format!("👤 Name: {}", escape_html(&response.full_name())),
        format!("✅ Attending: {}", attending),
        format!("👫 Companion: {}", companion),
    ]
    .join("\n")
}

/// Escape the characters Telegram's HTML mode treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
