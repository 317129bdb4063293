//! Feedback panel state and presentation helpers.
//!
//! DESIGN
//! ======
//! The server owns feedback records; the client only orders and decorates
//! whatever list it receives. Ordering is newest first by `created_at`, with
//! entries lacking a parseable timestamp kept after dated ones in their
//! original relative order.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::cmp::Reverse;

use time::{OffsetDateTime, UtcOffset};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use super::session::Session;
use crate::net::types::Feedback;

/// Avatar palette indexed by the username's first UTF-16 code unit.
pub const AVATAR_COLORS: [&str; 6] = ["#FF6B6B", "#4ECDC4", "#FFD166", "#2D3047", "#06D6A0", "#EF476F"];

/// Counter colors for the feedback text box.
pub const CHAR_COUNT_OK: &str = "#06D6A0";
pub const CHAR_COUNT_NEAR: &str = "#FFD166";
pub const CHAR_COUNT_LIMIT: &str = "#EF476F";

/// Label for entries without a usable timestamp.
pub const UNDATED_LABEL: &str = "Just now";

/// What the feedback list currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FeedbackList {
    #[default]
    Loading,
    Loaded(Vec<Feedback>),
    Failed,
}

impl FeedbackList {
    /// Number of entries for the counter. Zero unless loaded.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Loaded(items) => items.len(),
            Self::Loading | Self::Failed => 0,
        }
    }
}

/// Feedback panel state: list, draft text, and submit button status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackState {
    pub list: FeedbackList,
    pub draft: String,
    pub submitting: bool,
}

/// Parse an RFC 3339 timestamp.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()
}

/// Sort newest first. Undated entries go last, keeping their order.
pub fn sort_newest_first(items: &mut [Feedback]) {
    items.sort_by_cached_key(|item| {
        let ts = item.created_at.as_deref().and_then(parse_timestamp);
        (ts.is_none(), Reverse(ts))
    });
}

/// Name shown on an entry: its own username, else the signed-in user.
#[must_use]
pub fn display_username<'a>(item: &'a Feedback, session: &'a Session) -> &'a str {
    item.username
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| session.current_user())
}

/// Deterministic avatar color for `username`.
#[must_use]
pub fn avatar_color(username: &str) -> &'static str {
    let unit = username.encode_utf16().next().map_or(0, usize::from);
    AVATAR_COLORS[unit % AVATAR_COLORS.len()]
}

/// The viewer's current UTC offset. UTC outside the browser.
#[must_use]
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        // JS reports minutes behind UTC, so UTC+8 comes back as -480.
        #[allow(clippy::cast_possible_truncation)]
        let minutes = js_sys::Date::new_0().get_timezone_offset() as i32;
        UtcOffset::from_whole_seconds(-minutes * 60).unwrap_or(UtcOffset::UTC)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UtcOffset::UTC
    }
}

/// Creation time shown at `offset`, e.g. `Mar 1, 2025, 08:15 AM`.
#[must_use]
pub fn date_label(created_at: Option<&str>, offset: UtcOffset) -> String {
    let format = format_description!(
        "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
    );
    created_at
        .and_then(parse_timestamp)
        .and_then(|ts| ts.to_offset(offset).format(format).ok())
        .unwrap_or_else(|| UNDATED_LABEL.to_owned())
}

/// Length of the draft as the browser counts it (UTF-16 code units).
#[must_use]
pub fn char_count(draft: &str) -> usize {
    draft.encode_utf16().count()
}

/// Counter color for a draft of `count` characters.
#[must_use]
pub fn char_count_color(count: usize) -> &'static str {
    if count >= 450 {
        CHAR_COUNT_LIMIT
    } else if count >= 400 {
        CHAR_COUNT_NEAR
    } else {
        CHAR_COUNT_OK
    }
}
