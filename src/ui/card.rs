//! Card fragments: the visual rendering of one user record.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::github::UserRecord;
use crate::ui::theme::{CARD_HEADING, CARD_LINK, CARD_META};

/// Fixed label of the profile hyperlink.
pub const PROFILE_LABEL: &str = "Profile";

/// Rows a card occupies on screen: three content lines plus the
/// surrounding border.
pub const CARD_HEIGHT: u16 = 5;

/// Static rendering of one user record.
///
/// Built by a pure mapping from the record: no validation, no fallback
/// for empty fields — an empty login or avatar URL renders as an empty
/// element. The key is derived solely from the record's `id`, so an
/// unchanged sequence always produces identically keyed fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFragment {
    key: u64,
    image_source: String,
    image_alt: String,
    heading: String,
    link_target: String,
}

impl CardFragment {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            key: user.id,
            image_source: user.avatar_url.clone(),
            image_alt: user.login.clone(),
            heading: user.login.clone(),
            link_target: user.html_url.clone(),
        }
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn image_source(&self) -> &str {
        &self.image_source
    }

    pub fn image_alt(&self) -> &str {
        &self.image_alt
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn link_target(&self) -> &str {
        &self.link_target
    }

    /// Content lines of the card body: heading, avatar source, link.
    pub fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                self.heading.clone(),
                Style::default().fg(CARD_HEADING),
            )),
            Line::from(vec![
                Span::styled("avatar ", Style::default().fg(CARD_META)),
                Span::raw(self.image_source.clone()),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("{PROFILE_LABEL} → "),
                    Style::default().fg(CARD_META),
                ),
                Span::styled(self.link_target.clone(), Style::default().fg(CARD_LINK)),
            ]),
        ]
    }
}

/// Maps a fetched sequence to card fragments, preserving order and
/// producing exactly one fragment per record.
pub fn build_cards(users: &[UserRecord]) -> Vec<CardFragment> {
    users.iter().map(CardFragment::from_record).collect()
}
