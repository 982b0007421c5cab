use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::github::USERS_ENDPOINT;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use crate::ui::users::UsersState;

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, users: &UsersState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (dot_color, summary) = match users {
            UsersState::Loading => (STATUS_PENDING, "loading".to_string()),
            UsersState::Loaded { users } => (STATUS_OK, format!("{} users", users.len())),
            UsersState::Failed { .. } => (STATUS_ERROR, "failed".to_string()),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(dot_color)),
            Span::styled("  octocards", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(USERS_ENDPOINT, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(summary, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
