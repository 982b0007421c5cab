use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::card::build_cards;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_rect, layout_regions, visible_card_range};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, STATUS_ERROR};
use crate::ui::users::UsersState;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.users()), header);
    frame.render_widget(Clear, body);

    match app.users() {
        UsersState::Loading => {
            // Loading: the indicator is the only visible output.
            let line = Line::from(format!("{} Loading users...", app.spinner()));
            let widget = Paragraph::new(line).alignment(Alignment::Center);
            let y = body.y + body.height / 2;
            let row = ratatui::layout::Rect {
                x: body.x,
                y: y.min(body.y + body.height.saturating_sub(1)),
                width: body.width,
                height: 1.min(body.height),
            };
            frame.render_widget(widget, row);
        }
        UsersState::Failed { reason } => {
            let lines = vec![
                Line::from("Could not load users."),
                Line::from(reason.clone()),
            ];
            let widget = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().fg(STATUS_ERROR));
            frame.render_widget(widget, body);
        }
        UsersState::Loaded { users } => {
            // One card fragment per record, in received order. An empty
            // sequence leaves the container empty — no placeholder.
            let cards = build_cards(users);
            let range = visible_card_range(body, cards.len(), app.selected());
            for (slot, idx) in range.enumerate() {
                let rect = card_rect(body, slot);
                if rect.height == 0 || rect.width == 0 {
                    continue;
                }
                let selected = idx == app.selected();
                let border = if selected { ACCENT } else { GLOBAL_BORDER };
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border));
                if selected {
                    block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
                }
                let widget = Paragraph::new(cards[idx].lines()).block(block);
                frame.render_widget(widget, rect);
            }
        }
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}
