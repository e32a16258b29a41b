//! Panel listing the categories already on the server

use crate::app::App;
use crate::state::CategoryListState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    match &app.state.categories {
        CategoryListState::Loading => {
            let text = Paragraph::new("Loading…")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(text, area);
        }
        CategoryListState::Failed(reason) => {
            let text = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Could not load categories",
                    Style::default().fg(Color::Red),
                )),
                Line::from(Span::styled(
                    reason.as_str(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(text, area);
        }
        CategoryListState::Loaded(categories) if categories.is_empty() => {
            let text = Paragraph::new("No categories yet")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(text, area);
        }
        CategoryListState::Loaded(categories) => {
            let items: Vec<ListItem> = categories
                .iter()
                .map(|c| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:>3} ", c.id),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(c.name.as_str()),
                    ]))
                })
                .collect();
            frame.render_widget(List::new(items).block(block), area);
        }
    }
}
