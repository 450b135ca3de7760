use crate::data::Symbol;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    pub watchlist: Vec<Symbol>,
}

impl MenuView {
    pub fn new(watchlist: Vec<Symbol>) -> Self {
        Self { watchlist }
    }

    pub fn entries(&self) -> Vec<String> {
        self.watchlist
            .iter()
            .enumerate()
            .map(|(idx, symbol)| format!("{}. {}", idx + 1, symbol))
            .collect()
    }

    pub fn instructions(&self) -> String {
        format!(
            "Press 1-{} to change symbol, Backspace for menu, q to exit",
            self.watchlist.len()
        )
    }

    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.entries();
        lines.push(String::new());
        lines.push(self.instructions());
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.watchlist.len() as u16 + 2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let items: Vec<ListItem> = self
            .entries()
            .into_iter()
            .map(|entry| ListItem::new(Line::from(Span::styled(entry, Style::default().fg(Color::White)))))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title("Watchlist")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(list, vertical[0]);

        let hint = Line::from(Span::styled(
            self.instructions(),
            Style::default().fg(Color::Gray),
        ));
        frame.render_widget(Paragraph::new(hint), vertical[1]);
    }
}
