pub mod chart;
pub mod menu;
pub mod sink;

pub use chart::ChartView;
pub use menu::MenuView;
pub use sink::{RenderSink, TerminalGuard, TerminalSink};

use ratatui::{layout::Rect, Frame};

#[derive(Debug, Clone)]
pub enum View {
    Menu(MenuView),
    Chart(ChartView),
}

impl View {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            View::Menu(menu) => menu.render(frame, area),
            View::Chart(chart) => chart.render(frame, area),
        }
    }

    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        match self {
            View::Menu(menu) => menu.lines(),
            View::Chart(chart) => chart.lines(),
        }
    }
}
