use crate::ui::View;
use ratatui::{backend::Backend, DefaultTerminal, Terminal};
use std::io;

/// Clear-and-redraw output surface. Only the display task writes to it.
pub trait RenderSink: Send {
    fn draw(&mut self, view: &View) -> io::Result<()>;
}

pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend + Send> RenderSink for TerminalSink<B> {
    fn draw(&mut self, view: &View) -> io::Result<()> {
        self.terminal.draw(|frame| view.render(frame, frame.area()))?;
        Ok(())
    }
}

/// Holds raw mode and the alternate screen; restores the terminal on drop.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn acquire() -> io::Result<(Self, DefaultTerminal)> {
        let terminal = ratatui::try_init()?;
        Ok((Self { _private: () }, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = ratatui::try_restore() {
            eprintln!("failed to restore terminal: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_watchlist;
    use crate::data::{PriceSeries, Symbol};
    use crate::ui::{ChartView, MenuView};
    use chrono::Local;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn sink() -> TerminalSink<TestBackend> {
        TerminalSink::new(Terminal::new(TestBackend::new(120, 20)).unwrap())
    }

    #[test]
    fn test_chart_draw_shows_last_price_and_timestamp() {
        let mut sink = sink();
        let series = PriceSeries::new(Symbol::new("LTC_USD").unwrap(), vec![70.0, 71.5, 72.126]);
        let view = ChartView::new(&series, Local::now()).unwrap();
        let date = view.date_line();

        sink.draw(&View::Chart(view)).unwrap();

        let screen = rows(sink.backend().buffer());
        assert_eq!(screen[0], "LTC_USD: 72.13");
        assert!(screen[1].contains("72.13"));
        assert!(screen.iter().any(|row| row == &date));
        assert!(screen.iter().any(|row| row.starts_with("Time: ")));
    }

    #[test]
    fn test_menu_draw_replaces_chart() {
        let mut sink = sink();
        let series = PriceSeries::new(Symbol::new("BTC_USD").unwrap(), vec![1.0, 2.0]);
        sink.draw(&View::Chart(ChartView::new(&series, Local::now()).unwrap()))
            .unwrap();
        sink.draw(&View::Menu(MenuView::new(default_watchlist())))
            .unwrap();

        let screen = rows(sink.backend().buffer());
        assert!(screen.iter().all(|row| !row.contains("BTC_USD: 2.00")));
        assert!(screen.iter().any(|row| row.contains("1. BTC_USD")));
        assert!(screen.iter().any(|row| row.contains("3. ETH_USD")));
        assert!(screen
            .iter()
            .any(|row| row.contains("Press 1-3 to change symbol")));
    }
}
