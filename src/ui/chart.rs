use crate::data::{PriceSeries, Symbol};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const CHART_WIDTH: usize = 100;
pub const CHART_HEIGHT: usize = 10;

#[derive(Debug, Clone)]
pub struct ChartView {
    pub symbol: Symbol,
    pub last_price: f64,
    pub plot: Vec<String>,
    pub rendered_at: DateTime<Local>,
}

impl ChartView {
    /// Returns `None` for an empty series.
    pub fn new(series: &PriceSeries, rendered_at: DateTime<Local>) -> Option<Self> {
        let last_price = series.last_price()?;
        Some(Self {
            symbol: series.symbol().clone(),
            last_price,
            plot: plot(series.prices(), CHART_WIDTH, CHART_HEIGHT),
            rendered_at,
        })
    }

    pub fn header(&self) -> String {
        format!("{}: {:.2}", self.symbol, self.last_price)
    }

    pub fn date_line(&self) -> String {
        format!("Date: {}", self.rendered_at.format("%Y-%m-%d"))
    }

    pub fn time_line(&self) -> String {
        format!("Time: {}", self.rendered_at.format("%H:%M:%S"))
    }

    #[cfg(test)]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.plot.len() + 3);
        lines.push(self.header());
        lines.extend(self.plot.iter().cloned());
        lines.push(self.date_line());
        lines.push(self.time_line());
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(self.plot.len() as u16),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let header = Line::from(vec![
            Span::styled(
                format!("{}: ", self.symbol),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:.2}", self.last_price),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), vertical[0]);

        let plot: Vec<Line> = self
            .plot
            .iter()
            .map(|row| Line::from(Span::styled(row.clone(), Style::default().fg(Color::Green))))
            .collect();
        frame.render_widget(Paragraph::new(plot), vertical[1]);

        let stamp = vec![
            Line::from(Span::styled(self.date_line(), Style::default().fg(Color::Gray))),
            Line::from(Span::styled(self.time_line(), Style::default().fg(Color::Gray))),
        ];
        frame.render_widget(Paragraph::new(stamp), vertical[2]);
    }
}

/// Plots `prices` as a `width` x `height` line chart with a price axis on the left.
pub fn plot(prices: &[f64], width: usize, height: usize) -> Vec<String> {
    if prices.is_empty() || width == 0 || height == 0 {
        return Vec::new();
    }

    let data = resample(prices, width);
    let (min_price, max_price) = data
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), &p| (min.min(p), max.max(p)));
    let price_range = max_price - min_price;
    let steps = (height - 1) as f64;

    let row_of = |price: f64| -> usize {
        if price_range <= 0.0 {
            (height - 1) / 2
        } else {
            (((max_price - price) / price_range) * steps).round() as usize
        }
    };

    let mut grid = vec![vec![' '; data.len()]; height];
    for x in 0..data.len().saturating_sub(1) {
        let y0 = row_of(data[x]);
        let y1 = row_of(data[x + 1]);

        if y0 == y1 {
            grid[y0][x] = '─';
        } else if y0 < y1 {
            grid[y0][x] = '╮';
            grid[y1][x] = '╰';
            for row in grid.iter_mut().take(y1).skip(y0 + 1) {
                row[x] = '│';
            }
        } else {
            grid[y0][x] = '╯';
            grid[y1][x] = '╭';
            for row in grid.iter_mut().take(y0).skip(y1 + 1) {
                row[x] = '│';
            }
        }
    }
    if let Some(&last) = data.last() {
        grid[row_of(last)][data.len() - 1] = '─';
    }

    let labels: Vec<String> = (0..height)
        .map(|row| {
            let price = if height == 1 || price_range <= 0.0 {
                max_price
            } else {
                max_price - (row as f64 / steps) * price_range
            };
            format!("{:.2}", price)
        })
        .collect();
    let label_width = labels.iter().map(String::len).max().unwrap_or(0);
    let first_row = row_of(data[0]);

    grid.into_iter()
        .zip(labels)
        .enumerate()
        .map(|(row, (cells, label))| {
            let axis = if row == first_row { '┼' } else { '┤' };
            let body: String = cells.into_iter().collect();
            format!("{:>width$} {}{}", label, axis, body, width = label_width)
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Linear interpolation of `prices` onto exactly `width` points.
fn resample(prices: &[f64], width: usize) -> Vec<f64> {
    if prices.len() == width {
        return prices.to_vec();
    }
    if prices.len() == 1 || width == 1 {
        return vec![prices[prices.len() - 1]; width];
    }

    let span = (prices.len() - 1) as f64;
    (0..width)
        .map(|i| {
            let pos = i as f64 * span / (width - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(prices.len() - 1);
            let frac = pos - lo as f64;
            prices[lo] + (prices[hi] - prices[lo]) * frac
        })
        .collect()
}
