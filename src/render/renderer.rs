use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
    Frame,
};

use super::canvas::CellCanvas;
use crate::metrics::GameMetrics;

pub struct Renderer {
    title: String,
}

impl Renderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn render(&self, frame: &mut Frame, canvas: &CellCanvas, metrics: &GameMetrics) {
        let area = frame.area();
        self.render_to(area, frame.buffer_mut(), canvas, metrics);
    }

    /// Draw the whole screen into `buf`
    pub fn render_to(
        &self,
        area: Rect,
        buf: &mut Buffer,
        canvas: &CellCanvas,
        metrics: &GameMetrics,
    ) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Footer
        ])
        .areas(area);

        self.render_stats(metrics).render(header, buf);

        // Board plus its frame, centered
        let [board] = Layout::horizontal([Constraint::Length(canvas.width().saturating_add(2))])
            .flex(Flex::Center)
            .areas(body);
        let [board] = Layout::vertical([Constraint::Length(canvas.height().saturating_add(2))])
            .flex(Flex::Center)
            .areas(board);
        let board = board.intersection(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center);
        let inner = block.inner(board);
        block.render(board, buf);
        canvas.render(inner, buf);

        self.render_controls().render(footer, buf);
    }

    fn render_stats(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(
                metrics.length.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(metrics.resets.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("Snake")
    }
}
