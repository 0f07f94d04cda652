use ratatui::layout::{Constraint, Direction, Layout as RatLayout, Rect};

pub struct Layout {
    pub inner_area: Rect, // Area inside the outer border
    pub header_area: Rect,
    pub summary_area: Rect,
    pub main_area: Rect,
    pub status_area: Rect,
}

impl Layout {
    /// Minimum terminal dimensions required for the application.
    /// Width: 40 columns fits a reminder row plus the revealed delete control.
    /// Height: 12 lines (2 outer borders + 1 header + 3 summary + 1 status
    /// + room for a few list rows).
    pub const MIN_WIDTH: u16 = 40;
    pub const MIN_HEIGHT: u16 = 12;

    pub fn calculate(size: Rect) -> Self {
        // Clamp to minimums so widget math never underflows on tiny panes
        let min_width_with_border = Self::MIN_WIDTH + 2;
        let min_height_with_border = Self::MIN_HEIGHT + 2;
        let width = size.width.max(min_width_with_border);
        let height = size.height.max(min_height_with_border);
        let size = Rect::new(size.x, size.y, width, height);

        // Inner area accounts for the outer border: 1 char on each side
        let inner_area = Rect::new(
            size.x + 1,
            size.y + 1,
            size.width.saturating_sub(2),
            size.height.saturating_sub(2),
        );

        let vertical = RatLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Summary line + progress bar
                Constraint::Min(1),    // Reminder list / form / screens
                Constraint::Length(1), // Status bar
            ])
            .split(inner_area);

        Self {
            inner_area,
            header_area: vertical[0],
            summary_area: vertical[1],
            main_area: vertical[2],
            status_area: vertical[3],
        }
    }
}
