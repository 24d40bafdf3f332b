use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one card in the grid, borders included
pub const CARD_WIDTH: u16 = 30;
/// Height of one card in the grid, borders included
pub const CARD_HEIGHT: u16 = 8;

/// Layout areas for the browser
pub struct AppLayout {
    pub search_area: Rect,
    pub category_area: Rect,
    pub sort_area: Rect,
    pub cards_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Calculate layout from terminal area
    pub fn new(area: Rect) -> Self {
        // Vertical split: controls + cards + status bar
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Control bar (bordered inputs)
                Constraint::Min(3),    // Card container
                Constraint::Length(1), // Results count / status bar
            ])
            .split(area);

        // Horizontal split of the control bar: search + category + sort
        let control_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(vertical_chunks[0]);

        Self {
            search_area: control_chunks[0],
            category_area: control_chunks[1],
            sort_area: control_chunks[2],
            cards_area: vertical_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}

/// Number of card columns that fit in `width` (at least one)
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// Number of card rows that fit in `height` (at least one)
pub fn grid_rows(height: u16) -> usize {
    usize::from((height / CARD_HEIGHT).max(1))
}

/// Centered rectangle of the given size, clamped to `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_correctly() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area);

        // Controls take the top 3 rows
        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.search_area.y, 0);
        assert_eq!(layout.search_area.width, 50);
        assert_eq!(layout.category_area.width, 25);
        assert_eq!(layout.sort_area.width, 25);

        // Status bar should be 1 row at bottom
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        // Cards get the rest
        assert_eq!(layout.cards_area.height, 26);
        assert_eq!(layout.cards_area.y, 3);
    }

    #[test]
    fn test_layout_minimum_height() {
        let area = Rect::new(0, 0, 100, 7);
        let layout = AppLayout::new(area);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.cards_area.height, 3);
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(29), 1);
        assert_eq!(grid_columns(60), 2);
        assert_eq!(grid_columns(125), 4);
    }

    #[test]
    fn test_grid_rows() {
        assert_eq!(grid_rows(5), 1);
        assert_eq!(grid_rows(16), 2);
        assert_eq!(grid_rows(26), 3);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(40, 4, area);

        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 4);
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 3);
    }
}
