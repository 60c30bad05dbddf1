//! Screen geometry shared by drawing and mouse hit testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one slide indicator cell, `[■]`.
pub const INDICATOR_WIDTH: u16 = 3;
/// Gap between two indicator cells.
pub const INDICATOR_GAP: u16 = 1;

/// The three horizontal bands of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub content: Rect,
    pub indicators: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            content: chunks[0],
            indicators: chunks[1],
            status: chunks[2],
        }
    }

    /// One rect per slide indicator, centered in the indicator row.
    /// Indicators that do not fit are omitted.
    pub fn indicator_cells(&self, total_slides: usize) -> Vec<Rect> {
        let row = self.indicators;
        if total_slides == 0 || row.height == 0 {
            return Vec::new();
        }

        let total = total_slides as u16;
        let needed = total * INDICATOR_WIDTH + (total - 1) * INDICATOR_GAP;
        let start = row.x + row.width.saturating_sub(needed) / 2;

        (0..total)
            .map(|i| Rect {
                x: start + i * (INDICATOR_WIDTH + INDICATOR_GAP),
                y: row.y,
                width: INDICATOR_WIDTH,
                height: 1,
            })
            .filter(|cell| cell.right() <= row.right())
            .collect()
    }

    /// Slide index of the indicator under the given cell, if any
    pub fn indicator_at(&self, total_slides: usize, column: u16, row: u16) -> Option<usize> {
        self.indicator_cells(total_slides)
            .iter()
            .position(|cell| {
                row == cell.y && column >= cell.x && column < cell.right()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn bands_split_the_screen() {
        let layout = layout();
        assert_eq!(layout.content, Rect::new(0, 0, 80, 22));
        assert_eq!(layout.indicators, Rect::new(0, 22, 80, 1));
        assert_eq!(layout.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn indicators_are_centered() {
        let cells = layout().indicator_cells(4);
        // 4 cells of 3 plus 3 gaps = 15 columns, starting at (80 - 15) / 2.
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], Rect::new(32, 22, 3, 1));
        assert_eq!(cells[3], Rect::new(44, 22, 3, 1));
    }

    #[test]
    fn hit_testing_maps_cells_to_slides() {
        let layout = layout();
        assert_eq!(layout.indicator_at(4, 32, 22), Some(0));
        assert_eq!(layout.indicator_at(4, 34, 22), Some(0));
        assert_eq!(layout.indicator_at(4, 36, 22), Some(1));
        assert_eq!(layout.indicator_at(4, 46, 22), Some(3));
    }

    #[test]
    fn gaps_and_other_rows_miss() {
        let layout = layout();
        assert_eq!(layout.indicator_at(4, 35, 22), None);
        assert_eq!(layout.indicator_at(4, 47, 22), None);
        assert_eq!(layout.indicator_at(4, 32, 21), None);
        assert_eq!(layout.indicator_at(4, 32, 23), None);
    }

    #[test]
    fn narrow_terminal_drops_overflowing_cells() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 8, 5));
        assert_eq!(layout.indicator_cells(4).len(), 2);
    }
}
