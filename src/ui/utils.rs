//! Layout helpers shared by overlays.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Returns a rectangle centered in `area`, sized as percentages of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Returns a `width` x `height` rectangle in the bottom-right corner of
/// `area`, clipped to fit.
pub fn bottom_right_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.right().saturating_sub(width),
        area.bottom().saturating_sub(height),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 80, area);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 40);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 5);
    }

    #[test]
    fn test_bottom_right_rect_clips() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(bottom_right_rect(10, 3, area), Rect::new(20, 7, 10, 3));
        assert_eq!(bottom_right_rect(44, 3, area), Rect::new(0, 7, 30, 3));
    }
}
