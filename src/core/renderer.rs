/// Renderer trait: pure drawing, no game logic
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait GameRenderer<S> {
    /// Render `state` into the Ratatui frame
    fn render(frame: &mut Frame, state: &S);
}

/// A `width` x `height` box centered in `area`, clamped to fit.
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
    fn centers_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn clamps_to_small_areas() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(centered_rect(40, 10, area), Rect::new(2, 3, 10, 4));
    }
}
