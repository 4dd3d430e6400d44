/// Window scroll position that puts an element `header_offset` pixels below
/// the top of the viewport, so the fixed nav bar does not cover it.
pub fn scroll_target(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    (element_top + page_y_offset - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HEADER_OFFSET_PX;

    #[test]
    fn accounts_for_current_scroll_and_header() {
        assert_eq!(scroll_target(600.0, 1_200.0, HEADER_OFFSET_PX), 1_720.0);
    }

    #[test]
    fn element_above_the_viewport() {
        assert_eq!(scroll_target(-300.0, 1_000.0, HEADER_OFFSET_PX), 620.0);
    }

    #[test]
    fn never_scrolls_past_the_top() {
        assert_eq!(scroll_target(20.0, 0.0, HEADER_OFFSET_PX), 0.0);
    }
}
