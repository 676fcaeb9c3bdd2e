//! Initial placement of windows.
//!
//! Seeded windows are laid out in centered rows by [`compute_initial_position`]. Windows opened
//! later are slotted around whatever is already on screen by [`place_near_open_windows`].

use crate::model::{
    Viewport, WindowId, WindowPosition, WindowRecord, WindowSize, WINDOW_HEIGHT, WINDOW_MARGIN,
    WINDOW_WIDTH,
};

/// Number of default-sized windows that fit side by side, at least one.
pub fn columns_for(viewport: Viewport) -> usize {
    let available = viewport.width - WINDOW_MARGIN * 2;
    let columns = available.div_euclid(WINDOW_WIDTH + WINDOW_MARGIN);
    usize::try_from(columns).unwrap_or(0).max(1)
}

/// Position of window `index` out of `total_count` in a centered, non-overlapping grid.
///
/// Each row is centered on its own occupancy. When the viewport is narrower than one window the
/// row starts at the margin and overflows to the right. Rows that do not fit vertically keep
/// stacking downward.
pub fn compute_initial_position(
    index: usize,
    total_count: usize,
    viewport: Viewport,
) -> WindowPosition {
    let total_count = total_count.max(1);
    let columns = columns_for(viewport);
    let row = index / columns;
    let col = index % columns;

    let in_row = total_count.saturating_sub(row * columns).clamp(1, columns);
    let in_row = i32::try_from(in_row).unwrap_or(i32::MAX);
    let row_width = in_row * WINDOW_WIDTH + (in_row - 1) * WINDOW_MARGIN;
    let start_x = ((viewport.width - row_width) / 2).max(WINDOW_MARGIN);

    let col = i32::try_from(col).unwrap_or(0);
    let row = i32::try_from(row).unwrap_or(0);
    WindowPosition {
        x: start_x + col * (WINDOW_WIDTH + WINDOW_MARGIN),
        y: WINDOW_MARGIN + row * (WINDOW_HEIGHT + WINDOW_MARGIN),
    }
}

/// Picks a spot for a window that is about to appear next to the visible ones.
///
/// Tries directly below the lowest visible window, then to the right of the rightmost one, and
/// falls back to the margin origin. `exclude` keeps the window being opened out of the scan.
pub fn place_near_open_windows(
    windows: &[WindowRecord],
    exclude: Option<&WindowId>,
    size: WindowSize,
    viewport: Viewport,
) -> WindowPosition {
    let origin = WindowPosition::new(WINDOW_MARGIN, WINDOW_MARGIN);
    let open: Vec<&WindowRecord> = windows
        .iter()
        .filter(|w| w.is_visible() && Some(&w.id) != exclude)
        .collect();

    let lowest = open
        .iter()
        .max_by_key(|w| w.position.y + w.effective_size().height);
    let Some(lowest) = lowest else {
        return origin;
    };
    let below = WindowPosition::new(
        lowest.position.x,
        lowest.position.y + lowest.effective_size().height + WINDOW_MARGIN,
    );
    if below.y + size.height <= viewport.height - WINDOW_MARGIN {
        return below;
    }

    let rightmost = open
        .iter()
        .max_by_key(|w| w.position.x + w.effective_size().width);
    if let Some(rightmost) = rightmost {
        let beside = WindowPosition::new(
            rightmost.position.x + rightmost.effective_size().width + WINDOW_MARGIN,
            rightmost.position.y,
        );
        if beside.x + size.width <= viewport.width - WINDOW_MARGIN {
            return beside;
        }
    }

    origin
}

/// Full-width stacked slot used on narrow viewports.
pub fn mobile_slot(order: usize, viewport: Viewport) -> (WindowPosition, WindowSize) {
    let order = i32::try_from(order).unwrap_or(0);
    let width = (viewport.width - WINDOW_MARGIN * 2).max(0);
    (
        WindowPosition::new(
            WINDOW_MARGIN,
            WINDOW_MARGIN + order * (WINDOW_HEIGHT + WINDOW_MARGIN),
        ),
        WindowSize::new(width, WINDOW_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowContent;
    use pretty_assertions::assert_eq;

    fn rects_overlap(a: WindowPosition, b: WindowPosition) -> bool {
        a.x < b.x + WINDOW_WIDTH
            && b.x < a.x + WINDOW_WIDTH
            && a.y < b.y + WINDOW_HEIGHT
            && b.y < a.y + WINDOW_HEIGHT
    }

    fn open_window(id: &str, x: i32, y: i32) -> WindowRecord {
        WindowRecord {
            id: WindowId::new(id),
            title: id.to_string(),
            is_open: true,
            z_index: 1,
            position: WindowPosition::new(x, y),
            size: None,
            last_position: None,
            is_deleted: false,
            content: WindowContent::Hero,
        }
    }

    #[test]
    fn columns_never_drop_below_one() {
        assert_eq!(columns_for(Viewport::new(1200, 800)), 2);
        assert_eq!(columns_for(Viewport::new(1250, 800)), 2);
        assert_eq!(columns_for(Viewport::new(1340, 800)), 3);
        assert_eq!(columns_for(Viewport::new(300, 800)), 1);
        assert_eq!(columns_for(Viewport::new(0, 0)), 1);
    }

    #[test]
    fn layout_never_overlaps() {
        for viewport in [
            Viewport::new(1200, 800),
            Viewport::new(1920, 1080),
            Viewport::new(500, 400),
            Viewport::new(100, 100),
        ] {
            for total in 1..=9 {
                let positions: Vec<_> = (0..total)
                    .map(|i| compute_initial_position(i, total, viewport))
                    .collect();
                for (i, a) in positions.iter().enumerate() {
                    assert!(a.x >= WINDOW_MARGIN && a.y >= WINDOW_MARGIN);
                    for b in &positions[i + 1..] {
                        assert!(!rects_overlap(*a, *b), "{a:?} overlaps {b:?} in {viewport:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn rows_are_centered_and_fit_horizontally() {
        let viewport = Viewport::new(1200, 800);
        let first = compute_initial_position(0, 5, viewport);
        let second = compute_initial_position(1, 5, viewport);
        assert_eq!(first, WindowPosition::new(190, 20));
        assert_eq!(second, WindowPosition::new(610, 20));
        assert!(second.x + WINDOW_WIDTH <= viewport.width - WINDOW_MARGIN);

        // The last row holds a single window and is centered on its own.
        let last = compute_initial_position(4, 5, viewport);
        assert_eq!(last, WindowPosition::new(400, 540));
    }

    #[test]
    fn third_window_of_five_starts_second_row() {
        let viewport = Viewport::new(1200, 800);
        let first = compute_initial_position(0, 5, viewport);
        let third = compute_initial_position(2, 5, viewport);
        assert!(third.y > first.y);
        assert_eq!(third.y, WINDOW_MARGIN + WINDOW_HEIGHT + WINDOW_MARGIN);
    }

    #[test]
    fn short_viewport_keeps_rows_apart_and_overflows_downward() {
        let viewport = Viewport::new(1200, 600);
        let last = compute_initial_position(4, 5, viewport);
        assert_eq!(last, WindowPosition::new(400, 540));
        assert!(last.y + WINDOW_HEIGHT > viewport.height);

        let above = compute_initial_position(2, 5, viewport);
        assert!(!rects_overlap(above, last));
    }

    #[test]
    fn zero_total_is_treated_as_one() {
        let viewport = Viewport::new(1200, 800);
        assert_eq!(
            compute_initial_position(0, 0, viewport),
            compute_initial_position(0, 1, viewport)
        );
    }

    #[test]
    fn degenerate_viewport_clamps_to_margin() {
        assert_eq!(
            compute_initial_position(0, 1, Viewport::new(200, 100)),
            WindowPosition::new(WINDOW_MARGIN, WINDOW_MARGIN)
        );
    }

    #[test]
    fn placement_falls_back_to_origin_without_open_windows() {
        let viewport = Viewport::new(1200, 800);
        let mut closed = open_window("a", 300, 300);
        closed.is_open = false;
        assert_eq!(
            place_near_open_windows(&[closed], None, WindowSize::default(), viewport),
            WindowPosition::new(WINDOW_MARGIN, WINDOW_MARGIN)
        );
    }

    #[test]
    fn placement_prefers_below_the_lowest_window() {
        let viewport = Viewport::new(1200, 800);
        let windows = [open_window("a", 20, 20), open_window("b", 440, 100)];
        assert_eq!(
            place_near_open_windows(&windows, None, WindowSize::default(), viewport),
            WindowPosition::new(440, 360)
        );
    }

    #[test]
    fn placement_goes_beside_when_below_does_not_fit() {
        let viewport = Viewport::new(1200, 600);
        let windows = [open_window("a", 20, 300), open_window("b", 100, 20)];
        assert_eq!(
            place_near_open_windows(&windows, None, WindowSize::default(), viewport),
            WindowPosition::new(520, 20)
        );
    }

    #[test]
    fn placement_ignores_the_excluded_window() {
        let viewport = Viewport::new(1200, 800);
        let windows = [open_window("self", 20, 20)];
        let id = WindowId::new("self");
        assert_eq!(
            place_near_open_windows(&windows, Some(&id), WindowSize::default(), viewport),
            WindowPosition::new(WINDOW_MARGIN, WINDOW_MARGIN)
        );
    }

    #[test]
    fn mobile_slots_stack_full_width() {
        let (position, size) = mobile_slot(1, Viewport::new(375, 700));
        assert_eq!(position, WindowPosition::new(20, 280));
        assert_eq!(size, WindowSize::new(335, WINDOW_HEIGHT));
    }
}
