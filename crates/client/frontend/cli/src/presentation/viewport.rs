//! Mapping between arena coordinates and terminal cells.
//!
//! The arena is stretched over whatever cells the layout leaves for it, so
//! the two axes scale independently. A cell stands for the arena point at its
//! center.
use game_core::{Bounds, Point};
use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub arena_width: f64,
    pub arena_height: f64,
}

impl Viewport {
    pub fn new(area: Rect, arena_width: f64, arena_height: f64) -> Self {
        Self {
            area,
            arena_width,
            arena_height,
        }
    }

    /// Arena x in fractional cells from the left edge of the area.
    fn cols(&self, x: f64) -> f64 {
        x * f64::from(self.area.width) / self.arena_width
    }

    fn rows(&self, y: f64) -> f64 {
        y * f64::from(self.area.height) / self.arena_height
    }

    pub fn is_empty(&self) -> bool {
        self.area.width == 0 || self.area.height == 0
    }

    /// Arena point under a terminal cell, or `None` outside the arena area.
    pub fn to_arena(&self, column: u16, row: u16) -> Option<Point> {
        if self.is_empty() || !self.area.contains((column, row).into()) {
            return None;
        }
        let col = f64::from(column - self.area.x) + 0.5;
        let row = f64::from(row - self.area.y) + 0.5;
        Some(Point::new(
            col * self.arena_width / f64::from(self.area.width),
            row * self.arena_height / f64::from(self.area.height),
        ))
    }

    /// Cell holding an arena point, or `None` if the point is off the arena.
    pub fn cell_of(&self, point: Point) -> Option<(u16, u16)> {
        if self.is_empty()
            || !(0.0..=self.arena_width).contains(&point.x)
            || !(0.0..=self.arena_height).contains(&point.y)
        {
            return None;
        }
        let col = (self.cols(point.x) as u16).min(self.area.width - 1);
        let row = (self.rows(point.y) as u16).min(self.area.height - 1);
        Some((self.area.x + col, self.area.y + row))
    }

    /// Cells touched by an arena rectangle, clipped to the arena area.
    ///
    /// Returns `None` when nothing of the rectangle is on screen, e.g. a flyer
    /// still entering from off-arena.
    pub fn to_cells(&self, bounds: Bounds) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        let (left, right) = span(
            self.cols(bounds.x),
            self.cols(bounds.max_x()),
            self.area.width,
        )?;
        let (top, bottom) = span(
            self.rows(bounds.y),
            self.rows(bounds.max_y()),
            self.area.height,
        )?;
        Some(Rect::new(
            self.area.x + left,
            self.area.y + top,
            right - left,
            bottom - top,
        ))
    }
}

fn span(start: f64, end: f64, limit: u16) -> Option<(u16, u16)> {
    let limit_f = f64::from(limit);
    if end <= 0.0 || start >= limit_f {
        return None;
    }
    let first = start.max(0.0).floor() as u16;
    let last = (end.min(limit_f).ceil() as u16).max(first + 1).min(limit);
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Rect::new(2, 3, 130, 72), 1300.0, 720.0)
    }

    #[test]
    fn cell_centers_map_into_the_arena() {
        let view = viewport();
        assert_eq!(view.to_arena(2, 3), Some(Point::new(5.0, 5.0)));
        assert_eq!(view.to_arena(67, 39), Some(Point::new(655.0, 365.0)));
        assert_eq!(view.to_arena(1, 3), None);
        assert_eq!(view.to_arena(132, 10), None);
    }

    #[test]
    fn bounds_cover_touched_cells() {
        let view = viewport();
        let rect = view.to_cells(Bounds::new(100.0, 400.0, 50.0, 50.0)).unwrap();
        assert_eq!(rect, Rect::new(12, 43, 5, 5));

        let partial = view.to_cells(Bounds::new(104.0, 400.0, 50.0, 50.0)).unwrap();
        assert_eq!(partial.x, 12);
        assert_eq!(partial.width, 6);
    }

    #[test]
    fn offscreen_flyers_are_clipped() {
        let view = viewport();
        assert_eq!(view.to_cells(Bounds::new(-60.0, 100.0, 60.0, 60.0)), None);
        assert_eq!(view.to_cells(Bounds::new(1300.0, 100.0, 60.0, 60.0)), None);

        let entering = view.to_cells(Bounds::new(-30.0, 100.0, 60.0, 60.0)).unwrap();
        assert_eq!(entering.x, 2);
        assert_eq!(entering.width, 3);
    }

    #[test]
    fn points_round_trip_through_cells() {
        let view = viewport();
        let (col, row) = view.cell_of(Point::new(655.0, 365.0)).unwrap();
        assert_eq!((col, row), (67, 39));
        assert_eq!(view.cell_of(Point::new(1300.0, 720.0)), Some((131, 74)));
        assert_eq!(view.cell_of(Point::new(-1.0, 10.0)), None);
    }

    #[test]
    fn empty_area_maps_nothing() {
        let view = Viewport::new(Rect::new(0, 0, 0, 10), 1300.0, 720.0);
        assert_eq!(view.to_arena(0, 0), None);
        assert_eq!(view.to_cells(Bounds::new(0.0, 0.0, 10.0, 10.0)), None);
    }
}
