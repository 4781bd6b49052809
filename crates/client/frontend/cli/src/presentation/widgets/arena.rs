//! Playfield with sky, ground, sprites, and the crosshair.
use client_frontend_core::ViewModel;
use game_core::{Point, SessionTime};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

use crate::presentation::{theme::RatatuiTheme, viewport::Viewport};

/// Arena y where the ground band starts.
const GROUND_Y: f64 = 400.0;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    crosshair: Option<Point>,
    now: SessionTime,
    theme: &RatatuiTheme,
) {
    let block = Block::default().borders(Borders::ALL).title("Chicken Hunt");
    let viewport = Viewport::new(block.inner(area), view_model.arena_width, view_model.arena_height);
    frame.render_widget(block, area);

    if viewport.is_empty() {
        return;
    }

    let buf = frame.buffer_mut();
    paint_background(buf, &viewport, theme);

    for sprite in &view_model.sprites {
        let Some(rect) = viewport.to_cells(sprite.bounds_at(now)) else {
            continue;
        };
        let (glyph, style) = theme.sprite(sprite.kind());
        fill(buf, rect, glyph, style);
    }

    if let Some((col, row)) = crosshair.and_then(|point| viewport.cell_of(point)) {
        if let Some(cell) = buf.cell_mut((col, row)) {
            cell.set_char('+').set_style(theme.crosshair());
        }
    }
}

fn paint_background(buf: &mut Buffer, viewport: &Viewport, theme: &RatatuiTheme) {
    let area = viewport.area;
    buf.set_style(area, theme.sky());

    let ground = viewport.to_cells(game_core::Bounds::new(
        0.0,
        GROUND_Y,
        viewport.arena_width,
        viewport.arena_height - GROUND_Y,
    ));
    if let Some(rect) = ground {
        buf.set_style(rect, theme.ground());
    }
}

fn fill(buf: &mut Buffer, rect: Rect, glyph: char, style: Style) {
    for row in rect.top()..rect.bottom() {
        for col in rect.left()..rect.right() {
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_char(glyph).set_style(style);
            }
        }
    }
}
