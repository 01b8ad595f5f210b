//! Frame composition: background first, then every particle.

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use snowfall_core::{CellMetrics, ParticleField};

use crate::background::Background;
use crate::chars::SizeClass;
use crate::color::flake_color;

/// Paints particle fields onto a terminal frame.
#[derive(Debug)]
pub struct Scene {
    /// Background fill.
    background: Background,
    /// Virtual pixels per terminal cell.
    cell: CellMetrics,
}

impl Scene {
    pub fn new(background: Background, cell: CellMetrics) -> Self {
        Self { background, cell }
    }

    pub fn cell_metrics(&self) -> CellMetrics {
        self.cell
    }

    /// Render the background and all particles to the frame.
    pub fn render(&mut self, frame: &mut Frame, field: &ParticleField) {
        let area = frame.area();
        let width = area.width;
        let height = area.height;
        if width == 0 || height == 0 {
            return;
        }

        self.background.prepare(width, height);
        let flakes = self.rasterize(field, width, height);

        let lines: Vec<Line> = (0..height)
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| {
                        let flake = flakes[y as usize * width as usize + x as usize];
                        self.render_cell(x, y, height, flake)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Map every visible particle to its cell. Later particles overwrite
    /// earlier ones sharing a cell.
    fn rasterize(
        &self,
        field: &ParticleField,
        width: u16,
        height: u16,
    ) -> Vec<Option<SizeClass>> {
        let mut grid = vec![None; width as usize * height as usize];
        field.for_each(|particle| {
            let position = particle.position();
            if let Some((x, y)) = self.cell.cell_at(position.x, position.y)
                && x < width
                && y < height
            {
                grid[y as usize * width as usize + x as usize] =
                    Some(SizeClass::of(particle.size()));
            }
        });
        grid
    }

    fn render_cell(
        &self,
        x: u16,
        y: u16,
        height: u16,
        flake: Option<SizeClass>,
    ) -> Span<'static> {
        let style = Style::new().bg(self.background.color_at(x, y, height));
        match flake {
            Some(class) => Span::styled(class.glyph().to_string(), style.fg(flake_color(class))),
            None => Span::styled(" ", style),
        }
    }
}
