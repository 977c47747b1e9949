use std::path::Path;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use druid::kurbo::Circle;
use druid::kurbo::Line;
use druid::piet::FontFamily;
use druid::piet::StrokeStyle;
use druid::piet::Text;
use druid::piet::TextLayout;
use druid::piet::TextLayoutBuilder;
use druid::Color;
use druid::RenderContext;
use druid::Size;
use log::error;
use log::info;
use piet_common::Device;

use crate::export::export_path;
use crate::export::ExportError;
use crate::formatting::canvas_hint;
use crate::history::PointHistory;
use crate::mapper::CoordinateMapper;
use crate::mapper::SurfacePosition;
use crate::point::Point;
use crate::vector::Vector2;

const POINT_RADIUS_RATIO: f64 = 0.01;
const HINT_FONT_RATIO: f64 = 0.14;
const PCA_COLOR: Color = Color::rgba8(255, 128, 0, 51);
const GHOST_COLOR: Color = Color::rgba8(0, 0, 0, 51);
const DASHES: [f64; 2] = [3.0, 3.0];

/// Everything drawn on the canvas, for a square surface of side `side`.
pub struct Plot<'a> {
    pub mapper: CoordinateMapper,
    pub side: f64,
    pub history: &'a PointHistory,
    pub cursor: Option<Point>,
}

impl Plot<'_> {
    fn to_xy(&self, v: Vector2) -> druid::Point {
        let scale = self.mapper.scale_for_width(self.side);
        let SurfacePosition { x, y } = self.mapper.vector_to_surface(v, scale);
        druid::Point::new(x, y)
    }

    pub fn paint(&self, rc: &mut impl RenderContext, background: &Color) {
        let size = Size::new(self.side, self.side);
        rc.fill(size.to_rect(), background);

        let points = self.history.active_points();
        let n = points.len();
        let radius = self.side * POINT_RADIUS_RATIO;
        for &p in points {
            rc.stroke(Circle::new(self.to_xy(p.into()), radius), &Color::BLUE, 2.0);
        }

        let regression = self.history.regression_snapshot();
        if let (Some(a), Some(b)) = (regression.a, regression.b) {
            let u = *self.mapper.extent();
            let line = Line::new(
                self.to_xy(Vector2::new(0.0, b)),
                self.to_xy(Vector2::new(u, a * u + b)),
            );
            rc.stroke(line, &Color::RED, 2.0);
        }

        let pca = self.history.pca_snapshot();
        if let Some(mean) = pca.mean_point {
            for axis in pca.axes.iter() {
                let line = Line::new(self.to_xy(mean + *axis), self.to_xy(mean - *axis));
                rc.stroke(line, &PCA_COLOR, 10.0);
            }
        }

        if let Some(hint) = canvas_hint(n) {
            let layout = rc
                .text()
                .new_text_layout(hint.text)
                .font(FontFamily::SYSTEM_UI, self.side * HINT_FONT_RATIO)
                .text_color(Color::BLUE.with_alpha(hint.opacity))
                .build();
            match layout {
                Ok(layout) => {
                    let origin = (size.to_vec2() - layout.size().to_vec2()) / 2.0;
                    rc.draw_text(&layout, origin.to_point());
                }
                Err(e) => error!("{}", e),
            }
        }

        if let Some(mean) = pca.mean_point {
            let c = self.to_xy(mean);
            let style = StrokeStyle::new().dash_pattern(&DASHES);
            let vertical = Line::new((c.x, 0.0), (c.x, self.side));
            let horizontal = Line::new((0.0, c.y), (self.side, c.y));
            rc.stroke_styled(vertical, &Color::GRAY, 1.0, &style);
            rc.stroke_styled(horizontal, &Color::GRAY, 1.0, &style);
        }

        if let Some(p) = self.cursor {
            let color = if n > 0 { GHOST_COLOR } else { Color::RED };
            rc.stroke(Circle::new(self.to_xy(p.into()), radius), &color, 2.0);
        }
    }

    /// Renders into a `side`×`side` PNG under `dir`, named by
    /// [`crate::export::export_file_name`].
    pub fn save_image(
        &self,
        dir: impl AsRef<Path>,
        background: &Color,
        timestamp: NaiveDateTime,
    ) -> Result<PathBuf, ExportError> {
        let pixels = (self.side.round() as usize).max(1);
        let mut device = Device::new()?;
        let mut target = device.bitmap_target(pixels, pixels, 1.0)?;
        {
            let mut rc = target.render_context();
            self.paint(&mut rc, background);
            rc.finish()?;
        }
        let path = export_path(
            dir,
            &self.history.regression_snapshot(),
            self.history.active_points().len(),
            timestamp,
            "png",
        );
        target.save_to_file(&path)?;
        info!("Saved image to {}", path.display());
        Ok(path)
    }
}
