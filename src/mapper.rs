use derive_getters::Getters;
use derive_new::new;

use crate::point::Point;
use crate::vector::Vector2;

/// Position on the rendering surface, in surface units. `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, new)]
pub struct SurfacePosition {
    pub x: f64,
    pub y: f64,
}

/// Maps between the data space `[0, extent]²` and a rendering surface whose
/// vertical axis points the other way.
///
/// The scale (surface units per data unit) belongs to the renderer and is
/// passed in on every call. Nothing is clamped: positions outside the surface
/// map to points outside the data space.
#[derive(Clone, Copy, Debug, PartialEq, new, Getters)]
pub struct CoordinateMapper {
    extent: f64,
}

impl CoordinateMapper {
    pub fn to_surface(&self, point: Point, scale: f64) -> SurfacePosition {
        self.vector_to_surface(point.into(), scale)
    }

    /// [`Self::to_surface`] for undigitized data-space coordinates, such as a
    /// sample mean or the end of a principal axis.
    pub fn vector_to_surface(&self, v: Vector2, scale: f64) -> SurfacePosition {
        SurfacePosition::new(v.x * scale, (self.extent - v.y) * scale)
    }

    /// Inverse of [`Self::to_surface`], followed by digitization.
    pub fn to_data(&self, pos: SurfacePosition, scale: f64) -> Point {
        Point::new(pos.x / scale, self.extent - pos.y / scale)
    }

    /// Scale for a surface of the given width showing the whole data space.
    pub fn scale_for_width(&self, width: f64) -> f64 {
        width / self.extent
    }
}
