mod frame;
mod null_renderer;
mod primitives;
mod text_measurer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, TextHAlign, TextPrimitive};
pub use text_measurer::{HeuristicTextMeasurer, LabelFont, TextExtent, TextMeasurer};

use crate::error::AxisResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from tick selection and label layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()>;
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()> {
        (**self).render(frame)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoTextMeasurer};
