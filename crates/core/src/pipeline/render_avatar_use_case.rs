use std::path::Path;

use crate::compositing::circular_image_compositor::{CircularImageCompositor, RenderOutcome};
use crate::compositing::infrastructure::pixmap_surface::PixmapSurface;
use crate::io::domain::image_reader::ImageReader;
use crate::io::domain::image_writer::ImageWriter;
use crate::shared::view_geometry::ViewGeometry;

/// Single-image rendering pipeline: read → composite onto a transparent view → write.
pub struct RenderAvatarUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    compositor: CircularImageCompositor,
}

impl RenderAvatarUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        compositor: CircularImageCompositor,
    ) -> Self {
        Self {
            reader,
            writer,
            compositor,
        }
    }

    /// Renders `input` into a view of the given size and writes the view to `output`.
    ///
    /// Without a view size, the view is a square of the source's smaller side.
    /// An empty view has nothing to draw: no file is written.
    pub fn execute(
        &mut self,
        input: &Path,
        output: &Path,
        view: Option<ViewGeometry>,
    ) -> Result<RenderOutcome, Box<dyn std::error::Error>> {
        let source = self.reader.read(input)?;
        let view = view.unwrap_or_else(|| ViewGeometry::square(source.width().min(source.height())));

        if view.is_empty() {
            log::warn!(
                "View for {} is {}x{}, nothing to draw",
                input.display(),
                view.width,
                view.height
            );
            return Ok(RenderOutcome::SkippedEmptyView);
        }

        let mut surface = PixmapSurface::new(view.width, view.height)?;
        let outcome = self.compositor.render(&mut surface, Some(&source), view);
        drop(source);

        if !outcome.is_drawn() {
            log::warn!("Nothing drawn for {} ({outcome:?})", input.display());
        }
        self.writer.write(output, &surface.to_rgba_image())?;
        let (width, height) = surface.size();
        log::info!("Wrote {width}x{height} view to {}", output.display());
        Ok(outcome)
    }
}
