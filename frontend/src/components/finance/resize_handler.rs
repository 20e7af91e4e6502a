use shared::{effective_pixel_ratio, ChartConfig, DetailsType, LogicalSize, PixelSize};

use super::renderer::Renderer;
use crate::services::canvas::{DrawingContext, Surface, SurfaceError};

/// Lifecycle of the chart surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePhase {
    /// No surface attached, or attached but never sized
    Uninitialized,
    /// Backing store matches the layout box, frame not painted yet
    Sized,
    Painted,
    /// Torn down; resize and repaint requests are ignored
    Detached,
}

/// Keeps the canvas backing store in step with its on-screen size and
/// repaints after every resize.
pub struct ResizeHandler<S: Surface> {
    surface: Option<S>,
    phase: SurfacePhase,
    logical_size: LogicalSize,
}

impl<S: Surface> Default for ResizeHandler<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> ResizeHandler<S> {
    pub fn new() -> Self {
        Self {
            surface: None,
            phase: SurfacePhase::Uninitialized,
            logical_size: LogicalSize::default(),
        }
    }

    pub fn attach(&mut self, surface: S) {
        if self.phase == SurfacePhase::Detached {
            return;
        }
        self.surface = Some(surface);
        self.phase = SurfacePhase::Uninitialized;
    }

    pub fn phase(&self) -> SurfacePhase {
        self.phase
    }

    /// Re-read the layout box, resize the backing store for the display's
    /// pixel ratio, rescale the context and repaint.
    pub fn handle_resize(
        &mut self,
        config: &ChartConfig,
        selection: Option<DetailsType>,
    ) -> Result<(), SurfaceError> {
        if self.phase == SurfacePhase::Detached {
            return Ok(());
        }
        let surface = self.surface.as_mut().ok_or(SurfaceError::SurfaceUnavailable)?;

        let layout = surface.layout_size();
        let ratio = effective_pixel_ratio(surface.device_pixel_ratio());
        surface.set_backing_size(PixelSize::from_logical(layout, ratio));
        surface.context().set_scale(ratio)?;

        self.logical_size = layout;
        self.phase = SurfacePhase::Sized;
        self.repaint(config, selection)
    }

    /// Paint a frame at the current size, sizing the surface first if needed
    pub fn repaint(
        &mut self,
        config: &ChartConfig,
        selection: Option<DetailsType>,
    ) -> Result<(), SurfaceError> {
        match self.phase {
            SurfacePhase::Detached => return Ok(()),
            SurfacePhase::Uninitialized => return self.handle_resize(config, selection),
            SurfacePhase::Sized | SurfacePhase::Painted => {}
        }
        let surface = self.surface.as_mut().ok_or(SurfaceError::SurfaceUnavailable)?;

        Renderer::new(config).render(surface.context(), self.logical_size, selection)?;
        self.phase = SurfacePhase::Painted;
        Ok(())
    }

    /// Release the surface; nothing is drawn after this
    pub fn teardown(&mut self) {
        self.surface = None;
        self.phase = SurfacePhase::Detached;
    }
}
