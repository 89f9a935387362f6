use std::time::Instant;

use tracing::{debug, info, trace};

use crate::controllers::interactive::commands::Command;
use crate::controllers::interactive::errors::ControllerError;
use crate::controllers::interactive::ports::{FrameSink, GeometryProvider, InputEvent, InputSource};
use crate::core::actions::render_plane::render_plane::render_view;
use crate::core::data::raster_geometry::RasterGeometry;
use crate::core::data::view_state::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Rendered,
    /// Bound, but the view was already where the command would put it.
    Unchanged,
    Ignored,
    Quit,
}

/// Single-threaded interaction loop: one event, one view mutation, one
/// synchronous render.
pub struct InteractiveController<I, G, S> {
    input: I,
    geometry: G,
    sink: S,
    view: ViewState,
}

impl<I, G, S> InteractiveController<I, G, S>
where
    I: InputSource,
    G: GeometryProvider,
    S: FrameSink,
{
    pub fn new(input: I, geometry: G, sink: S) -> Self {
        Self {
            input,
            geometry,
            sink,
            view: ViewState::default(),
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Draws the initial frame, then handles events until a quit command.
    pub fn run(&mut self) -> Result<(), ControllerError> {
        self.redraw()?;

        loop {
            let event = self.input.next_event().map_err(ControllerError::Input)?;

            if self.handle_event(event)? == EventOutcome::Quit {
                info!("quit requested");
                return Ok(());
            }
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<EventOutcome, ControllerError> {
        let Some(command) = Command::from_event(&event) else {
            trace!(?event, "unbound event ignored");
            return Ok(EventOutcome::Ignored);
        };

        if command == Command::Quit {
            return Ok(EventOutcome::Quit);
        }

        let geometry = self.geometry.raster_geometry()?;
        if !command.apply(&mut self.view, geometry.pixel_rect()) {
            trace!(?command, "view unchanged");
            return Ok(EventOutcome::Unchanged);
        }
        debug!(?command, center = %self.view.center, radius = self.view.radius(), depth = self.view.depth(), "view updated");

        self.draw(&geometry)?;

        Ok(EventOutcome::Rendered)
    }

    pub fn redraw(&mut self) -> Result<(), ControllerError> {
        let geometry = self.geometry.raster_geometry()?;

        self.draw(&geometry)
    }

    fn draw(&mut self, geometry: &RasterGeometry) -> Result<(), ControllerError> {
        let pixel_rect = geometry.pixel_rect();
        let start = Instant::now();

        let frame = render_view(&self.view, pixel_rect)?;
        self.sink
            .present_frame(&frame, geometry)
            .map_err(ControllerError::Output)?;

        self.view.last_render_duration = start.elapsed();
        debug!(
            width = pixel_rect.width(),
            height = pixel_rect.height(),
            depth = self.view.depth(),
            elapsed = ?self.view.last_render_duration,
            "frame presented"
        );

        if self.view.show_help || self.view.show_info {
            self.sink
                .present_overlay(&self.view)
                .map_err(ControllerError::Output)?;
        }

        Ok(())
    }
}
