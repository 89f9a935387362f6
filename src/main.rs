use std::io::{self, BufWriter};

use anyhow::Context;
use termbrot::{
    GeometryProvider, InteractiveController, KittyPresenter, TerminalGeometry, TerminalGuard,
    TerminalInput,
};
use tracing::info;

fn run() -> anyhow::Result<()> {
    let geometry = TerminalGeometry;
    // Fail before touching the terminal modes if there is nothing to draw on.
    let initial = geometry
        .raster_geometry()
        .context("this terminal cannot display the fractal")?;
    info!(
        width = initial.pixel_rect().width(),
        height = initial.pixel_rect().height(),
        cell_width = initial.cell_width,
        cell_height = initial.cell_height,
        "starting"
    );

    let _guard = TerminalGuard::new()?;
    let presenter = KittyPresenter::new(BufWriter::new(io::stdout()));
    let mut controller =
        InteractiveController::new(TerminalInput::new(geometry), geometry, presenter);

    controller.run().context("interactive session failed")
}

fn main() -> anyhow::Result<()> {
    termbrot::logging::init()?;

    run()
}
