use std::path::PathBuf;

use clap::Parser;
use fractal_explorer::{
    MandelbrotConfig, PpmFilePresenter, RasterSize, SnapshotController, SnapshotRequest, Viewport,
    ViewportError,
};

/// Renders one Mandelbrot view off-screen and saves it as a binary PPM.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Iteration budget per pixel
    #[arg(long, default_value_t = 100)]
    max_iterations: u32,

    /// Viewport left edge, in raster units of the default view; defaults to 0
    #[arg(long, allow_hyphen_values = true)]
    x: Option<f64>,

    /// Viewport top edge, in raster units of the default view; defaults to 0
    #[arg(long, allow_hyphen_values = true)]
    y: Option<f64>,

    /// Viewport width; defaults to the image width
    #[arg(long)]
    view_width: Option<f64>,

    /// Viewport height; defaults to the image height
    #[arg(long)]
    view_height: Option<f64>,

    /// Output path for the PPM file
    #[arg(short, long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

/// Builds the render request. Without any view flag the renderer picks the
/// raster-sized default view itself.
fn request_from(args: &Args) -> Result<SnapshotRequest, ViewportError> {
    let raster = RasterSize::new(args.width, args.height);
    let has_view = args.x.is_some()
        || args.y.is_some()
        || args.view_width.is_some()
        || args.view_height.is_some();

    let viewport = if has_view {
        Some(Viewport::new(
            args.x.unwrap_or(0.0),
            args.y.unwrap_or(0.0),
            args.view_width.unwrap_or(f64::from(args.width)),
            args.view_height.unwrap_or(f64::from(args.height)),
        )?)
    } else {
        None
    };

    Ok(SnapshotRequest {
        viewport,
        mandelbrot: MandelbrotConfig {
            max_iterations: args.max_iterations,
            ..MandelbrotConfig::default()
        },
        ..SnapshotRequest::new(raster)
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let request = request_from(&args)?;

    let mut controller = SnapshotController::new(PpmFilePresenter::new());
    controller.generate(&request)?;
    controller.write(&args.output)?;

    println!("Saved to {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractal_explorer::{SnapshotError, render_snapshot};

    #[test]
    fn zero_width_without_view_flags_reports_empty_raster() {
        let args = Args::parse_from(["fractal_explorer", "--width", "0"]);
        let request = request_from(&args).unwrap();

        assert_eq!(request.viewport, None);
        assert!(matches!(
            render_snapshot(&request),
            Err(SnapshotError::EmptyRaster(raster)) if raster == RasterSize::new(0, 600)
        ));
    }

    #[test]
    fn view_flags_build_an_explicit_viewport() {
        let args = Args::parse_from(["fractal_explorer", "--x", "-20", "--view-width", "400"]);
        let request = request_from(&args).unwrap();

        assert_eq!(request.viewport, Some(Viewport::new(-20.0, 0.0, 400.0, 600.0).unwrap()));
        assert_eq!(request.mandelbrot.max_iterations, 100);
    }

    #[test]
    fn degenerate_view_flags_are_rejected() {
        let args = Args::parse_from(["fractal_explorer", "--view-height", "0"]);

        assert!(request_from(&args).is_err());
    }
}
