use std::time::Duration;

use clap::Parser;
use fractal_explorer::{ExplorerSettings, MandelbrotConfig};

/// Interactive Mandelbrot explorer.
///
/// Arrow keys pan, `[` and `]` zoom out and in, `=` resets, and dragging
/// with the left button zooms into the selected rectangle.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Iteration budget per pixel
    #[arg(long, default_value_t = 100)]
    max_iterations: u32,

    /// Pixels evaluated per frame
    #[arg(long, default_value_t = 131_072)]
    batch_size: usize,

    /// Milliseconds a resize must settle before the image is rebuilt
    #[arg(long, default_value_t = 100)]
    resize_settle_ms: u64,

    /// Let drag selections take any shape instead of the window's aspect ratio
    #[arg(long)]
    free_drag: bool,
}

fn settings_from(args: &Args) -> ExplorerSettings {
    ExplorerSettings {
        mandelbrot: MandelbrotConfig {
            max_iterations: args.max_iterations,
            ..MandelbrotConfig::default()
        },
        batch_size: args.batch_size,
        resize_settle: Duration::from_millis(args.resize_settle_ms),
        lock_drag_aspect: !args.free_drag,
        ..ExplorerSettings::default()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    fractal_explorer::run_gui(settings_from(&args))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_selection_follows_window_aspect_by_default() {
        let settings = settings_from(&Args::parse_from(["gui"]));

        assert!(settings.lock_drag_aspect);
        assert_eq!(settings.resize_settle, Duration::from_millis(100));
        assert_eq!(settings.batch_size, 131_072);
    }

    #[test]
    fn free_drag_unlocks_the_selection_shape() {
        let settings = settings_from(&Args::parse_from(["gui", "--free-drag"]));

        assert!(!settings.lock_drag_aspect);
    }
}
