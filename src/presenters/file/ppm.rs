use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the buffer as a binary PPM: `P6`, the dimensions, max colour 255,
/// then raw RGB rows.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    let raster = buffer.raster();

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", raster.width, raster.height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(std::fs::File::create(filepath)?);
        write_ppm(buffer, &mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::raster_size::RasterSize;

    #[test]
    fn test_write_ppm_header_and_body() {
        let mut buffer = PixelBuffer::new(RasterSize::new(2, 1));
        buffer.set_pixel(1, 0, Colour::new(10, 20, 30)).unwrap();

        let mut out = Vec::new();
        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 10, 20, 30]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_presenter_creates_missing_directories() {
        let dir = std::env::temp_dir().join(format!("fractal_explorer_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("out.ppm");
        let buffer = PixelBuffer::new(RasterSize::new(3, 2));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
