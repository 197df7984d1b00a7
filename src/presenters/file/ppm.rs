use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes `buffer` as a binary PPM image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
    let geometry = buffer.geometry();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", geometry.width(), geometry.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

/// Saves every presented frame to the same file, overwriting the previous one.
#[derive(Debug)]
pub struct PpmFilePresenter {
    filepath: PathBuf,
}

impl FramePresenterPort for PpmFilePresenter {
    type Failure = std::io::Error;

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), Self::Failure> {
        if let Some(parent) = self.filepath.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(&self.filepath)?;
        write_ppm(frame, BufWriter::new(file))?;

        info!("wrote {}", self.filepath.display());
        Ok(())
    }
}

impl PpmFilePresenter {
    pub fn new(filepath: impl AsRef<Path>) -> Self {
        Self {
            filepath: filepath.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }
}
