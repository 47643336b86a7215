/*
 framegif numbered PNG frames to animated GIF assembler

 This program is free software: you can redistribute it and/or modify
 it under the terms of the GNU Affero General Public License as
 published by the Free Software Foundation, either version 3 of the
 License, or (at your option) any later version.

 This program is distributed in the hope that it will be useful,
 but WITHOUT ANY WARRANTY; without even the implied warranty of
 MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 GNU Affero General Public License for more details.

 You should have received a copy of the GNU Affero General Public License
 along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

#[macro_use] extern crate quick_error;

use imgref::*;
use rgb::*;

mod error;
pub use crate::error::*;
mod frames;
pub use crate::frames::*;
pub mod progress;
use crate::progress::*;
mod encoderust;
mod quantize;

use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Encoding settings for the `new()` function
#[derive(Copy, Clone, Debug)]
pub struct Settings {
    /// How long each frame is shown, in milliseconds. GIF stores it in 1/100ths of a second, so it's truncated to 10ms steps.
    pub frame_duration_ms: u32,
    /// Accepted, but frames are never blurred.
    ///
    /// TODO: either apply a blur of this radius before quantization or remove the field in the next breaking release.
    pub blur_amount: f32,
    /// 1-100
    pub quality: u8,
    /// If true, looping is disabled
    pub once: bool,
    /// Lower quality, but faster encode
    pub fast: bool,
    /// Drop unused palette entries from every frame
    pub optimize: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_duration_ms: 20,
            blur_amount: 0.5,
            quality: 100,
            once: false,
            fast: false,
            optimize: true,
        }
    }
}

impl Settings {
    /// Per-frame delay in GIF units (1/100th of a second)
    pub fn gif_delay(&self) -> u16 {
        (self.frame_duration_ms / 10).min(u32::from(u16::MAX)) as u16
    }
}

/// Where frames come from and where the GIF goes
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory with `0.png`, `1.png`, … Default `dump/`.
    pub source_dir: PathBuf,
    /// Overwritten if it exists. Default `./galaxy.gif`.
    pub output_path: PathBuf,
    /// Only files whose name ends with this are frames. Default `.png`.
    pub suffix: String,
    pub order: FrameOrder,
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("dump/"),
            output_path: PathBuf::from("./galaxy.gif"),
            suffix: DEFAULT_SUFFIX.to_owned(),
            order: FrameOrder::default(),
            settings: Settings::default(),
        }
    }
}

/// Collect frames that will be encoded
///
/// Frames are decoded and quantized as they're added, and kept in memory until `write()`.
pub struct Collector {
    settings: Settings,
    frames: Vec<GIFFrame>,
}

struct GIFFrame {
    image: ImgVec<u8>,
    pal: Vec<RGBA8>,
    dispose: gif::DisposalMethod,
}

trait Encoder {
    fn write_frame(&mut self, frame: &GIFFrame, screen: (u16, u16), delay: u16, settings: &Settings) -> CatResult<()>;
    fn finish(&mut self) -> CatResult<()> {
        Ok(())
    }
}

/// Start new encoding
///
/// You feed input frames to the `Collector` in display order, and then call `write()`.
pub fn new(mut settings: Settings) -> CatResult<Collector> {
    settings.quality = settings.quality.clamp(1, 100);
    Ok(Collector {
        settings,
        frames: Vec::new(),
    })
}

impl Collector {
    /// Appends a frame after the ones added so far.
    ///
    /// Any alpha channel is dropped.
    pub fn add_frame_rgba(&mut self, image: ImgVec<RGBA8>) -> CatResult<()> {
        if image.width() > usize::from(u16::MAX) || image.height() > usize::from(u16::MAX) {
            return Err(Error::WrongSize(format!("Frame {} is too large for GIF ({}×{})",
                self.frames.len() + 1, image.width(), image.height())));
        }

        let (mut image8, mut pal) = quantize::quantize(image.as_ref(), &self.settings)?;
        if self.settings.optimize {
            quantize::compact_palette(&mut image8, &mut pal);
        }

        self.frames.push(GIFFrame {
            image: image8,
            pal,
            dispose: gif::DisposalMethod::Keep,
        });
        Ok(())
    }

    /// Read and decode a PNG file from disk, and append it as the next frame.
    pub fn add_frame_png_file(&mut self, path: &Path) -> CatResult<()> {
        let image = lodepng::decode32_file(path)
            .map_err(|err| Error::Decode(path.to_owned(), err.to_string()))?;

        self.add_frame_rgba(ImgVec::new(image.buffer, image.width, image.height))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Encode collected frames
    ///
    /// `outfile` can be any writer, such as `File` or `&mut Vec`.
    ///
    /// `ProgressReporter.increase()` is called each time a frame has been written.
    pub fn write<W: Write>(self, writer: W, reporter: &mut dyn ProgressReporter) -> CatResult<()> {
        self.write_with_encoder(&mut encoderust::RustEncoder::new(writer), reporter)
    }

    fn write_with_encoder(self, enc: &mut dyn Encoder, reporter: &mut dyn ProgressReporter) -> CatResult<()> {
        if self.frames.is_empty() {
            return Err(Error::NoFrames);
        }

        // frames of different sizes all start at the top-left corner of the largest one
        let screen_width = self.frames.iter().map(|f| f.image.width()).max().unwrap_or(0);
        let screen_height = self.frames.iter().map(|f| f.image.height()).max().unwrap_or(0);
        let screen = (screen_width as u16, screen_height as u16);

        let delay = self.settings.gif_delay();
        for frame in &self.frames {
            enc.write_frame(frame, screen, delay, &self.settings)?;
            if !reporter.increase() {
                return Err(Error::Aborted);
            }
        }
        enc.finish()
    }
}

/// Scans `config.source_dir` and writes all frames found there to `config.output_path`.
///
/// Returns number of frames in the GIF.
pub fn assemble(config: &Config, reporter: &mut dyn ProgressReporter) -> CatResult<usize> {
    let frames = FrameList::scan(&config.source_dir, &config.suffix, config.order)?;
    assemble_frames(&frames, &config.output_path, config.settings, reporter)
}

/// Decodes every frame in order and writes them as one looping GIF.
///
/// Fails before creating `output_path` if there are no frames or any of them can't be decoded.
/// If writing fails midway, the partial file is left as is.
pub fn assemble_frames(frames: &FrameList, output_path: &Path, settings: Settings, reporter: &mut dyn ProgressReporter) -> CatResult<usize> {
    if frames.is_empty() {
        return Err(Error::NoFrames);
    }

    let mut collector = new(settings)?;
    let mut prev: Option<&FrameFile> = None;
    for frame in frames {
        if let Some(prev) = prev.filter(|p| p.index == frame.index) {
            reporter.error(format!("{} and {} have the same frame number {}",
                prev.path.display(), frame.path.display(), frame.index));
        }
        prev = Some(frame);
        reporter.processing(&frame.path);
        collector.add_frame_png_file(&frame.path)?;
    }

    let file = File::create(output_path)
        .map_err(|err| Error::CreateOutput(output_path.to_owned(), err))?;
    let frame_count = collector.len();
    collector.write(BufWriter::new(file), reporter)?;

    reporter.done(&format!("GIF generated successfully at '{}'.", output_path.display()));
    Ok(frame_count)
}
