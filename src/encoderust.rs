use crate::error::CatResult;
use crate::Encoder;
use crate::GIFFrame;
use crate::Settings;
use rgb::*;
use std::borrow::Cow;
use std::io::Write;

pub(crate) struct RustEncoder<W: Write> {
    writer: Option<W>,
    gif_enc: Option<gif::Encoder<W>>,
}

impl<W: Write> RustEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            gif_enc: None,
        }
    }
}

impl<W: Write> Encoder for RustEncoder<W> {
    fn write_frame(&mut self, f: &GIFFrame, screen: (u16, u16), delay: u16, settings: &Settings) -> CatResult<()> {
        let GIFFrame { ref pal, ref image, dispose } = *f;

        let writer = &mut self.writer;
        let enc = match self.gif_enc {
            None => {
                let w = writer.take().expect("writer");
                let mut enc = gif::Encoder::new(w, screen.0, screen.1, &[])?;
                if !settings.once {
                    enc.set_repeat(gif::Repeat::Infinite)?;
                }
                self.gif_enc.get_or_insert(enc)
            },
            Some(ref mut enc) => enc,
        };

        let mut pal_rgb = Vec::with_capacity(3 * pal.len());
        for p in pal {
            pal_rgb.extend_from_slice([p.rgb()].as_bytes());
        }

        enc.write_frame(&gif::Frame {
            delay,
            dispose,
            width: image.width() as u16,
            height: image.height() as u16,
            palette: Some(pal_rgb),
            buffer: Cow::Borrowed(image.buf()),
            ..gif::Frame::default()
        })?;
        Ok(())
    }

    fn finish(&mut self) -> CatResult<()> {
        if let Some(enc) = self.gif_enc.take() {
            // writes the trailer
            let mut w = enc.into_inner()?;
            w.flush()?;
        }
        Ok(())
    }
}
