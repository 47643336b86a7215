use crate::error::CatResult;
use crate::Settings;
use imagequant::Attributes;
use imgref::*;
use rgb::*;

/// Remaps the image to its own palette of up to 256 colors.
///
/// Each frame gets an independent palette. Alpha is discarded, so every
/// palette entry is opaque.
pub(crate) fn quantize(image: ImgRef<'_, RGBA8>, settings: &Settings) -> CatResult<(ImgVec<u8>, Vec<RGBA8>)> {
    let mut liq = Attributes::new();
    liq.set_max_colors(256)?;
    if settings.fast {
        liq.set_speed(10)?;
    }
    liq.set_quality(0, settings.quality.min(100))?;

    let opaque: Vec<RGBA8> = image.pixels().map(|px| RGBA8 { a: 255, ..px }).collect();
    let mut img = liq.new_image(opaque, image.width(), image.height(), 0.)?;
    let mut res = liq.quantize(&mut img)?;
    res.set_dithering_level(0.)?;

    let (pal, pal_img) = res.remapped(&mut img)?;
    debug_assert_eq!(image.width() * image.height(), pal_img.len());

    Ok((Img::new(pal_img, image.width(), image.height()), pal))
}

/// Drops palette entries that no pixel uses, and renumbers the pixels to match.
pub(crate) fn compact_palette(image: &mut ImgVec<u8>, pal: &mut Vec<RGBA8>) {
    let mut used = [false; 256];
    for &idx in image.buf().iter() {
        used[idx as usize] = true;
    }

    let mut remap = [0_u8; 256];
    let mut compacted = Vec::with_capacity(pal.len());
    for (i, &color) in pal.iter().enumerate() {
        if used[i] {
            remap[i] = compacted.len() as u8;
            compacted.push(color);
        }
    }
    if compacted.len() == pal.len() {
        return;
    }

    for idx in image.buf_mut().iter_mut() {
        *idx = remap[*idx as usize];
    }
    *pal = compacted;
}
