// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`pwa-icons` renders a web app icon, `icon.svg`, into the PNG sizes
a PWA manifest expects: `icon-192.png` and `icon-512.png`.

Rendering is done by [resvg](https://github.com/RazrFalcon/resvg) and is
available only when the `raster` feature is enabled (the default).
Without it, [`generate`] prints manual conversion instructions instead.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};

mod error;
#[cfg(feature = "raster")]
mod raster;

pub use error::Error;
#[cfg(feature = "raster")]
pub use raster::SvgRasterizer;

/// Icon sizes to generate, in order.
///
/// Each value is used as both width and height.
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// The source icon file name, relative to the working directory.
pub const SOURCE_ICON: &str = "icon.svg";

/// A web converter suggested when no rasterizer is built in.
pub const FALLBACK_CONVERTER_URL: &str = "https://cloudconvert.com/svg-to-png";

/// A command that installs a build with rasterization enabled.
pub const INSTALL_COMMAND: &str = "cargo install pwa-icons --features raster";

/// Returns the output file name for a size, like `icon-192.png`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

/// An SVG to PNG conversion backend.
pub trait Rasterizer {
    /// Reads and parses the source image at `svg`.
    fn load(&self, svg: &Path) -> Result<Box<dyn Icon>, Error>;
}

/// A parsed source image, ready to be rendered at any size.
pub trait Icon {
    /// Renders the image into a `size`x`size` PNG file at `png`.
    ///
    /// An existing file at `png` is overwritten.
    fn rasterize(&self, size: u32, png: &Path) -> Result<(), Error>;
}

/// Returns the rasterizer built into this crate.
///
/// Returns `None` when the crate was compiled without the `raster` feature.
#[cfg(feature = "raster")]
pub fn default_rasterizer() -> Option<Box<dyn Rasterizer>> {
    Some(Box::new(SvgRasterizer::new()))
}

/// Returns the rasterizer built into this crate.
///
/// Returns `None` when the crate was compiled without the `raster` feature.
#[cfg(not(feature = "raster"))]
pub fn default_rasterizer() -> Option<Box<dyn Rasterizer>> {
    None
}

/// A result of [`generate`].
#[derive(Clone, PartialEq, Debug)]
pub enum Outcome {
    /// All icons were written. Paths follow [`ICON_SIZES`] order.
    Generated(Vec<PathBuf>),
    /// No rasterizer is available. Nothing was written.
    RasterizerUnavailable,
}

/// Renders [`SOURCE_ICON`] inside `dir` into every size from [`ICON_SIZES`].
///
/// Status lines are written to `out`.
/// When `rasterizer` is `None`, prints install instructions and a manual
/// fallback instead and doesn't touch the file system.
///
/// The source is parsed once and reused for every size.
/// Stops at the first failed size. Icons written before it are kept.
pub fn generate(
    dir: &Path,
    rasterizer: Option<&dyn Rasterizer>,
    out: &mut dyn Write,
) -> Result<Outcome, Error> {
    let rasterizer = match rasterizer {
        Some(v) => v,
        None => {
            write_install_help(out).map_err(Error::Output)?;
            return Ok(Outcome::RasterizerUnavailable);
        }
    };

    let svg = dir.join(SOURCE_ICON);
    let icon = rasterizer.load(&svg)?;

    let mut generated = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let name = icon_file_name(size);
        let png = dir.join(&name);
        log::debug!("Rendering {} into {}.", svg.display(), png.display());
        icon.rasterize(size, &png)?;
        writeln!(out, "✓ Generated {}", name).map_err(Error::Output)?;
        generated.push(png);
    }

    writeln!(out, "\n✅ All icons generated successfully!").map_err(Error::Output)?;
    Ok(Outcome::Generated(generated))
}

/// Writes the "no rasterizer" error together with install
/// and manual conversion instructions.
pub fn write_install_help(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "❌ Error: SVG rasterizer not available")?;
    writeln!(out, "\nInstall it with: {}", INSTALL_COMMAND)?;
    writeln!(out, "\nAlternatively, you can use an online converter:")?;
    writeln!(out, "1. Go to {}", FALLBACK_CONVERTER_URL)?;
    writeln!(out, "2. Upload {}", SOURCE_ICON)?;

    let mut step = 3;
    for (i, size) in ICON_SIZES.iter().enumerate() {
        if i == 0 {
            writeln!(
                out,
                "{}. Set width/height to {}px, convert and download as {}",
                step,
                size,
                icon_file_name(*size)
            )?;
        } else {
            writeln!(
                out,
                "{}. Repeat with {}px for {}",
                step,
                size,
                icon_file_name(*size)
            )?;
        }
        step += 1;
    }

    Ok(())
}
