// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

use usvg::fontdb;

use crate::{Error, Icon, Rasterizer};

/// A [`Rasterizer`] backed by `resvg`.
#[derive(Clone, Default, Debug)]
pub struct SvgRasterizer {
    /// Prints how long each step took.
    pub perf: bool,
}

impl SvgRasterizer {
    /// Creates a new rasterizer.
    pub fn new() -> Self {
        Self::default()
    }

    fn load_tree(&self, svg: &Path) -> Result<usvg::Tree, Error> {
        let mut svg_data = timed(self.perf, "Reading", || {
            std::fs::read(svg).map_err(|e| Error::ReadFailed(svg.to_path_buf(), e))
        })?;

        if svg_data.starts_with(&[0x1f, 0x8b]) {
            svg_data = timed(self.perf, "SVGZ Decoding", || {
                usvg::decompress_svgz(&svg_data).map_err(|_| Error::MalformedGZip)
            })?;
        }

        let svg_string = std::str::from_utf8(&svg_data).map_err(|_| Error::NotAnUtf8Str)?;

        let xml_tree = timed(self.perf, "XML Parsing", || {
            let xml_opt = usvg::roxmltree::ParsingOptions {
                allow_dtd: true,
                ..Default::default()
            };
            usvg::roxmltree::Document::parse_with_options(svg_string, xml_opt)
                .map_err(|e| Error::ParsingFailed(e.to_string()))
        })?;

        // fontdb initialization is pretty expensive, so perform it only when needed.
        let has_text_nodes = xml_tree
            .descendants()
            .any(|n| n.has_tag_name(("http://www.w3.org/2000/svg", "text")));

        let mut fontdb = fontdb::Database::new();
        if has_text_nodes {
            timed(self.perf, "FontDB", || load_fonts(&mut fontdb));
        }

        // Relative hrefs are resolved against the icon's own directory.
        let resources_dir = std::fs::canonicalize(svg)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));
        let opt = usvg::Options {
            resources_dir,
            ..usvg::Options::default()
        };

        timed(self.perf, "SVG Parsing", || {
            usvg::Tree::from_xmltree(&xml_tree, &opt, &fontdb)
                .map_err(|e| Error::ParsingFailed(e.to_string()))
        })
    }
}

impl Rasterizer for SvgRasterizer {
    fn load(&self, svg: &Path) -> Result<Box<dyn Icon>, Error> {
        let tree = self.load_tree(svg)?;
        Ok(Box::new(SvgIcon {
            tree,
            perf: self.perf,
        }))
    }
}

/// A parsed SVG tree.
struct SvgIcon {
    tree: usvg::Tree,
    perf: bool,
}

impl Icon for SvgIcon {
    fn rasterize(&self, size: u32, png: &Path) -> Result<(), Error> {
        let tree = &self.tree;
        let pixmap = timed(self.perf, "Rendering", || render_square(tree, size))?;

        timed(self.perf, "Saving", || {
            pixmap
                .save_png(png)
                .map_err(|e| Error::SaveFailed(png.to_path_buf(), e.to_string()))
        })
    }
}

/// Renders the whole tree into a transparent `size`x`size` pixmap.
fn render_square(tree: &usvg::Tree, size: u32) -> Result<tiny_skia::Pixmap, Error> {
    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(Error::InvalidSize(size))?;
    let ts = fit_transform(tree.size(), size);
    resvg::render(tree, ts, &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Scales `image` uniformly to fit a `size`x`size` square and centers it.
fn fit_transform(image: usvg::Size, size: u32) -> tiny_skia::Transform {
    let side = size as f32;
    let scale = (side / image.width()).min(side / image.height());
    let dx = (side - image.width() * scale) / 2.0;
    let dy = (side - image.height() * scale) / 2.0;
    tiny_skia::Transform::from_scale(scale, scale).post_translate(dx, dy)
}

fn load_fonts(fontdb: &mut fontdb::Database) {
    fontdb.load_system_fonts();

    if fontdb.len() == 0 {
        log::warn!("No system fonts found. Text will not be rendered.");
    }

    fontdb.set_serif_family("Times New Roman");
    fontdb.set_sans_serif_family("Arial");
    fontdb.set_cursive_family("Comic Sans MS");
    fontdb.set_fantasy_family("Impact");
    fontdb.set_monospace_family("Courier New");
}

fn timed<F, T>(perf: bool, name: &str, mut f: F) -> T
where
    F: FnMut() -> T,
{
    let now = std::time::Instant::now();
    let result = f();
    if perf {
        let elapsed = now.elapsed().as_micros() as f64 / 1000.0;
        println!("{}: {:.2}ms", name, elapsed);
    }

    result
}
