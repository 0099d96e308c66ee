use std::io::Write;

use pwa_icons::{Error, Outcome, SvgRasterizer};

use crate::{list_pngs, png_size, workdir_with_icon, ICON_SVG, WIDE_SVG};

fn generate(dir: &std::path::Path) -> (Result<Outcome, Error>, String) {
    let rasterizer = SvgRasterizer::default();
    let mut out = Vec::new();
    let res = pwa_icons::generate(dir, Some(&rasterizer), &mut out);
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn generates_all_sizes() {
    let dir = workdir_with_icon(ICON_SVG);
    let (res, out) = generate(dir.path());

    let paths = match res.unwrap() {
        Outcome::Generated(paths) => paths,
        Outcome::RasterizerUnavailable => unreachable!(),
    };
    assert_eq!(paths.len(), 2);

    assert_eq!(png_size(&dir.path().join("icon-192.png")), (192, 192));
    assert_eq!(png_size(&dir.path().join("icon-512.png")), (512, 512));
    assert_eq!(list_pngs(dir.path()), ["icon-192.png", "icon-512.png"]);

    assert_eq!(
        out,
        "✓ Generated icon-192.png\n\
         ✓ Generated icon-512.png\n\
         \n\
         ✅ All icons generated successfully!\n"
    );
}

#[test]
fn overwrites_previous_output() {
    let dir = workdir_with_icon(ICON_SVG);
    std::fs::write(dir.path().join("icon-192.png"), b"stale").unwrap();

    let (first, _) = generate(dir.path());
    first.unwrap();
    let data1 = std::fs::read(dir.path().join("icon-512.png")).unwrap();

    let (second, _) = generate(dir.path());
    second.unwrap();
    let data2 = std::fs::read(dir.path().join("icon-512.png")).unwrap();

    assert_eq!(data1, data2);
    assert_eq!(png_size(&dir.path().join("icon-192.png")), (192, 192));
}

#[test]
fn non_square_source() {
    let dir = workdir_with_icon(WIDE_SVG);
    let (res, _) = generate(dir.path());
    res.unwrap();

    assert_eq!(png_size(&dir.path().join("icon-192.png")), (192, 192));
    assert_eq!(png_size(&dir.path().join("icon-512.png")), (512, 512));
}

#[test]
fn svgz_source() {
    let dir = tempfile::tempdir().unwrap();
    let file = std::fs::File::create(dir.path().join("icon.svg")).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    encoder.write_all(ICON_SVG.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let (res, _) = generate(dir.path());
    res.unwrap();

    assert_eq!(png_size(&dir.path().join("icon-512.png")), (512, 512));
}

#[test]
fn missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let (res, out) = generate(dir.path());

    assert!(matches!(res, Err(Error::ReadFailed(..))));
    assert!(list_pngs(dir.path()).is_empty());
    assert!(out.is_empty());
}

#[test]
fn invalid_source() {
    let dir = workdir_with_icon("<svg");
    let (res, out) = generate(dir.path());

    assert!(matches!(res, Err(Error::ParsingFailed(..))));
    assert!(list_pngs(dir.path()).is_empty());
    assert!(!out.contains("✅"));
}

#[test]
fn binary_source() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icon.svg"), [0xff, 0xfe, 0x00, 0x3c]).unwrap();
    let (res, _) = generate(dir.path());

    assert!(matches!(res, Err(Error::NotAnUtf8Str)));
}
