use std::cell::RefCell;

use crate::error::RasterError;

thread_local! {
    static FONT_DB: RefCell<usvg::fontdb::Database> = RefCell::new(load_font_db());
}

/// Rasterizes an SVG document to PNG bytes at the given pixel size on a
/// transparent background.
pub fn rasterize(svg: &str, width: u32, height: u32) -> Result<Vec<u8>, RasterError> {
    FONT_DB.with(|fontdb| {
        let fontdb = fontdb.borrow();
        rasterize_with_fontdb(svg, width, height, &fontdb)
    })
}

fn load_font_db() -> usvg::fontdb::Database {
    let mut fontdb = usvg::fontdb::Database::new();
    for path in [
        "./assets/fonts/Futura.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Futura.ttc",
        "C:\\Windows\\Fonts\\arial.ttf",
    ] {
        let _ = fontdb.load_font_file(path);
    }
    fontdb.load_system_fonts();
    fontdb
}

fn rasterize_with_fontdb(
    svg: &str,
    width: u32,
    height: u32,
    fontdb: &usvg::fontdb::Database,
) -> Result<Vec<u8>, RasterError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options, fontdb)
        .map_err(|e| RasterError::RenderFailed(format!("Failed to parse SVG: {}", e)))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| RasterError::RenderFailed(format!("Invalid image size {}x{}", width, height)))?;

    let transform = tiny_skia::Transform::from_scale(
        width as f32 / tree.size().width(),
        height as f32 / tree.size().height(),
    );

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| RasterError::RenderFailed(format!("Failed to encode PNG: {}", e)))
}
