use quick_xml::escape::escape;

use crate::error::{AppError, RenderError};
use crate::pipeline::rasterize;
use crate::types::activity::Activity;
use crate::types::caption::{TextBlock, TextStyle};

const FONT_FAMILY: &str = "Futura, DejaVu Sans, sans-serif";

/// Turns stacked text blocks into a raster image.
pub trait CaptionRenderer {
    fn render(&self, blocks: &[TextBlock]) -> Result<Vec<u8>, AppError>;
}

/// Lays the blocks out as SVG text and rasterizes them to PNG.
pub struct SvgCaptionRenderer;

impl CaptionRenderer for SvgCaptionRenderer {
    fn render(&self, blocks: &[TextBlock]) -> Result<Vec<u8>, AppError> {
        let (svg, width, height) = caption_svg(blocks)?;
        Ok(rasterize::rasterize(&svg, width, height)?)
    }
}

/// Locality on top in the large style, then start time and totals below.
pub fn caption_blocks(activity: &Activity) -> Vec<TextBlock> {
    let started = activity
        .start
        .map(|start| start.format("%a, %b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| activity.id.clone());

    let miles = activity.current.dist_miles.unwrap_or(0.0);
    let mut totals = if activity.duration_mins.is_finite() {
        format!("{:.2} miles in {} minutes", miles, activity.duration_mins.abs())
    } else {
        format!("{:.2} miles", miles)
    };
    if activity.pace.is_finite() {
        totals.push_str(&format!(" ({:.2} min/mile)", activity.pace));
    }

    vec![
        TextBlock::new(activity.locality.to_string(), TextStyle::large()),
        TextBlock::new(format!("{}\n{}", started, totals), TextStyle::small()),
    ]
}

/// Returns the SVG document and its pixel size.
pub fn caption_svg(blocks: &[TextBlock]) -> Result<(String, u32, u32), RenderError> {
    if blocks.is_empty() {
        return Err(RenderError::EmptyCaption);
    }

    let width = blocks.iter().map(TextBlock::width).max().unwrap_or(1).max(1);
    let height = blocks.iter().map(TextBlock::height).sum::<u32>().max(1);

    let mut nodes = String::new();
    let mut top = 0u32;
    for block in blocks {
        let style = &block.style;
        for (i, line) in block.lines().enumerate() {
            let i = i as u32;
            let baseline = top + style.padding + style.font_size * (i + 1) + style.line_spacing * i;
            nodes.push_str(&format!(
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
                style.padding,
                baseline,
                FONT_FAMILY,
                style.font_size,
                style.color,
                escape(line)
            ));
        }
        top += block.height();
    }

    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">{nodes}</svg>"#,
        w = width,
        h = height,
        nodes = nodes
    );
    Ok((svg, width, height))
}
