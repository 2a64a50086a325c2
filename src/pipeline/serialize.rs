use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;

use crate::error::RenderError;
use crate::types::activity::Trackpoint;
use crate::types::tour::{CameraMove, Point, ScreenOverlay, Tour};

const KML_NS: &str = "http://www.opengis.net/kml/2.2";
const GX_NS: &str = "http://www.google.com/kml/ext/2.2";

type XmlResult = quick_xml::Result<()>;

/// Renders a tour as KML with the `gx` extension: a fly-to playlist, a
/// screen overlay for the caption and the full path as a styled line.
pub fn tour_kml(tour: &Tour) -> Result<String, RenderError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element("kml")
        .with_attribute(("xmlns", KML_NS))
        .with_attribute(("xmlns:gx", GX_NS))
        .write_inner_content(|w| {
            w.create_element("Document").write_inner_content(|w| {
                text_element(w, "open", "1")?;
                w.create_element("gx:Tour").write_inner_content(|w| {
                    text_element(w, "name", &tour.name)?;
                    w.create_element("gx:Playlist").write_inner_content(|w| {
                        for camera in &tour.moves {
                            fly_to(w, camera)?;
                        }
                        Ok::<(), quick_xml::Error>(())
                    })?;
                    Ok::<(), quick_xml::Error>(())
                })?;
                if let Some(href) = &tour.caption_href {
                    screen_overlay(w, href, tour.overlay)?;
                }
                path_placemark(w, tour)?;
                Ok::<(), quick_xml::Error>(())
            })?;
            Ok::<(), quick_xml::Error>(())
        })?;

    into_string(writer)
}

fn fly_to(w: &mut Writer<Vec<u8>>, camera: &CameraMove) -> XmlResult {
    w.create_element("gx:FlyTo").write_inner_content(|w| {
        text_element(w, "gx:duration", &camera.duration.to_string())?;
        text_element(w, "gx:flyToMode", "smooth")?;
        w.create_element("LookAt").write_inner_content(|w| {
            text_element(w, "heading", &camera.heading.to_string())?;
            text_element(w, "longitude", &camera.longitude.to_string())?;
            text_element(w, "latitude", &camera.latitude.to_string())?;
            text_element(w, "range", &camera.range.to_string())?;
            text_element(w, "tilt", &camera.tilt.to_string())?;
            Ok::<(), quick_xml::Error>(())
        })?;
        Ok::<(), quick_xml::Error>(())
    })?;
    Ok(())
}

fn screen_overlay(w: &mut Writer<Vec<u8>>, href: &str, overlay: ScreenOverlay) -> XmlResult {
    let x = overlay.x.to_string();
    let y = overlay.y.to_string();
    w.create_element("ScreenOverlay").write_inner_content(|w| {
        text_element(w, "name", "Image Overlay")?;
        w.create_element("Icon")
            .write_inner_content(|w| text_element(w, "href", href))?;
        for tag in ["overlayXY", "screenXY"] {
            w.create_element(tag)
                .with_attribute(("x", x.as_str()))
                .with_attribute(("y", y.as_str()))
                .with_attribute(("xunits", "fraction"))
                .with_attribute(("yunits", "fraction"))
                .write_empty()?;
        }
        Ok::<(), quick_xml::Error>(())
    })?;
    Ok(())
}

fn path_placemark(w: &mut Writer<Vec<u8>>, tour: &Tour) -> XmlResult {
    w.create_element("Placemark").write_inner_content(|w| {
        text_element(w, "name", "Placemark Path")?;
        w.create_element("Style").write_inner_content(|w| {
            w.create_element("LineStyle").write_inner_content(|w| {
                text_element(w, "color", &tour.line_color)?;
                text_element(w, "gx:physicalWidth", &tour.line_width.to_string())
            })?;
            Ok::<(), quick_xml::Error>(())
        })?;
        w.create_element("LineString")
            .write_inner_content(|w| text_element(w, "coordinates", &coordinates(&tour.path)))?;
        Ok::<(), quick_xml::Error>(())
    })?;
    Ok(())
}

/// Renders every trackpoint as a timestamped placemark.
pub fn track_kml(points: &[Trackpoint]) -> Result<String, RenderError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer
        .create_element("kml")
        .with_attribute(("xmlns", KML_NS))
        .write_inner_content(|w| {
            w.create_element("Document").write_inner_content(|w| {
                for point in points {
                    track_placemark(w, point)?;
                }
                Ok::<(), quick_xml::Error>(())
            })?;
            Ok::<(), quick_xml::Error>(())
        })?;

    into_string(writer)
}

fn track_placemark(w: &mut Writer<Vec<u8>>, point: &Trackpoint) -> XmlResult {
    w.create_element("Placemark").write_inner_content(|w| {
        w.create_element("ExtendedData").write_inner_content(|w| {
            data_element(w, "seq", &point.seq.to_string())?;
            data_element(w, "time", &point.time)?;
            if let Some(alt) = point.alt_feet {
                data_element(w, "alt_feet", &alt.to_string())?;
            }
            if let Some(dist) = point.dist_miles {
                data_element(w, "dist_miles", &dist.to_string())?;
            }
            Ok::<(), quick_xml::Error>(())
        })?;
        w.create_element("TimeStamp")
            .write_inner_content(|w| text_element(w, "when", &point.time))?;
        w.create_element("Point").write_inner_content(|w| {
            text_element(w, "coordinates", &format!("{},{}", point.lng, point.lat))
        })?;
        Ok::<(), quick_xml::Error>(())
    })?;
    Ok(())
}

fn data_element(w: &mut Writer<Vec<u8>>, name: &str, value: &str) -> XmlResult {
    w.create_element("Data")
        .with_attribute(("name", name))
        .write_inner_content(|w| text_element(w, "value", value))?;
    Ok(())
}

fn text_element(w: &mut Writer<Vec<u8>>, name: &str, text: &str) -> XmlResult {
    w.create_element(name)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

fn coordinates(path: &[Point]) -> String {
    path.iter()
        .map(|p| format!("{},{}", p.lng, p.lat))
        .collect::<Vec<_>>()
        .join(" ")
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String, RenderError> {
    Ok(String::from_utf8(writer.into_inner())?)
}
