//! KML document generation.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::constants::{KML_DESCRIPTION_SEPARATOR, KML_NAMESPACE};
use crate::details::{join_inline, record_details};
use crate::error::{HotSpringError, Result};
use crate::models::{RecordSet, SpringRecord};

const FORMAT: &str = "KML";
const DOCUMENT_NAME: &str = "Hot Springs";

/// How much of each record goes into its placemark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacemarkContent {
    /// Name, point and a description of the present optional fields
    Detailed,
    /// Name and point only
    NameOnly,
}

/// Encode records as a KML document with one described placemark each
pub fn encode_kml(records: &RecordSet) -> Result<Vec<u8>> {
    encode_kml_with(records, PlacemarkContent::Detailed)
}

/// Encode records as a KML document.
///
/// Coordinates are written longitude first. Records with non-finite
/// coordinates are rejected rather than written.
pub fn encode_kml_with(records: &RecordSet, content: PlacemarkContent) -> Result<Vec<u8>> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    emit(
        &mut xml,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let mut root = BytesStart::new("kml");
    root.push_attribute(("xmlns", KML_NAMESPACE));
    emit(&mut xml, Event::Start(root))?;
    emit(&mut xml, Event::Start(BytesStart::new("Document")))?;
    write_text_element(&mut xml, "name", DOCUMENT_NAME)?;

    for record in records {
        write_placemark(&mut xml, record, content)?;
    }

    emit(&mut xml, Event::End(BytesEnd::new("Document")))?;
    emit(&mut xml, Event::End(BytesEnd::new("kml")))?;

    Ok(xml.into_inner())
}

fn write_placemark(
    xml: &mut Writer<Vec<u8>>,
    record: &SpringRecord,
    content: PlacemarkContent,
) -> Result<()> {
    if !record.has_finite_coordinates() {
        return Err(HotSpringError::invalid_record(
            record.name.clone(),
            format!(
                "non-finite coordinates ({}, {})",
                record.latitude, record.longitude
            ),
        ));
    }

    emit(xml, Event::Start(BytesStart::new("Placemark")))?;
    write_text_element(xml, "name", &record.name)?;

    if content == PlacemarkContent::Detailed {
        let description = join_inline(&record_details(record), KML_DESCRIPTION_SEPARATOR);
        if !description.is_empty() {
            write_text_element(xml, "description", &description)?;
        }
    }

    emit(xml, Event::Start(BytesStart::new("Point")))?;
    let coordinates = format!("{},{}", record.longitude, record.latitude);
    write_text_element(xml, "coordinates", &coordinates)?;
    emit(xml, Event::End(BytesEnd::new("Point")))?;

    emit(xml, Event::End(BytesEnd::new("Placemark")))
}

fn write_text_element(xml: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    emit(xml, Event::Start(BytesStart::new(name)))?;
    emit(xml, Event::Text(BytesText::new(text)))?;
    emit(xml, Event::End(BytesEnd::new(name)))
}

fn emit(xml: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    xml.write_event(event)
        .map_err(|e| HotSpringError::encoding(FORMAT, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_set() -> RecordSet {
        RecordSet::new(vec![
            SpringRecord::new(36.5, -121.9, "Example Spring")
                .with_temperature_f(104.0)
                .with_ph(8.1)
                .with_nearby_location("Nearby Town")
                .with_usgs_quad("USGS123"),
            SpringRecord::new(44.0, -110.0, "Bare Spring"),
        ])
    }

    #[test]
    fn test_placemark_per_record() {
        let kml = String::from_utf8(encode_kml(&example_set()).unwrap()).unwrap();

        assert!(kml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(kml.contains("<kml xmlns=\"http://www.opengis.net/kml/2.2\">"));
        assert_eq!(kml.matches("<Placemark>").count(), 2);
        assert!(kml.contains("<name>Example Spring</name>"));
        assert!(kml.contains("<coordinates>-121.9,36.5</coordinates>"));
        assert!(kml.contains("<coordinates>-110,44</coordinates>"));
    }

    #[test]
    fn test_description_lists_present_fields() {
        let kml = String::from_utf8(encode_kml(&example_set()).unwrap()).unwrap();

        assert!(kml.contains(
            "<description>Temp 104 °F / 40 °C | pH 8.1 | USGS USGS123 | Nearby Nearby Town</description>"
        ));
        // The bare spring has nothing to describe
        assert_eq!(kml.matches("<description>").count(), 1);
    }

    #[test]
    fn test_name_only_content() {
        let kml = encode_kml_with(&example_set(), PlacemarkContent::NameOnly).unwrap();
        let kml = String::from_utf8(kml).unwrap();

        assert_eq!(kml.matches("<Placemark>").count(), 2);
        assert!(!kml.contains("<description>"));
    }

    #[test]
    fn test_names_are_escaped() {
        let set = RecordSet::new(vec![SpringRecord::new(1.0, 2.0, "Hot & <Cold> Springs")]);
        let kml = String::from_utf8(encode_kml(&set).unwrap()).unwrap();

        assert!(kml.contains("<name>Hot &amp; &lt;Cold&gt; Springs</name>"));
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        let set = RecordSet::new(vec![SpringRecord::new(f64::NAN, -121.9, "Broken")]);
        match encode_kml(&set) {
            Err(HotSpringError::InvalidRecord { name, .. }) => assert_eq!(name, "Broken"),
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_output_is_deterministic() {
        let set = example_set();
        assert_eq!(encode_kml(&set).unwrap(), encode_kml(&set).unwrap());
    }

    #[test]
    fn test_empty_set_is_valid_document() {
        let kml = String::from_utf8(encode_kml(&RecordSet::default()).unwrap()).unwrap();
        assert!(kml.contains("<Document>"));
        assert!(kml.trim_end().ends_with("</kml>"));
        assert!(!kml.contains("<Placemark>"));
    }
}
