//! PPTX package writer implementation.
//!
//! Assembles the OOXML presentation package part by part: content types,
//! package and part relationships, the presentation part, one slide part
//! per deck slide, and notes parts for slides that carry speaker notes.

use deck_core::{Deck, Error, Result, Slide};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::templates;

/// Font size of the first bullet on each slide, in hundredths of a point.
const FIRST_BULLET_SIZE: u32 = 2000;

/// Font size of the remaining bullets, in hundredths of a point.
const BULLET_SIZE: u32 = 1800;

/// Slide size in EMU (10 x 7.5 inches).
const SLIDE_CX: &str = "9144000";
const SLIDE_CY: &str = "6858000";

/// Notes page size in EMU (portrait).
const NOTES_CX: &str = "6858000";
const NOTES_CY: &str = "9144000";

/// Placeholder geometry in EMU.
const TITLE_OFF: (u64, u64) = (457_200, 274_638);
const TITLE_EXT: (u64, u64) = (8_229_600, 1_143_000);
const BODY_OFF: (u64, u64) = (457_200, 1_600_200);
const BODY_EXT: (u64, u64) = (8_229_600, 4_525_963);
const NOTES_BODY_OFF: (u64, u64) = (685_800, 4_400_550);
const NOTES_BODY_EXT: (u64, u64) = (5_486_400, 3_600_450);

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const NS_RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_NOTES_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesMaster";
const REL_NOTES_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const CT_XML: &str = "application/xml";
const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_NOTES_SLIDE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml";
const CT_NOTES_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

/// Writer for PPTX (Office Open XML) packages.
pub struct PptxWriter;

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self
    }

    /// Write the deck as a complete PPTX package to a sink.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, sink: W) -> Result<()> {
        let slide_count = deck.slides.len();
        let has_notes = deck.slides.iter().any(|s| s.has_notes());

        let mut zip = ZipWriter::new(sink);
        let options = FileOptions::default();

        add_part(&mut zip, "[Content_Types].xml", &content_types_xml(deck)?, options)?;
        add_part(&mut zip, "_rels/.rels", &package_rels_xml()?, options)?;
        add_part(
            &mut zip,
            "ppt/presentation.xml",
            &presentation_xml(slide_count, has_notes)?,
            options,
        )?;
        add_part(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            &presentation_rels_xml(slide_count, has_notes)?,
            options,
        )?;

        add_part(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            templates::SLIDE_MASTER,
            options,
        )?;
        add_part(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &slide_master_rels_xml()?,
            options,
        )?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            templates::SLIDE_LAYOUT,
            options,
        )?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &slide_layout_rels_xml()?,
            options,
        )?;
        add_part(&mut zip, "ppt/theme/theme1.xml", templates::THEME, options)?;

        if has_notes {
            add_part(
                &mut zip,
                "ppt/notesMasters/notesMaster1.xml",
                templates::NOTES_MASTER,
                options,
            )?;
            add_part(
                &mut zip,
                "ppt/notesMasters/_rels/notesMaster1.xml.rels",
                &notes_master_rels_xml()?,
                options,
            )?;
        }

        for (idx, slide) in deck.slides.iter().enumerate() {
            let number = idx + 1;

            add_part(
                &mut zip,
                &format!("ppt/slides/slide{}.xml", number),
                &slide_xml(slide)?,
                options,
            )?;
            add_part(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                &slide_rels_xml(number, slide.has_notes())?,
                options,
            )?;

            if let Some(notes) = &slide.notes {
                add_part(
                    &mut zip,
                    &format!("ppt/notesSlides/notesSlide{}.xml", number),
                    &notes_slide_xml(notes)?,
                    options,
                )?;
                add_part(
                    &mut zip,
                    &format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", number),
                    &notes_slide_rels_xml(number)?,
                    options,
                )?;
            }
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finalize package: {}", e)))?;

        log::debug!("wrote package with {} slides", slide_count);
        Ok(())
    }

    /// Write the deck to a file, overwriting any existing file at the path.
    pub fn write_to_path<P: AsRef<Path>>(&self, deck: &Deck, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write(deck, file)
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Add one named part to the package.
fn add_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    name: &str,
    xml: &str,
    options: FileOptions,
) -> Result<()> {
    zip.start_file(name, options)
        .map_err(|e| Error::ZipError(format!("Failed to start part '{}': {}", name, e)))?;
    zip.write_all(xml.as_bytes())?;
    Ok(())
}

type XmlSink = Writer<Cursor<Vec<u8>>>;

/// Start a part body with the XML declaration.
fn new_part() -> Result<XmlSink> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(|e| Error::XmlError(format!("Failed to write XML declaration: {}", e)))?;
    Ok(writer)
}

fn start(writer: &mut XmlSink, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer
        .write_event(Event::Start(elem))
        .map_err(|e| Error::XmlError(format!("Failed to open <{}>: {}", name, e)))
}

fn empty(writer: &mut XmlSink, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    writer
        .write_event(Event::Empty(elem))
        .map_err(|e| Error::XmlError(format!("Failed to write <{}/>: {}", name, e)))
}

fn end(writer: &mut XmlSink, name: &str) -> Result<()> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| Error::XmlError(format!("Failed to close <{}>: {}", name, e)))
}

fn text(writer: &mut XmlSink, content: &str) -> Result<()> {
    writer
        .write_event(Event::Text(BytesText::new(content)))
        .map_err(|e| Error::XmlError(format!("Failed to write text: {}", e)))
}

fn finish_part(writer: XmlSink) -> Result<String> {
    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| Error::XmlError(format!("Part is not valid UTF-8: {}", e)))
}

fn rid(n: usize) -> String {
    format!("rId{}", n)
}

/// `[Content_Types].xml`
fn content_types_xml(deck: &Deck) -> Result<String> {
    let has_notes = deck.slides.iter().any(|s| s.has_notes());

    let mut w = new_part()?;
    start(&mut w, "Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    empty(
        &mut w,
        "Default",
        &[("Extension", "rels"), ("ContentType", CT_RELATIONSHIPS)],
    )?;
    empty(&mut w, "Default", &[("Extension", "xml"), ("ContentType", CT_XML)])?;

    override_part(&mut w, "/ppt/presentation.xml", CT_PRESENTATION)?;
    override_part(&mut w, "/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER)?;
    override_part(&mut w, "/ppt/slideLayouts/slideLayout1.xml", CT_SLIDE_LAYOUT)?;
    override_part(&mut w, "/ppt/theme/theme1.xml", CT_THEME)?;

    for number in 1..=deck.slides.len() {
        override_part(&mut w, &format!("/ppt/slides/slide{}.xml", number), CT_SLIDE)?;
    }

    if has_notes {
        override_part(&mut w, "/ppt/notesMasters/notesMaster1.xml", CT_NOTES_MASTER)?;
        for (idx, slide) in deck.slides.iter().enumerate() {
            if slide.has_notes() {
                override_part(
                    &mut w,
                    &format!("/ppt/notesSlides/notesSlide{}.xml", idx + 1),
                    CT_NOTES_SLIDE,
                )?;
            }
        }
    }

    end(&mut w, "Types")?;
    finish_part(w)
}

fn override_part(w: &mut XmlSink, part_name: &str, content_type: &str) -> Result<()> {
    empty(
        w,
        "Override",
        &[("PartName", part_name), ("ContentType", content_type)],
    )
}

/// Generic relationships part from (id, type, target) triples.
fn relationships_xml(rels: &[(String, &str, String)]) -> Result<String> {
    let mut w = new_part()?;
    start(&mut w, "Relationships", &[("xmlns", NS_RELATIONSHIPS)])?;
    for rel in rels {
        empty(
            &mut w,
            "Relationship",
            &[("Id", rel.0.as_str()), ("Type", rel.1), ("Target", rel.2.as_str())],
        )?;
    }
    end(&mut w, "Relationships")?;
    finish_part(w)
}

/// `_rels/.rels`
fn package_rels_xml() -> Result<String> {
    relationships_xml(&[(
        rid(1),
        REL_OFFICE_DOCUMENT,
        "ppt/presentation.xml".to_string(),
    )])
}

/// `ppt/presentation.xml`
fn presentation_xml(slide_count: usize, has_notes: bool) -> Result<String> {
    let mut w = new_part()?;
    start(
        &mut w,
        "p:presentation",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;

    start(&mut w, "p:sldMasterIdLst", &[])?;
    empty(
        &mut w,
        "p:sldMasterId",
        &[("id", "2147483648"), ("r:id", "rId1")],
    )?;
    end(&mut w, "p:sldMasterIdLst")?;

    if has_notes {
        start(&mut w, "p:notesMasterIdLst", &[])?;
        empty(
            &mut w,
            "p:notesMasterId",
            &[("r:id", rid(slide_count + 2).as_str())],
        )?;
        end(&mut w, "p:notesMasterIdLst")?;
    }

    start(&mut w, "p:sldIdLst", &[])?;
    for i in 0..slide_count {
        empty(
            &mut w,
            "p:sldId",
            &[
                ("id", (256 + i).to_string().as_str()),
                ("r:id", rid(i + 2).as_str()),
            ],
        )?;
    }
    end(&mut w, "p:sldIdLst")?;

    empty(
        &mut w,
        "p:sldSz",
        &[("cx", SLIDE_CX), ("cy", SLIDE_CY), ("type", "screen4x3")],
    )?;
    empty(&mut w, "p:notesSz", &[("cx", NOTES_CX), ("cy", NOTES_CY)])?;

    end(&mut w, "p:presentation")?;
    finish_part(w)
}

/// `ppt/_rels/presentation.xml.rels`
fn presentation_rels_xml(slide_count: usize, has_notes: bool) -> Result<String> {
    let mut rels = vec![(
        rid(1),
        REL_SLIDE_MASTER,
        "slideMasters/slideMaster1.xml".to_string(),
    )];

    for number in 1..=slide_count {
        rels.push((
            rid(number + 1),
            REL_SLIDE,
            format!("slides/slide{}.xml", number),
        ));
    }

    if has_notes {
        rels.push((
            rid(slide_count + 2),
            REL_NOTES_MASTER,
            "notesMasters/notesMaster1.xml".to_string(),
        ));
    }

    relationships_xml(&rels)
}

fn slide_master_rels_xml() -> Result<String> {
    relationships_xml(&[
        (
            rid(1),
            REL_SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml".to_string(),
        ),
        (rid(2), REL_THEME, "../theme/theme1.xml".to_string()),
    ])
}

fn slide_layout_rels_xml() -> Result<String> {
    relationships_xml(&[(
        rid(1),
        REL_SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml".to_string(),
    )])
}

fn notes_master_rels_xml() -> Result<String> {
    relationships_xml(&[(rid(1), REL_THEME, "../theme/theme1.xml".to_string())])
}

/// `ppt/slides/_rels/slideN.xml.rels`
fn slide_rels_xml(number: usize, has_notes: bool) -> Result<String> {
    let mut rels = vec![(
        rid(1),
        REL_SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml".to_string(),
    )];

    if has_notes {
        rels.push((
            rid(2),
            REL_NOTES_SLIDE,
            format!("../notesSlides/notesSlide{}.xml", number),
        ));
    }

    relationships_xml(&rels)
}

/// `ppt/notesSlides/_rels/notesSlideN.xml.rels`
fn notes_slide_rels_xml(number: usize) -> Result<String> {
    relationships_xml(&[
        (
            rid(1),
            REL_NOTES_MASTER,
            "../notesMasters/notesMaster1.xml".to_string(),
        ),
        (rid(2), REL_SLIDE, format!("../slides/slide{}.xml", number)),
    ])
}

/// The `<p:nvGrpSpPr>`/`<p:grpSpPr>` preamble every shape tree opens with.
fn group_preamble(w: &mut XmlSink) -> Result<()> {
    start(w, "p:nvGrpSpPr", &[])?;
    empty(w, "p:cNvPr", &[("id", "1"), ("name", "")])?;
    empty(w, "p:cNvGrpSpPr", &[])?;
    empty(w, "p:nvPr", &[])?;
    end(w, "p:nvGrpSpPr")?;
    empty(w, "p:grpSpPr", &[])
}

/// Open a placeholder shape up to and including its text body preamble.
fn open_placeholder(
    w: &mut XmlSink,
    id: &str,
    name: &str,
    ph_type: &str,
    ph_idx: Option<&str>,
    off: (u64, u64),
    ext: (u64, u64),
) -> Result<()> {
    start(w, "p:sp", &[])?;

    start(w, "p:nvSpPr", &[])?;
    empty(w, "p:cNvPr", &[("id", id), ("name", name)])?;
    start(w, "p:cNvSpPr", &[])?;
    empty(w, "a:spLocks", &[("noGrp", "1")])?;
    end(w, "p:cNvSpPr")?;
    start(w, "p:nvPr", &[])?;
    match ph_idx {
        Some(idx) => empty(w, "p:ph", &[("type", ph_type), ("idx", idx)])?,
        None => empty(w, "p:ph", &[("type", ph_type)])?,
    }
    end(w, "p:nvPr")?;
    end(w, "p:nvSpPr")?;

    start(w, "p:spPr", &[])?;
    start(w, "a:xfrm", &[])?;
    empty(
        w,
        "a:off",
        &[("x", off.0.to_string().as_str()), ("y", off.1.to_string().as_str())],
    )?;
    empty(
        w,
        "a:ext",
        &[("cx", ext.0.to_string().as_str()), ("cy", ext.1.to_string().as_str())],
    )?;
    end(w, "a:xfrm")?;
    end(w, "p:spPr")?;

    start(w, "p:txBody", &[])?;
    empty(w, "a:bodyPr", &[])?;
    empty(w, "a:lstStyle", &[])?;
    Ok(())
}

fn close_placeholder(w: &mut XmlSink) -> Result<()> {
    end(w, "p:txBody")?;
    end(w, "p:sp")
}

/// One paragraph holding a single run, with an optional font size override.
fn run_paragraph(w: &mut XmlSink, content: &str, size: Option<u32>) -> Result<()> {
    start(w, "a:p", &[])?;
    start(w, "a:r", &[])?;
    if let Some(size) = size {
        empty(w, "a:rPr", &[("sz", size.to_string().as_str())])?;
    }
    start(w, "a:t", &[])?;
    text(w, content)?;
    end(w, "a:t")?;
    end(w, "a:r")?;
    end(w, "a:p")
}

/// `ppt/slides/slideN.xml`
fn slide_xml(slide: &Slide) -> Result<String> {
    let mut w = new_part()?;
    start(
        &mut w,
        "p:sld",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    start(&mut w, "p:cSld", &[])?;
    start(&mut w, "p:spTree", &[])?;
    group_preamble(&mut w)?;

    open_placeholder(&mut w, "2", "Title 1", "title", None, TITLE_OFF, TITLE_EXT)?;
    run_paragraph(&mut w, &slide.title, None)?;
    close_placeholder(&mut w)?;

    open_placeholder(
        &mut w,
        "3",
        "Content Placeholder 2",
        "body",
        Some("1"),
        BODY_OFF,
        BODY_EXT,
    )?;
    if slide.bullets.is_empty() {
        // A text body must hold at least one paragraph.
        empty(&mut w, "a:p", &[])?;
    }
    for (i, bullet) in slide.bullets.iter().enumerate() {
        let size = if i == 0 { FIRST_BULLET_SIZE } else { BULLET_SIZE };
        run_paragraph(&mut w, bullet, Some(size))?;
    }
    close_placeholder(&mut w)?;

    end(&mut w, "p:spTree")?;
    end(&mut w, "p:cSld")?;
    start(&mut w, "p:clrMapOvr", &[])?;
    empty(&mut w, "a:masterClrMapping", &[])?;
    end(&mut w, "p:clrMapOvr")?;
    end(&mut w, "p:sld")?;
    finish_part(w)
}

/// `ppt/notesSlides/notesSlideN.xml`
fn notes_slide_xml(notes: &str) -> Result<String> {
    let mut w = new_part()?;
    start(
        &mut w,
        "p:notes",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    start(&mut w, "p:cSld", &[])?;
    start(&mut w, "p:spTree", &[])?;
    group_preamble(&mut w)?;

    open_placeholder(
        &mut w,
        "2",
        "Notes Placeholder 1",
        "body",
        Some("1"),
        NOTES_BODY_OFF,
        NOTES_BODY_EXT,
    )?;
    for line in notes.lines() {
        if line.trim().is_empty() {
            empty(&mut w, "a:p", &[])?;
        } else {
            run_paragraph(&mut w, line, None)?;
        }
    }
    close_placeholder(&mut w)?;

    end(&mut w, "p:spTree")?;
    end(&mut w, "p:cSld")?;
    start(&mut w, "p:clrMapOvr", &[])?;
    empty(&mut w, "a:masterClrMapping", &[])?;
    end(&mut w, "p:clrMapOvr")?;
    end(&mut w, "p:notes")?;
    finish_part(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn sample_deck() -> Deck {
        Deck::from_markdown(
            "## Intro\nHello\n\nTampilan slide (poin singkat):\n- A\n- B\n\nCatatan pembicara:\nSay hi.\n\n## Closing\nplain line\n",
        )
    }

    fn write_deck(deck: &Deck) -> ZipArchive<Cursor<Vec<u8>>> {
        let mut buffer = Cursor::new(Vec::new());
        PptxWriter::new().write(deck, &mut buffer).unwrap();
        buffer.set_position(0);
        ZipArchive::new(buffer).unwrap()
    }

    fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_has_expected_parts() {
        let mut archive = write_deck(&sample_deck());

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/notesMasters/notesMaster1.xml",
            "ppt/notesSlides/notesSlide1.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part: {}", name);
        }
    }

    #[test]
    fn test_slide_part_contains_title_and_sized_bullets() {
        let mut archive = write_deck(&sample_deck());
        let slide = read_part(&mut archive, "ppt/slides/slide1.xml");

        assert!(slide.contains("<a:t>Intro</a:t>"));
        assert!(slide.contains("<a:t>A</a:t>"));
        assert!(slide.contains("<a:t>B</a:t>"));
        // First bullet 20pt, the rest 18pt.
        assert!(slide.contains(r#"<a:rPr sz="2000"/>"#));
        assert!(slide.contains(r#"<a:rPr sz="1800"/>"#));
    }

    #[test]
    fn test_notes_parts_only_for_slides_with_notes() {
        let mut archive = write_deck(&sample_deck());

        let notes = read_part(&mut archive, "ppt/notesSlides/notesSlide1.xml");
        assert!(notes.contains("<a:t>Say hi.</a:t>"));
        assert!(archive.by_name("ppt/notesSlides/notesSlide2.xml").is_err());

        let rels = read_part(&mut archive, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains("notesMasters/notesMaster1.xml"));
        let slide2_rels = read_part(&mut archive, "ppt/slides/_rels/slide2.xml.rels");
        assert!(!slide2_rels.contains("notesSlide"));
    }

    #[test]
    fn test_deck_without_notes_omits_notes_parts() {
        let deck = Deck::from_markdown("## Solo\njust a line\n");
        let mut archive = write_deck(&deck);

        assert!(archive.by_name("ppt/notesMasters/notesMaster1.xml").is_err());

        let types = read_part(&mut archive, "[Content_Types].xml");
        assert!(!types.contains("notesSlide"));

        let presentation = read_part(&mut archive, "ppt/presentation.xml");
        assert!(!presentation.contains("notesMasterIdLst"));
    }

    #[test]
    fn test_slide_text_is_escaped() {
        let deck = Deck::from_markdown("## Q&A <fast>\n- cost < 5 & rising\n");
        let mut archive = write_deck(&deck);
        let slide = read_part(&mut archive, "ppt/slides/slide1.xml");

        assert!(slide.contains("Q&amp;A &lt;fast&gt;"));
        assert!(slide.contains("cost &lt; 5 &amp; rising"));
    }

    #[test]
    fn test_multiline_notes_become_paragraphs() {
        let deck = Deck::from_markdown("## S\nline\n\nCatatan pembicara:\nFirst.\nSecond.\n");
        let mut archive = write_deck(&deck);
        let notes = read_part(&mut archive, "ppt/notesSlides/notesSlide1.xml");

        assert!(notes.contains("<a:t>First.</a:t>"));
        assert!(notes.contains("<a:t>Second.</a:t>"));
    }

    #[test]
    fn test_empty_deck_writes_valid_package() {
        let deck = Deck::new();
        let mut archive = write_deck(&deck);

        let types = read_part(&mut archive, "[Content_Types].xml");
        assert!(!types.contains("/ppt/slides/"));

        let presentation = read_part(&mut archive, "ppt/presentation.xml");
        assert!(presentation.contains("<p:sldIdLst></p:sldIdLst>"));
    }

    #[test]
    fn test_presentation_lists_slides_in_order() {
        let mut archive = write_deck(&sample_deck());
        let rels = read_part(&mut archive, "ppt/_rels/presentation.xml.rels");

        assert!(rels.contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml""#));
        assert!(rels.contains(r#"Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide2.xml""#));
    }
}
