//! Investor-kit bundler: packs a companion PowerPoint generator script, a
//! faithful JSON dump of the slide catalog, and supporting text files into a
//! single in-memory ZIP archive.

use std::io::Write;

use anyhow::{Context, Result};
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::deck::Deck;

/// Entry names, in archive order. The JSON dump is the source of truth for
/// offline use; the other three are static templates.
pub const KIT_ENTRIES: [&str; 4] = [
    "README.md",
    "generate_ppt.py",
    "slide_data.json",
    "requirements.txt",
];

pub const DEFAULT_KIT_NAME: &str = "stardeck_investor_kit.zip";

const README_TEMPLATE: &str = r#"# Stardeck Investor Kit

This kit contains the assets and scripts needed to generate an
investor-ready PowerPoint deck from the presented slides.

## Files Included
- **generate_ppt.py**: The Python script to generate the .pptx file.
- **slide_data.json**: The full slide catalog as presented.
- **requirements.txt**: Python dependencies needed.

## Quick Start
1. Install dependencies:
   `pip install -r requirements.txt`

2. Run the generator:
   `python generate_ppt.py`

3. Open the generated .pptx in PowerPoint!

## Assets
The script expects optional character art in `assets/characters/`.
"#;

const GENERATOR_SCRIPT: &str = r#"import json
import os

from pptx import Presentation
from pptx.util import Inches, Pt
from pptx.dml.color import RGBColor

# Cosmic theme configuration
TITLE_FONT = 'Orbitron'
COLORS = {
    "neon_cyan": RGBColor(0, 255, 255),
    "neon_pink": RGBColor(255, 0, 255),
    "white": RGBColor(255, 255, 255),
    "background": RGBColor(11, 0, 51),
}


def add_text(slide, text, left, top, width, height,
             font_size=32, font_color=COLORS["white"], bold=False):
    box = slide.shapes.add_textbox(left, top, width, height)
    p = box.text_frame.paragraphs[0]
    p.text = text
    p.font.size = Pt(font_size)
    p.font.color.rgb = font_color
    p.font.bold = bold
    p.font.name = TITLE_FONT
    return box


def add_character(slide, img_path, left, top, width, height):
    if os.path.exists(img_path):
        slide.shapes.add_picture(img_path, left, top, width=width, height=height)


def content_summary(record):
    """Flatten a slide's typed content payload into bullet text."""
    content = record.get("content", {})
    lines = []
    for key, value in content.items():
        if isinstance(value, list):
            for item in value:
                if isinstance(item, dict):
                    lines.append("- " + ", ".join(str(v) for v in item.values()))
                else:
                    lines.append("- " + str(item))
        else:
            lines.append(str(value))
    return "\n".join(lines)


def main():
    with open("slide_data.json", encoding="utf-8") as fh:
        deck = json.load(fh)

    prs = Presentation()
    for record in deck["slides"]:
        slide = prs.slides.add_slide(prs.slide_layouts[6])
        slide.background.fill.solid()
        slide.background.fill.fore_color.rgb = COLORS["background"]

        add_text(slide, record["title"], Inches(0.5), Inches(0.5),
                 Inches(9), Inches(1.5), 44, COLORS["neon_cyan"], bold=True)
        if record.get("subtitle"):
            add_text(slide, record["subtitle"], Inches(0.5), Inches(1.8),
                     Inches(9), Inches(1), 28, COLORS["neon_pink"])
        summary = content_summary(record)
        if summary:
            add_text(slide, summary, Inches(0.5), Inches(2.6),
                     Inches(9), Inches(4.5), 18, COLORS["white"])
        add_character(slide, "assets/characters/%s.png" % record["id"],
                      Inches(7), Inches(1), Inches(2), Inches(2))

    out = "Stardeck_Investor_Deck.pptx"
    prs.save(out)
    print("Deck generated successfully: %s" % out)


if __name__ == "__main__":
    main()
"#;

const REQUIREMENTS: &str = "python-pptx>=0.6.21\n";

/// Build the complete kit archive in memory.
///
/// The four entries are written deflated; the `slide_data.json` entry is a
/// pretty-printed serialization of the full catalog and must round-trip every
/// slide's id, type, title, optional subtitle, and content payload.
pub fn build_kit_archive(deck: &Deck) -> Result<Vec<u8>> {
    let dump =
        serde_json::to_string_pretty(deck).context("Failed to serialize slide catalog")?;

    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entries: [(&str, &[u8]); 4] = [
        (KIT_ENTRIES[0], README_TEMPLATE.as_bytes()),
        (KIT_ENTRIES[1], GENERATOR_SCRIPT.as_bytes()),
        (KIT_ENTRIES[2], dump.as_bytes()),
        (KIT_ENTRIES[3], REQUIREMENTS.as_bytes()),
    ];

    for (name, contents) in entries {
        writer
            .start_file(name, options)
            .with_context(|| format!("Failed to start archive entry {name}"))?;
        writer
            .write_all(contents)
            .with_context(|| format!("Failed to write archive entry {name}"))?;
    }

    let cursor = writer.finish().context("Failed to finalize archive")?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut out = String::new();
        file.read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_archive_contains_exactly_the_four_entries() {
        let bytes = build_kit_archive(&Deck::builtin()).unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        assert_eq!(names.len(), 4, "unexpected entries: {names:?}");
        for expected in KIT_ENTRIES {
            assert!(names.contains(&expected), "missing entry {expected}");
        }
    }

    #[test]
    fn test_slide_dump_round_trips_the_catalog() {
        let deck = Deck::builtin();
        let bytes = build_kit_archive(&deck).unwrap();
        let dump = read_entry(&bytes, "slide_data.json");
        let back = Deck::from_json_str(&dump).unwrap();
        assert_eq!(deck, back, "slide_data.json must reproduce the catalog");
    }

    #[test]
    fn test_templates_reference_each_other() {
        let bytes = build_kit_archive(&Deck::builtin()).unwrap();
        let readme = read_entry(&bytes, "README.md");
        assert!(readme.contains("generate_ppt.py"));
        assert!(readme.contains("requirements.txt"));
        let script = read_entry(&bytes, "generate_ppt.py");
        assert!(script.contains("slide_data.json"));
        let reqs = read_entry(&bytes, "requirements.txt");
        assert!(reqs.contains("python-pptx"));
    }
}
