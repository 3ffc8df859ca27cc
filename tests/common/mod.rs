use lopdf::{dictionary, Document, Object, Stream};
use std::io::Write;

/// Build an n-page PDF with one line of text per page.
pub fn sample_pdf(page_count: u32) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for page in 1..=page_count {
        let content = format!("BT /F1 24 Tf 72 700 Td (Page {}) Tj ET", page);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => Object::Reference(font_id),
                },
            },
        });
        page_ids.push(page_id);
    }

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|&id| Object::Reference(id)).collect::<Vec<_>>(),
        "Count" => Object::Integer(page_count as i64),
    });

    for &page_id in &page_ids {
        if let Ok(dict) = doc.get_dictionary_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("fixture PDF should serialize");
    bytes
}

/// Write fixture bytes to a named file inside a fresh temp directory.
pub fn pdf_in_dir(dir: &std::path::Path, name: &str, page_count: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&sample_pdf(page_count)).unwrap();
    path
}

pub fn loaded_page_count(path: &std::path::Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}
