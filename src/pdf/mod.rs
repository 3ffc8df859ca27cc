pub mod document;

pub use document::PdfDocument;

#[cfg(test)]
pub mod test_util {
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build an n-page PDF in memory. Page k gets a MediaBox width of
    /// 600 + k so tests can tell source pages apart after extraction.
    pub fn sample_pdf(page_count: u32) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let mut page_ids = Vec::new();
        for page in 1..=page_count {
            let content = format!("BT /F1 24 Tf 72 700 Td (Page {}) Tj ET", page);
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(600 + page as i64),
                    Object::Integer(792),
                ],
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
}
