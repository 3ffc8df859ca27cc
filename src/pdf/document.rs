use anyhow::{bail, Context, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::Path;

pub struct PdfDocument {
    pub doc: Document,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = Document::load(&path)
            .with_context(|| format!("Failed to open PDF: {}", path.as_ref().display()))?;
        Ok(PdfDocument { doc })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes).context("Failed to read PDF data")?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Build a new document containing exactly `pages` (1-based), in the
    /// given order. A page number may appear more than once; each occurrence
    /// becomes an independent copy of the page object.
    pub fn extract_pages(&self, pages: &[u32]) -> Result<Document> {
        if pages.is_empty() {
            bail!("No pages specified");
        }

        let page_map = self.doc.get_pages();
        let total = page_map.len() as u32;
        for &page in pages {
            if page == 0 || page > total {
                bail!("Page {} is out of range (1-{})", page, total);
            }
        }

        let mut out = Document::with_version("1.5");

        // Carry over everything except the page-tree skeleton; the Catalog
        // and Pages nodes are rebuilt below around the requested pages.
        // Outlines are dropped since their destinations may not survive.
        let mut catalog: Option<(ObjectId, Dictionary)> = None;
        let mut pages_root: Option<(ObjectId, Dictionary)> = None;
        for (&object_id, object) in &self.doc.objects {
            match object.type_name().unwrap_or(b"") {
                b"Catalog" => {
                    if let Ok(dict) = object.as_dict() {
                        catalog = Some((object_id, dict.clone()));
                    }
                }
                b"Pages" => {
                    // Intermediate Pages nodes collapse into one root, so
                    // inheritable attributes (Resources, MediaBox) survive.
                    if let Ok(dict) = object.as_dict() {
                        let mut dict = dict.clone();
                        if let Some((id, prior)) = pages_root.take() {
                            dict.extend(&prior);
                            pages_root = Some((id, dict));
                        } else {
                            pages_root = Some((object_id, dict));
                        }
                    }
                }
                b"Page" => {}
                b"Outlines" | b"Outline" => {}
                _ => {
                    out.objects.insert(object_id, object.clone());
                }
            }
        }

        let Some((pages_id, mut pages_dict)) = pages_root else {
            bail!("Invalid PDF: Pages root not found");
        };
        let Some((catalog_id, mut catalog_dict)) = catalog else {
            bail!("Invalid PDF: Catalog not found");
        };

        // New objects must not collide with the ids carried over above
        out.max_id = self.doc.max_id;

        let mut kids = Vec::with_capacity(pages.len());
        for &page in pages {
            let src_id = page_map[&page];
            let mut page_dict = self.doc.get_object(src_id)?.as_dict()?.clone();
            page_dict.set("Parent", Object::Reference(pages_id));
            let new_id = out.add_object(Object::Dictionary(page_dict));
            kids.push(Object::Reference(new_id));
        }

        pages_dict.remove(b"Parent");
        pages_dict.set("Count", pages.len() as i64);
        pages_dict.set("Kids", kids);
        out.objects.insert(pages_id, Object::Dictionary(pages_dict));

        catalog_dict.set("Pages", Object::Reference(pages_id));
        catalog_dict.remove(b"Outlines");
        out.objects.insert(catalog_id, Object::Dictionary(catalog_dict));
        out.trailer.set("Root", catalog_id);
        if let Ok(info) = self.doc.trailer.get(b"Info") {
            out.trailer.set("Info", info.clone());
        }

        out.renumber_objects();
        out.prune_objects();
        out.compress();

        Ok(out)
    }

    /// Serialize a derived document to bytes
    pub fn to_bytes(doc: &mut Document) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).context("Failed to serialize PDF")?;
        Ok(bytes)
    }

    /// Save a derived document to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}
