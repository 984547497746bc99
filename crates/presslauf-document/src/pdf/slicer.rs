// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF page extraction using the `lopdf` crate.
//
// Selected pages are deep-cloned into a freshly assembled document, so the
// source is never mutated and the output carries only the objects the
// selected pages actually reference.

use lopdf::{Document, Object, ObjectId, dictionary};
use presslauf_core::error::{PresslaufError, Result};
use presslauf_core::types::Parity;
use tracing::{debug, instrument, warn};

/// An in-memory PDF opened for page-level slicing.
#[derive(Debug)]
pub struct PdfSlice {
    document: Document,
}

impl PdfSlice {
    /// Parse a PDF from raw bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data)
            .map_err(|err| PresslaufError::Transform(format!("cannot parse PDF: {err}")))?;

        debug!(pages = document.get_pages().len(), "document parsed");
        Ok(Self { document })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Build a new document containing exactly the pages at the given
    /// zero-based indices, in the order given, and return its bytes.
    ///
    /// Page content is carried over unmodified. An empty index list is an
    /// error — a zero-page print job is never meaningful.
    #[instrument(skip(self), fields(total = self.page_count(), selected = indices.len()))]
    pub fn extract_pages(&self, indices: &[usize]) -> Result<Vec<u8>> {
        if indices.is_empty() {
            return Err(PresslaufError::Transform(
                "page selection is empty, nothing to extract".into(),
            ));
        }

        let pages = self.document.get_pages();
        let total = pages.len();

        let mut assembled = Document::with_version("1.5");
        let pages_root_id = assembled.new_object_id();

        let mut kids: Vec<Object> = Vec::with_capacity(indices.len());
        for &idx in indices {
            // lopdf keys pages by 1-based page number.
            let page_number = idx as u32 + 1;
            let page_id = *pages.get(&page_number).ok_or_else(|| {
                PresslaufError::Transform(format!(
                    "page index {idx} out of range (document has {total} pages)"
                ))
            })?;

            let cloned_id = self.copy_page_into(&mut assembled, page_id)?;

            // Point the clone at the new page tree root.
            if let Ok(Object::Dictionary(page_dict)) = assembled.get_object_mut(cloned_id) {
                page_dict.set("Parent", Object::Reference(pages_root_id));
            }
            kids.push(Object::Reference(cloned_id));
        }

        let count = kids.len() as i64;
        assembled.objects.insert(
            pages_root_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = assembled.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_root_id,
        });
        assembled.trailer.set("Root", catalog_id);

        let mut output = Vec::new();
        assembled.save_to(&mut output).map_err(|err| {
            PresslaufError::Transform(format!("cannot serialise extracted pages: {err}"))
        })?;

        debug!(output_bytes = output.len(), "pages extracted");
        Ok(output)
    }

    /// Extract the pages of one parity over the whole document.
    ///
    /// Parity is positional over document order: `Odd` keeps pages 1, 3,
    /// 5, … as a person would number them.
    pub fn extract_parity(&self, parity: Parity) -> Result<Vec<u8>> {
        let all: Vec<usize> = (0..self.page_count()).collect();
        self.extract_pages(&parity.select(&all))
    }

    /// Deep-clone one page (and the resources it references) into `target`,
    /// returning the clone's object id.
    fn copy_page_into(&self, target: &mut Document, page_id: ObjectId) -> Result<ObjectId> {
        let page_object = self.document.get_object(page_id).map_err(|err| {
            PresslaufError::Transform(format!("cannot read page object {page_id:?}: {err}"))
        })?;

        let cloned = import_object(&self.document, target, page_object);
        Ok(target.add_object(cloned))
    }
}

/// Recursively import an object from `source` into `target`.
///
/// References are resolved in the source and their targets imported as new
/// objects, so each extracted page is self-contained. `/Parent` is skipped
/// to break the page-tree cycle (the caller re-points it at the new tree);
/// references that cannot be resolved degrade to Null rather than aborting
/// the whole extraction.
fn import_object(source: &Document, target: &mut Document, object: &Object) -> Object {
    match object {
        Object::Dictionary(dict) => {
            let mut imported = lopdf::Dictionary::new();
            for (key, value) in dict.iter() {
                if key == b"Parent" {
                    continue;
                }
                imported.set(key.clone(), import_object(source, target, value));
            }
            Object::Dictionary(imported)
        }
        Object::Array(items) => Object::Array(
            items
                .iter()
                .map(|item| import_object(source, target, item))
                .collect(),
        ),
        Object::Stream(stream) => {
            let mut imported = lopdf::Dictionary::new();
            for (key, value) in stream.dict.iter() {
                if key == b"Parent" {
                    continue;
                }
                imported.set(key.clone(), import_object(source, target, value));
            }
            Object::Stream(lopdf::Stream::new(imported, stream.content.clone()))
        }
        Object::Reference(ref_id) => match source.get_object(*ref_id) {
            Ok(referenced) => {
                let imported = import_object(source, target, referenced);
                Object::Reference(target.add_object(imported))
            }
            Err(err) => {
                warn!(?ref_id, %err, "cannot resolve reference, using Null");
                Object::Null
            }
        },
        // Boolean, Integer, Real, String, Name, Null are trivially cloneable.
        other => other.clone(),
    }
}
