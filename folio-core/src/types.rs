//! Record types shared by every stage

use serde::{Deserialize, Deserializer, Serialize};

/// One page of extracted document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// 1-based physical page number
    pub page: u32,
    /// Extracted text; `null` or missing becomes empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

impl PageRecord {
    /// Create a page record
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// A page-segmented document as produced by the extraction stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Source identifier (file stem), carried onto every chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_id: Option<String>,
    /// Document title
    #[serde(default)]
    pub title: String,
    /// Pages in physical order
    #[serde(default)]
    pub pages: Vec<PageRecord>,
}

impl Document {
    /// Create a document without a source identifier
    pub fn new(title: impl Into<String>, pages: Vec<PageRecord>) -> Self {
        Self {
            pdf_id: None,
            title: title.into(),
            pages,
        }
    }

    /// Attach a source identifier
    pub fn with_id(mut self, pdf_id: impl Into<String>) -> Self {
        self.pdf_id = Some(pdf_id.into());
        self
    }

    /// Page number of the last page, if any
    pub fn last_page(&self) -> Option<u32> {
        self.pages.last().map(|p| p.page)
    }
}

/// An overlapping window of coarse tokens with its page span
///
/// `tokens` stays `None` until the lexical filter has run, and is omitted
/// from serialized output in that state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Source identifier of the owning document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_id: Option<String>,
    /// Page on which the window was (re)started
    pub start_page: u32,
    /// Page being processed when the window closed
    pub end_page: u32,
    /// Space-joined coarse tokens
    pub text: String,
    /// Filtered lemmas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
}

impl Chunk {
    /// Create an unfiltered chunk
    pub fn new(start_page: u32, end_page: u32, text: impl Into<String>) -> Self {
        Self {
            pdf_id: None,
            start_page,
            end_page,
            text: text.into(),
            tokens: None,
        }
    }

    /// Number of coarse tokens in the window
    pub fn token_count(&self) -> usize {
        self.text.split(' ').filter(|t| !t.is_empty()).count()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
