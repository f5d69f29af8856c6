//! Browsing session driven by discrete events.
//!
//! A [`Session`] is an immutable record of what is loaded, what is being
//! searched for, and which page is shown. [`Session::apply`] consumes one
//! [`Event`] and returns the next session together with the payload for the
//! renderer or the sink. The dataset is shared between successive records
//! through an `Arc` and is never mutated.

use super::pagination::{PageDescriptor, clamp_page, paginate_with, total_pages};
use crate::common::Result;
use crate::config::ViewConfig;
use crate::sheet::text::{TextConfig, read_delimited, write_delimited};
use crate::sheet::{Columns, DataRow, Dataset, filter};
use serde::Serialize;
use std::sync::Arc;

/// External events the session reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Raw text of a newly selected file
    FileLoaded(String),
    /// Search box content changed
    SearchChanged(String),
    /// A page control was activated
    PageChanged(usize),
    /// Export of the current search result was requested
    ExportRequested,
}

/// Everything a renderer needs for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPayload {
    pub columns: Columns,
    pub rows: Vec<DataRow>,
    pub page: PageDescriptor,
}

/// Serialized export text and the filename to suggest for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub text: String,
    pub filename: String,
}

/// What an event produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Render(RenderPayload),
    Export(ExportPayload),
}

/// Immutable per-event session state.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Option<Arc<Dataset>>,
    search_term: String,
    current_page: usize,
    config: ViewConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl Session {
    /// Empty session with the given view settings.
    pub fn new(config: ViewConfig) -> Self {
        Session {
            dataset: None,
            search_term: String::new(),
            current_page: 1,
            config,
        }
    }

    /// Currently loaded dataset, if any.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_deref()
    }

    /// Active search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current page, always within `[1, total_pages]` (1 when there are none).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// View settings.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Apply one event.
    ///
    /// On error the caller keeps `self`; in particular a failed
    /// [`Event::FileLoaded`] leaves the previous dataset in place.
    ///
    /// # Errors
    ///
    /// [`crate::Error::EmptyInput`] when loaded text has no header line.
    pub fn apply(&self, event: Event) -> Result<(Session, Output)> {
        let next = match event {
            Event::FileLoaded(raw) => {
                let dataset = read_delimited(&raw, &TextConfig::csv())?;
                tracing::info!(
                    rows = dataset.len(),
                    columns = dataset.columns().len(),
                    "loaded dataset"
                );
                Session {
                    dataset: Some(Arc::new(dataset)),
                    current_page: 1,
                    ..self.clone()
                }
            },
            Event::SearchChanged(term) => Session {
                search_term: term,
                current_page: 1,
                ..self.clone()
            },
            Event::PageChanged(page) => Session {
                current_page: page,
                ..self.clone()
            },
            Event::ExportRequested => {
                let export = self.export();
                tracing::info!(
                    filename = %export.filename,
                    bytes = export.text.len(),
                    "prepared export"
                );
                return Ok((self.clone(), Output::Export(export)));
            },
        };

        let next = next.settled();
        let payload = next.render();
        Ok((next, Output::Render(payload)))
    }

    /// Rows matching the active search, in source order.
    pub fn filtered_rows(&self) -> Vec<&DataRow> {
        match &self.dataset {
            Some(dataset) => filter(dataset.rows(), &self.search_term),
            None => Vec::new(),
        }
    }

    /// Pagination for the active search and current page.
    pub fn page(&self) -> PageDescriptor {
        self.page_over(self.filtered_rows().len())
    }

    /// Payload for the renderer: the rows of the current page.
    pub fn render(&self) -> RenderPayload {
        let matched = self.filtered_rows();
        let page = self.page_over(matched.len());
        let rows = matched[page.record_range()].iter().map(|&row| row.clone()).collect();

        RenderPayload {
            columns: self.columns(),
            rows,
            page,
        }
    }

    /// Payload for the sink: every row matching the active search.
    pub fn export(&self) -> ExportPayload {
        let text_config = TextConfig::csv().with_write_bom(self.config.write_bom);
        let columns = self.columns();
        let text = write_delimited(self.filtered_rows(), &columns, &text_config);

        ExportPayload {
            text,
            filename: self.config.export_filename.clone(),
        }
    }

    fn page_over(&self, matched: usize) -> PageDescriptor {
        paginate_with(matched, self.current_page, self.config.page_size, self.config.max_buttons)
    }

    fn columns(&self) -> Columns {
        self.dataset
            .as_ref()
            .map(|dataset| dataset.columns().clone())
            .unwrap_or_default()
    }

    /// Clamp the current page against the filtered result.
    fn settled(mut self) -> Self {
        let pages = total_pages(self.filtered_rows().len(), self.config.page_size);
        let clamped = clamp_page(self.current_page, pages);
        if clamped != self.current_page {
            tracing::debug!(requested = self.current_page, clamped, pages, "clamped current page");
            self.current_page = clamped;
        }
        self
    }
}
