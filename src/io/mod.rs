//! Asynchronous boundaries of the pipeline.
//!
//! A [`Source`] hands over the raw text of a user-selected file; a [`Sink`]
//! accepts an [`ExportPayload`](crate::view::ExportPayload). These are the
//! only suspension points: everything between them is synchronous.

pub mod sink;
pub mod source;

pub use sink::{FileSink, Sink};
pub use source::{FileSource, Source, check_extension};
