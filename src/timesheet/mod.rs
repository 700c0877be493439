//! The timesheet workbook: document model, xlsx persistence and the codec
//! between monthly sheets and time entries.

pub mod codec;
pub mod document;
mod excel_date;
pub mod layout;
mod reader;
mod style;
pub mod summary;
mod xlsx;

pub use codec::{DecodeOutcome, EncodeReport, decode_month, decode_sheet, encode, read_lookups};
pub use document::{Cell, Document, Sheet};
pub use layout::{Column, MonthLayout};
pub use summary::MonthTotal;
