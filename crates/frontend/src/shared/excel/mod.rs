//! SheetJS bindings. The spreadsheet binary format is handled in JS
//! (`parseExcelFile` / `writeExcelFile` in `index.html`).

pub mod parser;
pub mod writer;

pub use parser::{parse_workbook, read_excel_from_file, read_file_bytes};
pub use writer::write_export_table;
