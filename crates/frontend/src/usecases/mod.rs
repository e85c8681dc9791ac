pub mod u501_spreadsheet_import;
pub mod u502_bulk_delete;
