use contracts::shared::export::ExportTable;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Writes `{ sheetName, headers, rows }` as an `.xlsx` download
    #[wasm_bindgen(js_name = writeExcelFile, catch)]
    fn write_excel_file(table: JsValue, file_name: &str) -> Result<(), JsValue>;
}

pub fn write_export_table(table: &ExportTable, file_name: &str) -> Result<(), String> {
    let value = serde_wasm_bindgen::to_value(table)
        .map_err(|e| format!("No se pudo preparar el reporte: {}", e))?;
    write_excel_file(value, file_name).map_err(|e| format!("No se pudo generar el Excel: {:?}", e))?;
    log::info!("Exported {} rows to {}", table.len(), file_name);
    Ok(())
}
