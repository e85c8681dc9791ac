use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// First sheet as an array of rows of cell texts
    #[wasm_bindgen(js_name = parseExcelFile, catch)]
    pub fn parse_excel_file(data: &[u8]) -> Result<JsValue, JsValue>;
}

pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Error leyendo el archivo: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&array_buffer).to_vec())
}

/// First sheet of an in-memory workbook as text cells
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<Vec<String>>, String> {
    let result =
        parse_excel_file(bytes).map_err(|e| format!("Error leyendo el Excel: {:?}", e))?;
    parse_js_array_to_vec(result)
}

/// Reads the first sheet of an `.xlsx`/`.xls` file as text cells
pub async fn read_excel_from_file(file: &web_sys::File) -> Result<Vec<Vec<String>>, String> {
    let bytes = read_file_bytes(file).await?;
    parse_workbook(&bytes)
}

fn parse_js_array_to_vec(js_value: JsValue) -> Result<Vec<Vec<String>>, String> {
    if !js_value.is_array() {
        return Err("El resultado de la lectura no es una tabla".to_string());
    }

    let array = js_sys::Array::from(&js_value);
    let mut result = Vec::with_capacity(array.length() as usize);

    for row_value in array.iter() {
        if !row_value.is_array() {
            continue;
        }
        let row = js_sys::Array::from(&row_value)
            .iter()
            .map(|cell| {
                if cell.is_null() || cell.is_undefined() {
                    String::new()
                } else if let Some(s) = cell.as_string() {
                    s
                } else if let Some(n) = cell.as_f64() {
                    n.to_string()
                } else {
                    format!("{:?}", cell).trim_matches('"').to_string()
                }
            })
            .collect();
        result.push(row);
    }

    Ok(result)
}
