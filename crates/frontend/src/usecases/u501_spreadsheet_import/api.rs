use std::cell::Cell;
use std::rc::Rc;

use contracts::shared::errors::ApiError;
use contracts::usecases::u501_spreadsheet_import::content_disposition::filename_from_content_disposition;
use contracts::usecases::u501_spreadsheet_import::{FilaLineExtractor, UploadOutcome, UploadResponse};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, FormData};

use crate::shared::excel::parse_workbook;
use crate::shared::http::{authorized, error_from, network_error};

/// Spreadsheet returned by the server in place of a JSON summary
#[derive(Debug, Clone)]
pub struct ReturnedWorkbook {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct UploadReply {
    pub outcome: UploadOutcome,
    pub workbook: Option<ReturnedWorkbook>,
}

fn is_spreadsheet(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.contains("spreadsheetml") || ct.contains("ms-excel") || ct.contains("octet-stream")
}

fn fallback_name(uploaded: &str) -> String {
    let stem = uploaded.rsplit_once('.').map(|(s, _)| s).unwrap_or(uploaded);
    format!("resultado_{}.xlsx", stem)
}

async fn read_reply(response: &Response, uploaded_name: &str) -> Result<(UploadResponse, Option<ReturnedWorkbook>), ApiError> {
    let headers = response.headers();
    let content_type = headers.get("Content-Type").unwrap_or_default();

    if is_spreadsheet(&content_type) {
        let bytes = response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let file_name = headers
            .get("Content-Disposition")
            .and_then(|cd| filename_from_content_disposition(&cd))
            .unwrap_or_else(|| fallback_name(uploaded_name));
        let cells = match parse_workbook(&bytes) {
            Ok(grid) => grid.into_iter().flatten().filter(|c| !c.trim().is_empty()).collect(),
            Err(e) => {
                log::warn!("returned workbook could not be scanned: {}", e);
                Vec::new()
            }
        };
        let response = UploadResponse::Spreadsheet {
            file_name: file_name.clone(),
            cells,
        };
        return Ok((response, Some(ReturnedWorkbook { file_name, bytes })));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let parsed = if content_type.contains("json") {
        match serde_json::from_str(&text) {
            Ok(value) => UploadResponse::Json(value),
            Err(_) => UploadResponse::Text(text),
        }
    } else if content_type.starts_with("text/") || content_type.is_empty() {
        UploadResponse::Text(text)
    } else {
        UploadResponse::Unrecognized { content_type }
    };
    Ok((parsed, None))
}

/// Posts `file` (plus numeric form fields) as multipart. `controller` lets
/// the caller cancel; `timeout_ms` aborts with [`ApiError::Timeout`].
pub async fn upload_spreadsheet(
    url: &str,
    file: &web_sys::File,
    fields: &[(&'static str, i64)],
    controller: &AbortController,
    timeout_ms: u32,
) -> Result<UploadReply, ApiError> {
    let form = FormData::new().map_err(|e| network_error(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| network_error(format!("{:?}", e)))?;
    for (key, value) in fields {
        form.append_with_str(key, &value.to_string())
            .map_err(|e| network_error(format!("{:?}", e)))?;
    }

    let timed_out = Rc::new(Cell::new(false));
    let timer = {
        let timed_out = timed_out.clone();
        let controller = controller.clone();
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    log::info!("POST {} ({} bytes)", url, file.size());
    let signal = controller.signal();
    let sent = authorized(Request::post(url))
        .abort_signal(Some(&signal))
        .body(form)
        .map_err(network_error)?
        .send()
        .await;
    drop(timer);

    let response = match sent {
        Ok(response) => response,
        Err(_) if timed_out.get() => return Err(ApiError::Timeout),
        Err(_) if signal.aborted() => return Err(ApiError::Cancelled),
        Err(e) => return Err(network_error(e)),
    };
    if !response.ok() {
        return Err(error_from(response).await);
    }

    let (parsed, workbook) = read_reply(&response, &file.name()).await?;
    let headers = response.headers();
    let outcome = UploadOutcome::from_response(&parsed, &FilaLineExtractor, &|name: &str| headers.get(name));
    Ok(UploadReply { outcome, workbook })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spreadsheet_content_types() {
        assert!(is_spreadsheet(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ));
        assert!(is_spreadsheet("application/octet-stream"));
        assert!(!is_spreadsheet("application/json"));
    }

    #[test]
    fn fallback_result_name() {
        assert_eq!(fallback_name("ventas marzo.xlsx"), "resultado_ventas marzo.xlsx");
        assert_eq!(fallback_name("sin_extension"), "resultado_sin_extension.xlsx");
    }
}
