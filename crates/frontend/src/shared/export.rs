//! Browser downloads: blobs, generated reports and text files.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// How a text file left the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written through the save dialog
    Saved,
    /// Plain anchor download (no File System Access API)
    Downloaded,
    /// User closed the save dialog
    NotSaved,
}

pub fn bytes_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn text_blob(content: &str) -> Result<Blob, String> {
    let array = Array::new();
    array.push(&JsValue::from_str(content));
    let properties = BlobPropertyBag::new();
    properties.set_type("text/plain;charset=utf-8");
    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Triggers a browser download of `blob` through a temporary anchor
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

pub fn download_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), String> {
    let blob = bytes_blob(bytes, mime)?;
    download_blob(&blob, filename)
}

fn is_abort(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map(|e| e.name() == "AbortError")
        .unwrap_or(false)
}

async fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let result = method.apply(target, args)?;
    match result.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(value) => Ok(value),
    }
}

/// The calls `save_text_file` makes on a `FileSystemWritableFileStream`
trait WritableFile {
    type Error: std::fmt::Debug;

    async fn write(&self, content: &str) -> Result<(), Self::Error>;
    async fn close(&self) -> Result<(), Self::Error>;
    async fn abort(&self) -> Result<(), Self::Error>;
}

impl WritableFile for JsValue {
    type Error = JsValue;

    async fn write(&self, content: &str) -> Result<(), JsValue> {
        call_method(self, "write", &Array::of1(&JsValue::from_str(content))).await.map(|_| ())
    }

    async fn close(&self) -> Result<(), JsValue> {
        call_method(self, "close", &Array::new()).await.map(|_| ())
    }

    async fn abort(&self) -> Result<(), JsValue> {
        call_method(self, "abort", &Array::new()).await.map(|_| ())
    }
}

/// Writes and commits; a failed write aborts the stream so the partial
/// file is discarded and the lock released
async fn write_text<W: WritableFile>(file: &W, content: &str) -> Result<(), String> {
    if let Err(e) = file.write(content).await {
        if let Err(abort_err) = file.abort().await {
            log::warn!("could not abort the file stream: {:?}", abort_err);
        }
        return Err(format!("No se pudo escribir el archivo: {:?}", e));
    }
    file.close()
        .await
        .map_err(|e| format!("No se pudo cerrar el archivo: {:?}", e))
}

/// Saves a `.txt`: save dialog when the browser has `showSaveFilePicker`,
/// anchor download otherwise
pub async fn save_text_file(content: &str, suggested_name: &str) -> Result<SaveOutcome, String> {
    let window = web_sys::window().ok_or("No window object")?;
    let window: JsValue = window.into();

    let has_picker = Reflect::get(&window, &JsValue::from_str("showSaveFilePicker"))
        .map(|f| f.is_function())
        .unwrap_or(false);

    if !has_picker {
        download_blob(&text_blob(content)?, suggested_name)?;
        return Ok(SaveOutcome::Downloaded);
    }

    let options = Object::new();
    let accept = Object::new();
    let set = |target: &Object, key: &str, value: &JsValue| {
        Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
    };
    let file_type = Object::new();
    let to_err = |e: JsValue| format!("{:?}", e);
    set(&accept, "text/plain", &Array::of1(&JsValue::from_str(".txt"))).map_err(to_err)?;
    set(&file_type, "description", &JsValue::from_str("Texto")).map_err(to_err)?;
    set(&file_type, "accept", &accept).map_err(to_err)?;
    set(&options, "suggestedName", &JsValue::from_str(suggested_name)).map_err(to_err)?;
    set(&options, "types", &Array::of1(&file_type)).map_err(to_err)?;

    let handle = match call_method(&window, "showSaveFilePicker", &Array::of1(&options)).await {
        Ok(handle) => handle,
        Err(e) if is_abort(&e) => return Ok(SaveOutcome::NotSaved),
        Err(e) => return Err(format!("No se pudo abrir el diálogo de guardado: {:?}", e)),
    };

    let writable = call_method(&handle, "createWritable", &Array::new())
        .await
        .map_err(|e| format!("No se pudo crear el archivo: {:?}", e))?;
    write_text(&writable, content).await?;

    Ok(SaveOutcome::Saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::future::Future;
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct RecordingFile {
        fail_write: bool,
        calls: RefCell<Vec<&'static str>>,
    }

    impl RecordingFile {
        fn new(fail_write: bool) -> Self {
            Self { fail_write, calls: RefCell::new(Vec::new()) }
        }
    }

    impl WritableFile for RecordingFile {
        type Error = &'static str;

        async fn write(&self, _content: &str) -> Result<(), &'static str> {
            self.calls.borrow_mut().push("write");
            if self.fail_write {
                Err("QuotaExceededError")
            } else {
                Ok(())
            }
        }

        async fn close(&self) -> Result<(), &'static str> {
            self.calls.borrow_mut().push("close");
            Ok(())
        }

        async fn abort(&self) -> Result<(), &'static str> {
            self.calls.borrow_mut().push("abort");
            Ok(())
        }
    }

    struct NoopWake;

    impl Wake for NoopWake {
        fn wake(self: Arc<Self>) {}
    }

    /// The stub never suspends, so one poll completes it
    fn run<T>(future: impl Future<Output = T>) -> T {
        let waker = Waker::from(Arc::new(NoopWake));
        let mut cx = Context::from_waker(&waker);
        match pin!(future).poll(&mut cx) {
            Poll::Ready(value) => value,
            Poll::Pending => panic!("stub future suspended"),
        }
    }

    #[test]
    fn failed_write_aborts_instead_of_closing() {
        let file = RecordingFile::new(true);
        let err = run(write_text(&file, "informe")).unwrap_err();
        assert!(err.starts_with("No se pudo escribir el archivo"));
        assert_eq!(*file.calls.borrow(), vec!["write", "abort"]);
    }

    #[test]
    fn successful_write_is_committed() {
        let file = RecordingFile::new(false);
        assert_eq!(run(write_text(&file, "informe")), Ok(()));
        assert_eq!(*file.calls.borrow(), vec!["write", "close"]);
    }
}
