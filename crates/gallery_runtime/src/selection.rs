//! Pending file selection carried from the upload form into the upload effect.

#[derive(Debug, Clone)]
/// A file chosen in the upload form, readable asynchronously on the browser target.
///
/// On non-wasm targets the selection wraps plain bytes so runtime flows stay testable without
/// a DOM.
pub struct FileSelection {
    #[cfg(target_arch = "wasm32")]
    file: web_sys::File,
    #[cfg(not(target_arch = "wasm32"))]
    name: String,
    #[cfg(not(target_arch = "wasm32"))]
    bytes: Vec<u8>,
}

#[cfg(target_arch = "wasm32")]
impl FileSelection {
    /// Wraps a browser file handle taken from a file input.
    pub fn from_file(file: web_sys::File) -> Self {
        Self { file }
    }

    /// Returns the original file name.
    pub fn name(&self) -> String {
        self.file.name()
    }

    /// Returns the browser-reported MIME type, when present.
    pub fn content_type(&self) -> Option<String> {
        let mime = self.file.type_();
        if mime.is_empty() {
            None
        } else {
            Some(mime)
        }
    }

    /// Reads the full file contents.
    ///
    /// # Errors
    ///
    /// Returns an error when the browser read fails or is aborted.
    pub async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        let buffer = wasm_bindgen_futures::JsFuture::from(self.file.array_buffer())
            .await
            .map_err(|err| format!("file read failed: {err:?}"))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSelection {
    /// Builds a selection from raw parts, for tests and non-browser targets.
    pub fn from_parts(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Returns the original file name.
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Returns the browser-reported MIME type, when present.
    pub fn content_type(&self) -> Option<String> {
        None
    }

    /// Reads the full file contents.
    ///
    /// # Errors
    ///
    /// Never fails on this target.
    pub async fn read_bytes(&self) -> Result<Vec<u8>, String> {
        Ok(self.bytes.clone())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn parts_selection_exposes_name_and_bytes() {
        let selection = FileSelection::from_parts("cat.png", vec![9, 9]);
        assert_eq!(selection.name(), "cat.png");
        assert_eq!(selection.content_type(), None);
        assert_eq!(block_on(selection.read_bytes()).expect("read"), vec![9, 9]);
    }
}
