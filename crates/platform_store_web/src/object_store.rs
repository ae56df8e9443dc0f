//! Fetch-backed object store speaking the Supabase Storage REST surface.

use platform_store::{ObjectEntry, ObjectStore, ObjectStoreFuture, StoreError};

use crate::config::StoreTarget;

#[derive(Debug, Clone)]
/// Browser object-store adapter bound to one [`StoreTarget`] bucket.
pub struct WebObjectStore {
    target: StoreTarget,
}

impl WebObjectStore {
    /// Binds the adapter to a configured remote target.
    pub fn new(target: StoreTarget) -> Self {
        Self { target }
    }

    /// Returns the bound target, mainly for diagnostics.
    pub fn target(&self) -> &StoreTarget {
        &self.target
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    use serde::Serialize;
    use wasm_bindgen::JsValue;

    use super::*;
    use crate::fetch;

    #[derive(Serialize)]
    struct ListRequestBody<'a> {
        prefix: &'a str,
        limit: u32,
        offset: u32,
    }

    #[derive(Serialize)]
    struct RemoveRequestBody<'a> {
        prefixes: &'a [String],
    }

    fn json_body<T: Serialize>(value: &T) -> Result<JsValue, StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Payload(e.to_string()))?;
        Ok(JsValue::from_str(&raw))
    }

    impl WebObjectStore {
        fn object_url(&self, key: &str) -> String {
            let encoded = String::from(js_sys::encode_uri_component(key));
            format!(
                "{}/storage/v1/object/{}/{}",
                self.target.endpoint, self.target.bucket, encoded
            )
        }

        pub(super) async fn list_impl(
            &self,
            prefix: &str,
            limit: u32,
        ) -> Result<Vec<ObjectEntry>, StoreError> {
            let url = format!(
                "{}/storage/v1/object/list/{}",
                self.target.endpoint, self.target.bucket
            );
            let body = json_body(&ListRequestBody {
                prefix,
                limit,
                offset: 0,
            })?;
            let headers = fetch::auth_headers(&self.target.api_key, Some("application/json"))?;
            let request = fetch::build_request(&url, "POST", headers, Some(&body))?;
            let body = fetch::send(request).await?.into_success_body()?;
            serde_json::from_str(&body).map_err(|e| StoreError::Payload(e.to_string()))
        }

        pub(super) async fn upload_impl(
            &self,
            key: &str,
            bytes: Vec<u8>,
            content_type: Option<String>,
        ) -> Result<String, StoreError> {
            let url = self.object_url(key);
            let headers =
                fetch::auth_headers(&self.target.api_key, content_type.as_deref())?;
            let body: JsValue = js_sys::Uint8Array::from(bytes.as_slice()).into();
            let request = fetch::build_request(&url, "POST", headers, Some(&body))?;
            let outcome = fetch::send(request).await?;
            if outcome.status == 409 {
                return Err(StoreError::AlreadyExists(key.to_string()));
            }
            outcome.into_success_body()?;
            Ok(key.to_string())
        }

        pub(super) async fn remove_impl(&self, keys: &[String]) -> Result<(), StoreError> {
            let url = format!(
                "{}/storage/v1/object/{}",
                self.target.endpoint, self.target.bucket
            );
            let body = json_body(&RemoveRequestBody { prefixes: keys })?;
            let headers = fetch::auth_headers(&self.target.api_key, Some("application/json"))?;
            let request = fetch::build_request(&url, "DELETE", headers, Some(&body))?;
            fetch::send(request).await?.into_success_body()?;
            Ok(())
        }
    }
}

impl ObjectStore for WebObjectStore {
    fn list<'a>(
        &'a self,
        prefix: &'a str,
        limit: u32,
    ) -> ObjectStoreFuture<'a, Result<Vec<ObjectEntry>, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                self.list_impl(prefix, limit).await.map_err(|e| e.to_string())
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (prefix, limit);
                Err(StoreError::Unavailable("list").to_string())
            }
        })
    }

    fn upload<'a>(
        &'a self,
        key: &'a str,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> ObjectStoreFuture<'a, Result<String, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                self.upload_impl(key, bytes, content_type)
                    .await
                    .map_err(|e| e.to_string())
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (key, bytes, content_type);
                Err(StoreError::Unavailable("upload").to_string())
            }
        })
    }

    fn remove<'a>(&'a self, keys: &'a [String]) -> ObjectStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                self.remove_impl(keys).await.map_err(|e| e.to_string())
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = keys;
                Err(StoreError::Unavailable("remove").to_string())
            }
        })
    }

    fn public_url(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        let encoded = String::from(js_sys::encode_uri_component(key));
        #[cfg(not(target_arch = "wasm32"))]
        let encoded = key.to_string();
        Some(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.target.endpoint, self.target.bucket, encoded
        ))
    }
}
