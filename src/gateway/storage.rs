//! File Storage Calls
//!
//! Image upload into the public bucket. Uploaded objects are addressable at a
//! deterministic public URL, so no second round trip is needed after upload.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen_futures::JsFuture;

use super::{api_error, Gateway};
use crate::error::GatewayError;

/// Characters that must not appear raw in a storage object path segment.
const OBJECT_NAME: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'?')
    .add(b'/');

impl Gateway {
    /// Upload an image file under a random-prefixed name and return its
    /// public URL. The random prefix keeps repeated uploads of the same
    /// filename from colliding; slashes are stripped so the name stays a
    /// single path segment.
    pub async fn upload_image(&self, file: &web_sys::File) -> Result<String, GatewayError> {
        let bytes = read_file_bytes(file).await?;
        let object_name = format!("{}-{}", js_sys::Math::random(), file.name()).replace('/', "");
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.config.url,
            self.config.bucket,
            utf8_percent_encode(&object_name, OBJECT_NAME)
        );

        let content_type = if file.type_().is_empty() {
            "application/octet-stream".to_string()
        } else {
            file.type_()
        };
        let resp = self
            .authorized(self.http.post(url))
            .header("content-type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| GatewayError::Write(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(api_error(resp, GatewayError::Write).await);
        }
        Ok(self.public_image_url(&object_name))
    }

    /// Public address of an uploaded object: `{base}/storage/v1/object/public/{bucket}/{name}`.
    pub fn public_image_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url,
            self.config.bucket,
            utf8_percent_encode(object_name, OBJECT_NAME)
        )
    }
}

async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, GatewayError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| GatewayError::Write(format!("could not read file: {e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[cfg(test)]
mod tests {
    use crate::config::GatewayConfig;
    use crate::gateway::Gateway;

    fn gateway() -> Gateway {
        Gateway::new(GatewayConfig {
            url: "https://proj.example.co".to_string(),
            anon_key: "anon".to_string(),
            bucket: "restaurants".to_string(),
        })
    }

    #[test]
    fn test_public_url_pattern() {
        assert_eq!(
            gateway().public_image_url("0.42-cafe.jpg"),
            "https://proj.example.co/storage/v1/object/public/restaurants/0.42-cafe.jpg"
        );
    }

    #[test]
    fn test_public_url_encodes_unsafe_characters() {
        assert_eq!(
            gateway().public_image_url("0.1-my photo#1.jpg"),
            "https://proj.example.co/storage/v1/object/public/restaurants/0.1-my%20photo%231.jpg"
        );
    }
}
