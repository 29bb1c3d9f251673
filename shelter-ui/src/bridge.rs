use js_sys::{Reflect, Uint8Array};
use serde::de::DeserializeOwned;
use shelter_core::query::CollectionQuery;
use shelter_core::service::{DataService, ServiceConfig, ServiceError, PET_IMAGES_BUCKET};
use shelter_core::submission::{ImageAttachment, NewReport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Production data service: window.fetch against the managed backend.
pub struct RestService {
    config: ServiceConfig,
}

impl RestService {
    /// Reads the endpoint and anon key from the `__SHELTER_ENV__` window
    /// global (`url` / `anon_key` properties), falling back to values baked
    /// in at compile time.
    pub fn from_env() -> Result<Self, ServiceError> {
        let url = env_value("url", option_env!("SHELTER_SERVICE_URL"))?;
        let anon_key = env_value("anon_key", option_env!("SHELTER_ANON_KEY"))?;
        Ok(Self {
            config: ServiceConfig::new(url, anon_key),
        })
    }

    fn headers(&self, content_type: Option<&str>) -> Result<Headers, ServiceError> {
        let headers = Headers::new().map_err(js_error)?;
        headers.append("apikey", self.config.anon_key()).map_err(js_error)?;
        headers
            .append("Authorization", &format!("Bearer {}", self.config.anon_key()))
            .map_err(js_error)?;
        if let Some(content_type) = content_type {
            headers.append("Content-Type", content_type).map_err(js_error)?;
        }
        Ok(headers)
    }

    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: Headers,
        body: Option<JsValue>,
    ) -> Result<Response, ServiceError> {
        let init = RequestInit::new();
        init.set_method(method);
        init.set_headers(headers.as_ref());
        if let Some(body) = body {
            init.set_body(&body);
        }

        let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
        let window = web_sys::window().ok_or_else(|| ServiceError::Network("window not available".into()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| ServiceError::Network("fetch did not return a response".into()))?;

        if !response.ok() {
            let body = response_text(&response).await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: response.status(),
                body,
            });
        }
        Ok(response)
    }
}

impl DataService for RestService {
    async fn select<T: DeserializeOwned>(&self, query: CollectionQuery) -> Result<Vec<T>, ServiceError> {
        let url = self.config.select_url(&query);
        let response = self.request("GET", &url, self.headers(None)?, None).await?;
        let json = JsFuture::from(response.json().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        serde_wasm_bindgen::from_value(json).map_err(|err| ServiceError::Decode(err.to_string()))
    }

    async fn insert_report(&self, report: &NewReport) -> Result<(), ServiceError> {
        let url = self.config.insert_url("reports");
        let body = serde_json::to_string(&[report]).map_err(|err| ServiceError::Decode(err.to_string()))?;
        self.request(
            "POST",
            &url,
            self.headers(Some("application/json"))?,
            Some(JsValue::from_str(&body)),
        )
        .await?;
        Ok(())
    }

    async fn upload(&self, path: &str, content_type: &str, bytes: &[u8]) -> Result<String, ServiceError> {
        let url = self.config.upload_url(PET_IMAGES_BUCKET, path);
        let body = Uint8Array::from(bytes);
        self.request("POST", &url, self.headers(Some(content_type))?, Some(body.into()))
            .await?;
        Ok(self.config.public_url(PET_IMAGES_BUCKET, path))
    }
}

/// Pulls the chosen file into memory so the submission workflow can hand the
/// bytes to storage.
pub async fn read_attachment(file: web_sys::File) -> Result<ImageAttachment, ServiceError> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_error)?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    let content_type = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(ImageAttachment {
        file_name: file.name(),
        content_type,
        bytes,
    })
}

fn env_value(key: &str, fallback: Option<&'static str>) -> Result<String, ServiceError> {
    if let Some(value) = window_env(key) {
        return Ok(value);
    }
    fallback
        .map(str::to_string)
        .ok_or_else(|| ServiceError::Config(format!("__SHELTER_ENV__.{key} is not set")))
}

fn window_env(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let env = Reflect::get(&window, &JsValue::from_str("__SHELTER_ENV__")).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    let value = Reflect::get(&env, &JsValue::from_str(key)).ok()?;
    value.as_string().filter(|v| !v.is_empty())
}

fn js_error(err: JsValue) -> ServiceError {
    ServiceError::Network(format!("{err:?}"))
}

async fn response_text(response: &Response) -> Option<String> {
    let text = JsFuture::from(response.text().ok()?).await.ok()?;
    text.as_string()
}
