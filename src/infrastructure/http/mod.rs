// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the portrait editing service.
//!
//! Both endpoints take a multipart body:
//! - `POST {base}/initialize` with a `file` part, answering a JSON object
//!   carrying a `message` field.
//! - `POST {base}/edit` with a `file` part and one text part per expression
//!   parameter, answering the encoded edited image.

use crate::application::port::{EditService, InitializeReply, ServiceError, ServiceResult};
use crate::domain::editing::ParameterSet;
use crate::domain::media::SourceImage;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

/// Endpoint path of the face preparation call.
pub const INITIALIZE_ENDPOINT: &str = "initialize";

/// Endpoint path of the render call.
pub const EDIT_ENDPOINT: &str = "edit";

/// Multipart field carrying the image file.
const FILE_FIELD: &str = "file";

/// Connection settings for [`HttpEditService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Base URL of the service, without the endpoint path.
    pub base_url: String,
    /// Upper bound for a whole request. `None` waits forever.
    pub request_timeout: Option<Duration>,
}

impl ServiceSettings {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Joins the base URL and an endpoint path with exactly one slash.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }
}

/// JSON body of a successful `initialize` call.
#[derive(Debug, Deserialize)]
struct InitializeBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

impl From<InitializeBody> for InitializeReply {
    fn from(body: InitializeBody) -> Self {
        Self {
            message: body.message,
            status: body.status,
        }
    }
}

/// [`EditService`] implementation backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpEditService {
    client: reqwest::Client,
    settings: ServiceSettings,
}

impl HttpEditService {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] if the TLS backend cannot be
    /// initialized.
    pub fn new(settings: ServiceSettings) -> ServiceResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("IcedPortrait/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Ok(Self { client, settings })
    }

    #[must_use]
    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    async fn post(
        client: reqwest::Client,
        url: String,
        endpoint: &'static str,
        form: Form,
    ) -> ServiceResult<Vec<u8>> {
        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                code: status.as_u16(),
                endpoint,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;
        Ok(body.to_vec())
    }
}

impl EditService for HttpEditService {
    fn initialize(&self, image: SourceImage) -> BoxFuture<'static, ServiceResult<InitializeReply>> {
        let client = self.client.clone();
        let url = self.settings.endpoint_url(INITIALIZE_ENDPOINT);

        async move {
            let form = Form::new().part(FILE_FIELD, file_part(&image)?);
            let body = Self::post(client, url, INITIALIZE_ENDPOINT, form).await?;
            parse_initialize_body(&body)
        }
        .boxed()
    }

    fn edit(
        &self,
        image: SourceImage,
        parameters: ParameterSet,
    ) -> BoxFuture<'static, ServiceResult<Vec<u8>>> {
        let client = self.client.clone();
        let url = self.settings.endpoint_url(EDIT_ENDPOINT);

        async move {
            let form = edit_form(&image, &parameters)?;
            Self::post(client, url, EDIT_ENDPOINT, form).await
        }
        .boxed()
    }
}

/// Builds the `file` part, keeping the original file name and MIME type.
fn file_part(image: &SourceImage) -> ServiceResult<Part> {
    Part::bytes(image.bytes().to_vec())
        .file_name(image.file_name().to_string())
        .mime_str(image.mime_type())
        .map_err(|e| ServiceError::Transport(format!("invalid MIME type: {e}")))
}

/// Builds the multipart body of an edit call: the file plus every parameter.
fn edit_form(image: &SourceImage, parameters: &ParameterSet) -> ServiceResult<Form> {
    let form = Form::new().part(FILE_FIELD, file_part(image)?);
    Ok(parameters
        .form_fields()
        .into_iter()
        .fold(form, |form, (name, value)| form.text(name, value)))
}

fn parse_initialize_body(body: &[u8]) -> ServiceResult<InitializeReply> {
    serde_json::from_slice::<InitializeBody>(body)
        .map(InitializeReply::from)
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))
}

fn transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Transport(format!("timed out: {err}"))
    } else {
        ServiceError::Transport(err.to_string())
    }
}
