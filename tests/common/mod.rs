// SPDX-License-Identifier: MPL-2.0
//! Stub editing service shared by the integration tests.

#![allow(dead_code)]

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use image_rs::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use iced_portrait::domain::media::SourceImage;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Encodes a solid-color PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([30, 90, 160, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

pub fn cat_png() -> SourceImage {
    SourceImage::new("cat.png", "image/png", png_bytes(4, 4))
}

/// One multipart request as seen by the stub.
#[derive(Debug, Clone, Default)]
pub struct Captured {
    pub endpoint: &'static str,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub file_len: usize,
    pub fields: Vec<(String, String)>,
}

impl Captured {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// How the stub answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// JSON on `initialize`, a 6x6 PNG on `edit`.
    Healthy,
    /// HTTP 500 on both endpoints.
    Failing,
    /// 200 with a body that is neither JSON nor an image.
    Garbage,
    /// Healthy, but every reply waits this long first.
    Slow(Duration),
}

#[derive(Clone)]
struct StubState {
    behavior: Behavior,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// Running stub server.
pub struct StubService {
    pub base_url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl StubService {
    pub async fn start(behavior: Behavior) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            behavior,
            captured: captured.clone(),
        };
        let router = Router::new()
            .route("/initialize", post(initialize))
            .route("/edit", post(edit))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub server");
        });

        Self {
            base_url: format!("http://{addr}"),
            captured,
        }
    }

    pub fn captured(&self) -> Vec<Captured> {
        self.captured.lock().expect("captured lock").clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.captured()
            .iter()
            .filter(|request| request.endpoint == endpoint)
            .count()
    }
}

/// Returns a base URL nobody listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{addr}")
}

async fn capture(endpoint: &'static str, mut multipart: Multipart) -> Captured {
    let mut captured = Captured {
        endpoint,
        ..Captured::default()
    };

    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            captured.file_name = field.file_name().map(ToString::to_string);
            captured.content_type = field.content_type().map(ToString::to_string);
            captured.file_len = field.bytes().await.expect("file bytes").len();
        } else {
            let value = field.text().await.expect("text field");
            captured.fields.push((name, value));
        }
    }

    captured
}

async fn initialize(State(state): State<StubState>, multipart: Multipart) -> Response {
    let captured = capture("initialize", multipart).await;
    state.captured.lock().expect("captured lock").push(captured);

    match state.behavior {
        Behavior::Failing => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Behavior::Garbage => "definitely not json".into_response(),
        Behavior::Healthy | Behavior::Slow(_) => {
            if let Behavior::Slow(delay) = state.behavior {
                tokio::time::sleep(delay).await;
            }
            Json(serde_json::json!({
                "message": "initialized",
                "status": "success",
            }))
            .into_response()
        }
    }
}

async fn edit(State(state): State<StubState>, multipart: Multipart) -> Response {
    let captured = capture("edit", multipart).await;
    state.captured.lock().expect("captured lock").push(captured);

    match state.behavior {
        Behavior::Failing => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Behavior::Garbage => ([(header::CONTENT_TYPE, "image/png")], "not a png").into_response(),
        Behavior::Healthy | Behavior::Slow(_) => {
            if let Behavior::Slow(delay) = state.behavior {
                tokio::time::sleep(delay).await;
            }
            ([(header::CONTENT_TYPE, "image/png")], png_bytes(6, 6)).into_response()
        }
    }
}
