use crate::theme::{dominant_color, ButtonTheme};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, CanvasRenderingContext2d, HtmlCanvasElement, ImageBitmap, Response};

const SAMPLE_SIZE: u32 = 64;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ImageError {
    #[display("browser window is unavailable")]
    NoWindow,
    #[display("request failed: {_0}")]
    Request(#[error(not(source))] String),
    #[display("server answered with status {_0}")]
    Status(#[error(not(source))] u16),
    #[display("canvas failed: {_0}")]
    Canvas(#[error(not(source))] String),
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn request_error(value: JsValue) -> ImageError {
    ImageError::Request(describe(value))
}

fn canvas_error(value: JsValue) -> ImageError {
    ImageError::Canvas(describe(value))
}

async fn resolve_promise<T: JsCast>(promise: js_sys::Promise) -> Result<T, JsValue> {
    wasm_bindgen_futures::JsFuture::from(promise)
        .await?
        .dyn_into::<T>()
}

pub async fn fetch_bitmap(src: &str) -> Result<ImageBitmap, ImageError> {
    let window = web_sys::window().ok_or(ImageError::NoWindow)?;
    let response: Response = resolve_promise(window.fetch_with_str(src))
        .await
        .map_err(request_error)?;
    if !response.ok() {
        return Err(ImageError::Status(response.status()));
    }

    let blob: Blob = resolve_promise(response.blob().map_err(request_error)?)
        .await
        .map_err(request_error)?;
    let bitmap = window
        .create_image_bitmap_with_blob(&blob)
        .map_err(request_error)?;
    resolve_promise(bitmap).await.map_err(request_error)
}

/// RGBA pixels of `bitmap` scaled down to a small square.
pub fn sample_pixels(bitmap: &ImageBitmap) -> Result<Vec<u8>, ImageError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(ImageError::NoWindow)?;
    let canvas = document
        .create_element("canvas")
        .map_err(canvas_error)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|element| canvas_error(element.into()))?;
    canvas.set_width(SAMPLE_SIZE);
    canvas.set_height(SAMPLE_SIZE);

    let context = canvas
        .get_context("2d")
        .map_err(canvas_error)?
        .ok_or_else(|| ImageError::Canvas("2d context is unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|object| canvas_error(object.into()))?;

    let size = f64::from(SAMPLE_SIZE);
    context
        .draw_image_with_image_bitmap_and_dw_and_dh(bitmap, 0., 0., size, size)
        .map_err(canvas_error)?;
    let data = context
        .get_image_data(0., 0., size, size)
        .map_err(canvas_error)?;
    Ok(data.data().0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    pub src: Option<String>,
    pub theme: ButtonTheme,
}

impl LoadedImage {
    pub fn pending(src: &str) -> Self {
        LoadedImage {
            src: Some(src.to_string()),
            theme: ButtonTheme::default(),
        }
    }
}

fn theme_for(src: &str, bitmap: &ImageBitmap) -> ButtonTheme {
    match sample_pixels(bitmap) {
        Ok(pixels) => match dominant_color(&pixels) {
            Some(color) => ButtonTheme::from_color(color),
            None => {
                log::warn!("no dominant color in {}", src);
                ButtonTheme::default()
            }
        },
        Err(err) => {
            log::warn!("could not sample {}: {}", src, err);
            ButtonTheme::default()
        }
    }
}

/// Loads `requested`, falling back to `fallback` once if it cannot be fetched.
pub async fn load_puzzle_image(requested: &str, fallback: &str) -> LoadedImage {
    let mut candidates = vec![requested];
    if requested != fallback {
        candidates.push(fallback);
    }

    for src in candidates {
        match fetch_bitmap(src).await {
            Ok(bitmap) => {
                log::debug!("loaded {}", src);
                return LoadedImage {
                    src: Some(src.to_string()),
                    theme: theme_for(src, &bitmap),
                };
            }
            Err(err) => log::error!("could not load {}: {}", src, err),
        }
    }

    LoadedImage {
        src: None,
        theme: ButtonTheme::default(),
    }
}
