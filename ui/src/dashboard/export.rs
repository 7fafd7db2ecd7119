use dioxus::prelude::*;

use crate::core::export::{
    ExportError, ExportSnapshot, ReportDocument, CSV_LATENCY_MS, REPORT_LATENCY_MS,
};
#[cfg(target_arch = "wasm32")]
use crate::core::export::PAGE_WIDTH;
use crate::core::{platform, timing};
use crate::dashboard::use_derived_view;
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportKind {
    Csv,
    Report,
    Json,
}

/// Header dropdown offering CSV, paginated report, and JSON clipboard exports
/// of whatever the dashboard currently shows.
#[component]
pub fn ExportMenu() -> Element {
    let view = use_derived_view();
    let mut open = use_signal(|| false);
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("export-menu__status".to_string(), format!("{label}…"))),
        ExportStatus::Done(message) => Some((
            "export-menu__status export-menu__status--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "export-menu__status export-menu__status--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let start = move |kind: ExportKind| {
        let mut status_signal = status;
        let mut busy_signal = busy;
        if busy_signal() {
            return;
        }
        let snapshot = ExportSnapshot::from_view(&view.read());
        // Validation runs before any simulated latency so an empty section
        // fails immediately.
        if let Err(err) = snapshot.validate() {
            tracing::warn!(kind = ?kind, period = %snapshot.period, "export rejected: {err}");
            status_signal.set(ExportStatus::Error(err.to_string()));
            return;
        }

        busy_signal.set(true);
        status_signal.set(ExportStatus::Working(working_label(kind)));
        platform::spawn_future(async move {
            let outcome = match kind {
                ExportKind::Csv => perform_csv_export(snapshot).await,
                ExportKind::Report => perform_report_export(snapshot).await,
                ExportKind::Json => perform_json_export(snapshot).await,
            };
            match outcome {
                Ok(message) => {
                    tracing::info!(kind = ?kind, "{message}");
                    status_signal.set(ExportStatus::Done(message));
                }
                Err(err) => {
                    tracing::error!(kind = ?kind, "export failed: {err}");
                    status_signal.set(ExportStatus::Error(err.to_string()));
                }
            }
            busy_signal.set(false);
        });
    };

    rsx! {
        div { class: "export-menu",
            button {
                r#type: "button",
                class: "button button--primary",
                aria_expanded: "{open}",
                onclick: move |_| open.toggle(),
                {t!("export-menu-label")}
            }

            if open() {
                div { class: "export-menu__panel",
                    button {
                        r#type: "button",
                        class: "export-menu__item",
                        disabled: busy(),
                        onclick: move |_| start(ExportKind::Csv),
                        {t!("export-csv")}
                    }
                    button {
                        r#type: "button",
                        class: "export-menu__item",
                        disabled: busy(),
                        onclick: move |_| start(ExportKind::Report),
                        {t!("export-report")}
                    }
                    button {
                        r#type: "button",
                        class: "export-menu__item",
                        disabled: busy(),
                        onclick: move |_| start(ExportKind::Json),
                        {t!("export-json")}
                    }
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", role: "status", "{message}" }
            }
        }
    }
}

fn working_label(kind: ExportKind) -> String {
    match kind {
        ExportKind::Csv => t!("export-working-csv"),
        ExportKind::Report => t!("export-working-report"),
        ExportKind::Json => t!("export-working-json"),
    }
}

async fn perform_csv_export(snapshot: ExportSnapshot) -> Result<String, ExportError> {
    let csv = snapshot.to_csv()?;
    timing::sleep_ms(CSV_LATENCY_MS).await;
    let saved = download_bytes(&snapshot.csv_filename(), "text/csv", csv.into_bytes()).await?;
    Ok(match saved {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    })
}

async fn perform_report_export(snapshot: ExportSnapshot) -> Result<String, ExportError> {
    let document = ReportDocument::from_snapshot(&snapshot)?;
    timing::sleep_ms(REPORT_LATENCY_MS).await;
    let total = document.page_count();

    // Browsers throttle bursts of downloads, so web gets one stacked image.
    #[cfg(target_arch = "wasm32")]
    {
        let png = rasterize_web(&document).await?;
        download_bytes(&snapshot.report_bundle_filename(), "image/png", png).await?;
        Ok(format!("{total}-page report download started"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let mut last_path = String::new();
        for page in &document.pages {
            let png = rasterize_native(&page.to_svg(total), &options)?;
            let filename = snapshot.report_filename(page.number);
            if let Some(path) = download_bytes(&filename, "image/png", png).await? {
                last_path = path;
            }
        }
        Ok(format!("{total}-page report saved next to {last_path}"))
    }
}

async fn perform_json_export(snapshot: ExportSnapshot) -> Result<String, ExportError> {
    let json = snapshot.to_json()?;
    copy_to_clipboard(json).await?;
    Ok("JSON snapshot copied to clipboard".to_string())
}

async fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or_else(|| delivery("window unavailable"))?;
        let document = window.document().ok_or_else(|| delivery("document unavailable"))?;
        let body = document.body().ok_or_else(|| delivery("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| delivery("Unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| delivery("Textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(delivery("Clipboard copy blocked"))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| delivery(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| delivery(err.to_string()))
    }
}

/// Hands bytes to the user. Web starts a browser download (`Ok(None)`);
/// native writes into the app's export directory and returns the path.
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| delivery("Failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| delivery("Unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| delivery("Document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| delivery("Unable to create anchor"))?
            .dyn_into()
            .map_err(|_| delivery("Anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| delivery("Missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| delivery(err.to_string()))?;
        let path = dir.join(filename);
        fs::write(&path, &bytes).map_err(|err| delivery(err.to_string()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "export written");
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "ADmyBRAND", "Insights")
        .ok_or_else(|| delivery("Unable to determine export directory"))?;
    Ok(dirs.data_dir().join("exports"))
}

fn delivery(message: impl Into<String>) -> ExportError {
    ExportError::Delivery(message.into())
}

#[cfg(not(target_arch = "wasm32"))]
fn rasterize_native(svg: &str, options: &usvg::Options) -> Result<Vec<u8>, ExportError> {
    let tree = usvg::Tree::from_str(svg, options).map_err(|err| delivery(err.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| delivery("Unable to allocate page bitmap"))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap.encode_png().map_err(|err| delivery(err.to_string()))
}

/// Draws every page onto one tall canvas and returns it as PNG bytes.
#[cfg(target_arch = "wasm32")]
async fn rasterize_web(report: &ReportDocument) -> Result<Vec<u8>, ExportError> {
    use base64::Engine;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    let dom = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| delivery("Document unavailable"))?;

    let canvas: HtmlCanvasElement = dom
        .create_element("canvas")
        .map_err(|_| delivery("Unable to create canvas"))?
        .dyn_into()
        .map_err(|_| delivery("Canvas cast failed"))?;
    canvas.set_width(PAGE_WIDTH);
    canvas.set_height(report.stacked_height());

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| delivery("Canvas context unavailable"))?
        .ok_or_else(|| delivery("Canvas context missing"))?
        .dyn_into()
        .map_err(|_| delivery("Context cast failed"))?;

    let total = report.page_count();
    for page in &report.pages {
        draw_svg_page(&context, &page.to_svg(total), f64::from(page.stacked_offset())).await?;
    }

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| delivery("Unable to serialise canvas"))?;
    let encoded = data_url
        .split(',')
        .nth(1)
        .ok_or_else(|| delivery("Malformed data URL"))?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| delivery("PNG decode failed"))
}

#[cfg(target_arch = "wasm32")]
async fn draw_svg_page(
    context: &web_sys::CanvasRenderingContext2d,
    svg_markup: &str,
    top: f64,
) -> Result<(), ExportError> {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, BlobPropertyBag, HtmlImageElement, Url};

    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(svg_markup));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| delivery("Unable to build SVG blob"))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| delivery("Unable to create SVG URL"))?;

    let image = HtmlImageElement::new().map_err(|_| delivery("Unable to create image"))?;
    image.set_src(&url);
    let decoded = JsFuture::from(image.decode()).await;
    let drawn = decoded
        .map_err(|_| delivery("Image decode failed"))
        .and_then(|_| {
            context
                .draw_image_with_html_image_element(&image, 0.0, top)
                .map_err(|_| delivery("Unable to draw image"))
        });
    Url::revoke_object_url(&url).ok();
    drawn
}
