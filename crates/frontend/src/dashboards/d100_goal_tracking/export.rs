//! PDF export of the rendered dashboard.
//!
//! Rasterization and document assembly are done by the `html2canvas` and
//! `jspdf` scripts loaded by the host page; this module only drives them.
//! Nothing here reads or writes the metric state.

use contracts::dashboards::d100_goal_tracking::{fit_to_page, ExportSettings, Placement};
use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlCanvasElement, Window};

/// Options handed to `html2canvas`, minus the `ignoreElements` callback.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CanvasOptions<'a> {
    scale: f64,
    background_color: &'a str,
    logging: bool,
    #[serde(rename = "useCORS")]
    use_cors: bool,
}

/// Options handed to the `jsPDF` constructor.
#[derive(Serialize)]
struct DocumentOptions {
    orientation: &'static str,
    unit: &'static str,
    format: [f64; 2],
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| format!("Failed to serialize options: {}", e))
}

/// Получает свойство `target`, ошибка если его нет
fn get(target: &JsValue, name: &str) -> Result<JsValue, String> {
    let value = Reflect::get(target, &JsValue::from_str(name)).map_err(js_err)?;
    if value.is_undefined() || value.is_null() {
        return Err(format!("{} is not available", name));
    }
    Ok(value)
}

fn get_function(target: &JsValue, name: &str) -> Result<Function, String> {
    get(target, name)?
        .dyn_into::<Function>()
        .map_err(|_| format!("{} is not a function", name))
}

/// Вызывает `target.name(args...)`
fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, String> {
    get_function(target, name)?
        .apply(target, args)
        .map_err(js_err)
}

/// Renders the element to a canvas, skipping elements with the excluded class.
async fn rasterize(
    window: &Window,
    element: &Element,
    settings: &ExportSettings,
) -> Result<HtmlCanvasElement, String> {
    let html2canvas = get_function(window, "html2canvas")?;

    let options: Object = to_js(&CanvasOptions {
        scale: settings.scale,
        background_color: &settings.background_color,
        logging: false,
        use_cors: true,
    })?
    .dyn_into()
    .map_err(|_| "Canvas options are not an object".to_string())?;

    let exclude_class = settings.exclude_class.clone();
    let ignore_elements = Closure::wrap(Box::new(move |el: Element| {
        el.class_list().contains(&exclude_class)
    }) as Box<dyn Fn(Element) -> bool>);
    Reflect::set(
        &options,
        &JsValue::from_str("ignoreElements"),
        ignore_elements.as_ref().unchecked_ref(),
    )
    .map_err(js_err)?;

    let promise: Promise = html2canvas
        .call2(window, element, &options)
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "html2canvas did not return a promise".to_string())?;
    let canvas = JsFuture::from(promise).await.map_err(js_err)?;

    // ignore_elements must outlive the promise
    drop(ignore_elements);

    canvas
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| "html2canvas did not return a canvas".to_string())
}

/// Builds the document with the image placed on a single page and saves it.
fn save_document(
    window: &Window,
    image_data_url: &str,
    placement: Placement,
    settings: &ExportSettings,
) -> Result<(), String> {
    let namespace = get(window, "jspdf")?;
    let constructor = get_function(&namespace, "jsPDF")?;

    let page = settings.page;
    let options = to_js(&DocumentOptions {
        orientation: if page.is_landscape() { "landscape" } else { "portrait" },
        unit: "mm",
        format: [page.width_mm, page.height_mm],
    })?;
    let document = Reflect::construct(&constructor, &Array::of1(&options)).map_err(js_err)?;

    let args = Array::new();
    args.push(&JsValue::from_str(image_data_url));
    args.push(&JsValue::from_str("PNG"));
    for n in [placement.x, placement.y, placement.width, placement.height] {
        args.push(&JsValue::from_f64(n));
    }
    call_method(&document, "addImage", &args)?;
    call_method(
        &document,
        "save",
        &Array::of1(&JsValue::from_str(&settings.filename)),
    )?;
    Ok(())
}

/// Rasterizes the dashboard root and saves it as a one-page PDF.
pub async fn export_dashboard_pdf(settings: &ExportSettings) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let element = document
        .get_element_by_id(&settings.root_element_id)
        .ok_or_else(|| format!("Element #{} not found", settings.root_element_id))?;

    let canvas = rasterize(&window, &element, settings).await?;
    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(js_err)?;

    let placement = fit_to_page(
        f64::from(canvas.width()),
        f64::from(canvas.height()),
        settings.page,
    );
    log::debug!(
        "PDF placement: {:.1}x{:.1} mm at ({:.1}, {:.1})",
        placement.width,
        placement.height,
        placement.x,
        placement.y
    );

    save_document(&window, &data_url, placement, settings)
}

/// Shows a blocking browser alert. Used for terminal export failures.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
