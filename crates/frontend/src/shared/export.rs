/// File downloads through the browser: backend-rendered PDFs and CSV dumps
/// of the visible list.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be dumped to a CSV file.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;
    fn to_csv_row(&self) -> Vec<String>;
}

/// Download backend-provided bytes (a rendered PDF) as a file.
pub fn descargar_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    descargar_blob(&blob, filename)
}

/// Dump a list to CSV and start the download.
pub fn exportar_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No hay datos para exportar".to_string());
    }

    let mut contenido = String::new();
    // UTF-8 BOM para que Excel respete los acentos
    contenido.push('\u{FEFF}');
    contenido.push_str(&T::headers().join(";"));
    contenido.push('\n');

    for item in data {
        let fila: Vec<String> = item.to_csv_row().iter().map(|c| escapar_celda(c)).collect();
        contenido.push_str(&fila.join(";"));
        contenido.push('\n');
    }

    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(&contenido));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    descargar_blob(&blob, filename)
}

fn escapar_celda(celda: &str) -> String {
    if celda.contains(';') || celda.contains('"') || celda.contains('\n') || celda.contains('\r') {
        format!("\"{}\"", celda.replace('"', "\"\""))
    } else {
        celda.to_string()
    }
}

fn descargar_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

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

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
