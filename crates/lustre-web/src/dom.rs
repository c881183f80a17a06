use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Attach a click handler to the first element matching `selector`. Missing
/// elements are skipped silently; not every page variant carries every button.
pub fn add_click_listener(
    document: &web::Document,
    selector: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn add_class(document: &web::Document, selector: &str, class: &str) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let _ = el.class_list().add_1(class);
    }
}

pub fn remove_class(document: &web::Document, selector: &str, class: &str) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let _ = el.class_list().remove_1(class);
    }
}

pub fn set_style(document: &web::Document, selector: &str, style: &str) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let _ = el.set_attribute("style", style);
    }
}

/// Move the `active` marker inside a swatch list.
pub fn set_active_in_list(document: &web::Document, list_selector: &str, item_selector: &str) {
    if let Ok(Some(current)) = document.query_selector(&format!("{} li.active", list_selector)) {
        let _ = current.class_list().remove_1("active");
    }
    if let Ok(Some(item)) = document.query_selector(item_selector) {
        let _ = item.class_list().add_1("active");
    }
}

// ---------------- Loading bar ----------------

pub fn set_loader_progress(document: &web::Document, scale: f32) {
    set_style(
        document,
        ".progress",
        &format!("transform: scaleX({})", scale),
    );
}

/// Slide the loader panel in (shown) or away (hidden); CSS animates the move.
pub fn set_loader_hidden(document: &web::Document, hidden: bool) {
    if hidden {
        add_class(document, ".loader", "loader--done");
    } else {
        remove_class(document, ".loader", "loader--done");
    }
}

/// Explicit failure state: the bar fills and turns into the retry prompt
/// instead of freezing mid-way.
pub fn set_loader_failed(document: &web::Document) {
    set_loader_progress(document, 1.0);
    add_class(document, ".loader", "loader--failed");
    remove_class(document, ".loader", "loader--done");
}

// ---------------- Scrolling ----------------

pub fn page_scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Smooth-scroll the page to an element's top.
pub fn scroll_to_section(window: &web::Window, document: &web::Document, selector: &str) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        let top = el.get_bounding_client_rect().top() + page_scroll_y(window) as f64;
        let options = web::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn set_body_scroll_locked(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        let style = if locked {
            "overflow-y: hidden"
        } else {
            "overflow-y: scroll"
        };
        let _ = body.set_attribute("style", style);
    }
}
