use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

pub const PIXEL: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";
pub const NOT_AN_IMAGE: &str = "data:image/png;base64,bm90IGFuIGltYWdl";

pub async fn settle(ms: u32) {
    TimeoutFuture::new(ms).await;
}

pub fn document() -> Document {
    window().and_then(|w| w.document()).expect("document")
}

/// Absolutely positioned 100px box appended to `<body>`; `position` adds to
/// or overrides its style, e.g. `"top: 10000px"` to start off screen.
pub fn mount_host(position: &str) -> HtmlElement {
    let document = document();
    let host: HtmlElement = document
        .create_element("div")
        .expect("create div")
        .dyn_into()
        .expect("div is an HtmlElement");
    host.set_attribute(
        "style",
        &format!("position: absolute; left: 0; width: 100px; height: 100px; {position}"),
    )
    .expect("set style");
    document
        .body()
        .expect("document body")
        .append_child(&host)
        .expect("append host");
    host
}

pub fn text_of(root: &web_sys::Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.text_content())
}
