use web_sys::{Document, Element, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Element the demo mounts into: `#app` when the page has one, `<body>` otherwise.
#[must_use]
pub fn mount_point() -> Option<Element> {
    let doc = document();
    doc.get_element_by_id("app")
        .or_else(|| doc.body().map(Element::from))
}
