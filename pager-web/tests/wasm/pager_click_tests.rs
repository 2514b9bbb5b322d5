use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pager_web::components::pager::{Pager, PagerProps};
use pager_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::{Callback, Classes};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

async fn mount(
    current: u32,
    total: u32,
    visible_pages: u32,
) -> (Element, Rc<RefCell<Vec<u32>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let doc = dom::document();
    let root = doc.create_element("div").unwrap();
    doc.body().unwrap().append_child(&root).unwrap();
    let props = PagerProps {
        current,
        total,
        visible_pages,
        on_page_changed: Some(Callback::from(move |page: u32| sink.borrow_mut().push(page))),
        on_page_size_changed: None,
        class: Classes::new(),
    };
    yew::Renderer::<Pager>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(Duration::ZERO).await;
    (root, calls)
}

fn click(root: &Element, selector: &str) {
    let anchor = root
        .query_selector(selector)
        .unwrap()
        .expect("pager item present")
        .dyn_into::<HtmlElement>()
        .unwrap();
    anchor.click();
}

#[wasm_bindgen_test]
async fn first_page_click_on_page_one_is_ignored() {
    let (root, calls) = mount(1, 20, 5).await;
    click(&root, "li.btn-first-page a");
    assert!(calls.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn numbered_click_emits_page_once() {
    let (root, calls) = mount(8, 20, 5).await;
    click(&root, "li.btn-numbered-page:nth-child(4) a");
    assert_eq!(*calls.borrow(), vec![9]);
}

#[wasm_bindgen_test]
async fn block_jumps_emit_clamped_targets() {
    let (root, calls) = mount(8, 20, 5).await;
    let anchors = root.query_selector_all("li a").unwrap();
    let prev = anchors.item(1).unwrap().dyn_into::<HtmlElement>().unwrap();
    let next = anchors
        .item(anchors.length() - 1)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    prev.click();
    next.click();
    assert_eq!(*calls.borrow(), vec![3, 13]);
}
