//! browser checks for the header, run with `wasm-pack test --headless --firefox web`

#![cfg(target_arch = "wasm32")]

use arno_shared::header::{BRAND_NAME, CTA_LABEL};
use arno_web::App;
use leptos::mount::mount_to;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn select(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
}

#[wasm_bindgen_test]
fn header_has_two_regions() {
    let container = fresh_container();
    let _app = mount_to(container.clone(), App);

    let regions = container
        .query_selector_all("header > .content-desktop > div")
        .unwrap();
    assert_eq!(regions.length(), 2);

    let title = select(&container, ".brand .arno-text");
    assert_eq!(title.text_content().unwrap(), BRAND_NAME);

    let link = select(&container, ".actions a");
    assert_eq!(link.get_attribute("href").as_deref(), Some("/register"));

    let button = select(&link, "button.arno-button");
    assert_eq!(button.text_content().unwrap(), CTA_LABEL);
}

#[wasm_bindgen_test]
fn header_renders_identically_every_time() {
    let first = fresh_container();
    let second = fresh_container();
    let _a = mount_to(first.clone(), App);
    let _b = mount_to(second.clone(), App);

    for container in [&first, &second] {
        assert_eq!(container.query_selector_all(".arno-text").unwrap().length(), 1);
        assert_eq!(
            container.query_selector_all("a[href=\"/register\"]").unwrap().length(),
            1
        );
    }

    assert_eq!(
        select(&first, "header").outer_html(),
        select(&second, "header").outer_html()
    );
}

#[wasm_bindgen_test]
fn title_carries_gradient_style() {
    let container = fresh_container();
    let _app = mount_to(container.clone(), App);

    let style = select(&container, ".arno-text").get_attribute("style").unwrap();
    assert!(style.contains("font-size: 32px"));
    assert!(style.contains("font-weight: 600"));
    assert!(style.contains("#4c6ef5"));
    assert!(style.contains("#15aabf"));

    let button_style = select(&container, ".arno-button").get_attribute("style").unwrap();
    assert!(button_style.contains("linear-gradient(45deg, #4c6ef5 0%, #15aabf 100%)"));
}
