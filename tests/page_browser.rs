#![cfg(target_arch = "wasm32")]

use folio_core::menu::{CLASS_ACTIVE, CLASS_MENU_OPEN, CLASS_MOBILE_MENU};
use folio_core::navbar::{SHADOW_ELEVATED_DARK, SHADOW_ELEVATED_LIGHT};
use folio_core::parallax::{water_gradient, TRANSLATE_REST};
use folio_core::{FilterTag, RevealPhase, Theme};
use folio_web::backdrop::BackdropParallax;
use folio_web::filter::FilterController;
use folio_web::menu::MenuController;
use folio_web::reveal::ScrollReveal;
use folio_web::theme_store::{current_theme, get_theme, restore_theme, set_theme, LocalStore, ThemeToggle};
use gloo::timers::future::TimeoutFuture;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlElement, MouseEvent, MouseEventInit, Touch, TouchEvent, TouchEventInit,
    TouchInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const MENU_FIXTURE: &str = r##"
<nav class="navbar">
  <button class="menu-toggle">menu</button>
  <ul class="nav-links">
    <li><a href="#about">About</a></li>
    <li><a href="/blog">Blog</a></li>
  </ul>
</nav>
<p id="outside">elsewhere</p>
<button class="filter-btn" data-filter="all">All</button>
<section id="about">about</section>
"##;

const FILTER_FIXTURE: &str = r#"
<button class="filter-btn active" data-filter="all">All</button>
<button class="filter-btn" data-filter="web">Web</button>
<button class="filter-btn" data-filter="ml">ML</button>
<div class="project-card" data-category="web">a</div>
<div class="project-card" data-category="ml">b</div>
<div class="project-card" data-category="web">c</div>
"#;

const HERO_FIXTURE: &str = r#"
<section class="hero" style="position: relative; width: 200px; height: 200px;">
  <div class="hero-background-illustrations">
    <div class="illustration-shape shape-1"></div>
    <div class="illustration-chart chart-2"></div>
  </div>
</section>
"#;

const WATER_FIXTURE: &str = r#"
<section class="hero" style="position: relative; width: 200px; height: 200px;">
  <div id="heroWaterBackground"></div>
  <div class="hero-background-illustrations">
    <div class="illustration-shape shape-1"></div>
  </div>
</section>
"#;

const REVEAL_FIXTURE: &str = r#"
<h2 class="section-title">Projects</h2>
<p class="section-subtitle">Recent work</p>
<p class="section-subtitle hidden">Archived</p>
"#;

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document")
}

fn fixture(markup: &str) -> Document {
    let document = document();
    document.body().expect("body").set_inner_html(markup);
    document
}

fn element(document: &Document, selector: &str) -> Element {
    document
        .query_selector(selector)
        .expect("selector parses")
        .unwrap_or_else(|| panic!("fixture has {selector}"))
}

fn click(document: &Document, selector: &str) {
    element(document, selector)
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

fn mouse(document: &Document, selector: &str, kind: &str, x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event");
    element(document, selector)
        .dispatch_event(&event)
        .expect("dispatch");
}

fn set_js(target: &Object, key: &str, value: &JsValue) {
    Reflect::set(target, &JsValue::from_str(key), value).expect("reflect set");
}

/// `None` where the browser has no touch constructors.
fn touch(document: &Document, selector: &str, kind: &str, x: f64, y: f64) -> Option<()> {
    let target = element(document, selector);
    let init = Object::new();
    set_js(&init, "identifier", &JsValue::from_f64(1.0));
    set_js(&init, "target", &target);
    set_js(&init, "clientX", &JsValue::from_f64(x));
    set_js(&init, "clientY", &JsValue::from_f64(y));
    let point = Touch::new(init.unchecked_ref::<TouchInit>()).ok()?;
    let event_init = Object::new();
    set_js(&event_init, "bubbles", &JsValue::TRUE);
    set_js(&event_init, "touches", &Array::of1(&point));
    let event =
        TouchEvent::new_with_event_init_dict(kind, event_init.unchecked_ref::<TouchEventInit>())
            .ok()?;
    target.dispatch_event(&event).ok()?;
    Some(())
}

/// `value` as the browser serializes it back from an inline style.
fn serialized(document: &Document, property: &str, value: &str) -> String {
    let sample = document
        .create_element("div")
        .expect("div")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    sample.style().set_property(property, value).expect("set style");
    sample.style().get_property_value(property).expect("read style")
}

fn inline_style(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .expect("html element")
        .style()
        .get_property_value(property)
        .expect("read style")
}

#[wasm_bindgen_test]
fn menu_toggle_opens_then_closes() {
    let document = fixture(MENU_FIXTURE);
    let menu = MenuController::mount(&document).expect("menu mounts");
    let list = element(&document, ".nav-links");
    let body = document.body().expect("body");

    click(&document, ".menu-toggle");
    assert!(menu.is_open());
    assert!(has_class(&list, CLASS_ACTIVE));
    assert!(has_class(&list, CLASS_MOBILE_MENU));
    assert!(has_class(&body, CLASS_MENU_OPEN));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    click(&document, ".menu-toggle");
    assert!(!menu.is_open());
    assert!(!has_class(&list, CLASS_ACTIVE));
    assert!(!has_class(&body, CLASS_MENU_OPEN));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
    menu.detach();
}

#[wasm_bindgen_test(async)]
async fn anchor_link_closes_menu_after_scrolling() {
    let document = fixture(MENU_FIXTURE);
    let menu = MenuController::mount(&document).expect("menu mounts");
    menu.toggle();

    click(&document, ".nav-links a[href='#about']");
    assert!(menu.is_open(), "menu stays open while the scroll starts");
    TimeoutFuture::new(400).await;
    assert!(!menu.is_open());
    assert!(!has_class(&element(&document, ".nav-links"), CLASS_MOBILE_MENU));
    menu.detach();
}

#[wasm_bindgen_test]
fn outside_click_closes_but_filter_click_does_not() {
    let document = fixture(MENU_FIXTURE);
    let menu = MenuController::mount(&document).expect("menu mounts");

    menu.toggle();
    click(&document, ".filter-btn");
    assert!(menu.is_open());

    click(&document, "#outside");
    assert!(!menu.is_open());
    menu.detach();
}

#[wasm_bindgen_test]
fn filter_click_marks_one_button_and_hides_other_categories() {
    let document = fixture(FILTER_FIXTURE);
    let filter = FilterController::mount(&document).expect("filter mounts");

    click(&document, ".filter-btn[data-filter='web']");
    assert_eq!(filter.active_tag(), Some(FilterTag::parse("web")));
    let buttons = document.query_selector_all(".filter-btn").unwrap();
    let active = (0..buttons.length())
        .filter_map(|index| buttons.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter(|button| has_class(button, CLASS_ACTIVE))
        .count();
    assert_eq!(active, 1);

    let cards = document.query_selector_all(".project-card").unwrap();
    let hidden: Vec<bool> = (0..cards.length())
        .filter_map(|index| cards.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|card| has_class(&card, "hidden"))
        .collect();
    assert_eq!(hidden, vec![false, true, false]);

    filter.apply_filter(&FilterTag::All);
    let still_hidden = document.query_selector_all(".project-card.hidden").unwrap();
    assert_eq!(still_hidden.length(), 0);
    filter.detach();
}

#[wasm_bindgen_test]
fn theme_survives_a_reload() {
    let document = fixture("");
    let mut store = LocalStore::open();

    set_theme(&document, &mut store, Theme::Dark);
    assert_eq!(current_theme(&document), Theme::Dark);
    assert_eq!(get_theme(), Theme::Dark);

    document
        .document_element()
        .unwrap()
        .remove_attribute("data-theme")
        .unwrap();
    assert_eq!(restore_theme(&document), Ok(Theme::Dark));
    assert_eq!(current_theme(&document), Theme::Dark);

    set_theme(&document, &mut store, Theme::Light);
}

#[wasm_bindgen_test]
fn theme_toggle_flips_and_persists() {
    let document = fixture(r#"<nav class="navbar"></nav><button id="themeToggle">theme</button>"#);
    let mut store = LocalStore::open();
    set_theme(&document, &mut store, Theme::Light);
    let _toggle = ThemeToggle::mount(&document).expect("toggle mounts");

    click(&document, "#themeToggle");
    assert_eq!(current_theme(&document), Theme::Dark);
    assert_eq!(get_theme(), Theme::Dark);

    click(&document, "#themeToggle");
    assert_eq!(current_theme(&document), Theme::Light);
    assert_eq!(get_theme(), Theme::Light);
}

#[wasm_bindgen_test(async)]
async fn backdrop_settles_at_rest_after_pointer_leaves() {
    let document = fixture(HERO_FIXTURE);
    let backdrop = BackdropParallax::mount(&document).expect("backdrop mounts");
    let hero = element(&document, ".hero").get_bounding_client_rect();
    let x = (hero.left() + hero.width()) as i32 - 1;
    let y = (hero.top() + hero.height()) as i32 - 1;

    mouse(&document, ".hero", "mousemove", x, y);
    assert!(backdrop.is_running());
    TimeoutFuture::new(100).await;
    mouse(&document, ".hero", "mouseleave", x, y);

    for _ in 0..200 {
        if !backdrop.is_running() {
            break;
        }
        TimeoutFuture::new(25).await;
    }
    assert!(!backdrop.is_running());
    assert_eq!(backdrop.offset(), (0.0, 0.0));
    let layer = element(&document, ".illustration-shape")
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(layer.style().get_property_value("transform").unwrap(), TRANSLATE_REST);
    backdrop.stop();
}

#[wasm_bindgen_test]
fn theme_toggle_reapplies_navbar_shadow_for_new_theme() {
    let document = fixture(
        r#"<nav class="navbar"></nav><button id="themeToggle">theme</button>
        <div style="height: 3000px;"></div>"#,
    );
    let window = web_sys::window().expect("window");
    let mut store = LocalStore::open();
    set_theme(&document, &mut store, Theme::Light);
    window.scroll_to_with_x_and_y(0.0, 200.0);
    assert!(window.page_y_offset().unwrap() > 50.0);
    let _toggle = ThemeToggle::mount(&document).expect("toggle mounts");
    let navbar = element(&document, ".navbar");

    click(&document, "#themeToggle");
    assert_eq!(
        inline_style(&navbar, "box-shadow"),
        serialized(&document, "box-shadow", SHADOW_ELEVATED_DARK)
    );

    click(&document, "#themeToggle");
    assert_eq!(
        inline_style(&navbar, "box-shadow"),
        serialized(&document, "box-shadow", SHADOW_ELEVATED_LIGHT)
    );
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn touch_move_aims_with_the_smaller_scale() {
    let document = fixture(HERO_FIXTURE);
    let backdrop = BackdropParallax::mount(&document).expect("backdrop mounts");
    let hero = element(&document, ".hero").get_bounding_client_rect();
    let x = hero.left() + hero.width() - 1.0;
    let y = hero.top() + hero.height() - 1.0;

    if touch(&document, ".hero", "touchmove", x, y).is_none() {
        backdrop.stop();
        return;
    }
    let (target_x, target_y) = backdrop.target();
    assert!(target_x > 19.0 && target_x <= 20.0, "target x {target_x}");
    assert!(target_y > 19.0 && target_y <= 20.0, "target y {target_y}");
    assert!(backdrop.is_running());

    touch(&document, ".hero", "touchend", x, y);
    assert_eq!(backdrop.target(), (0.0, 0.0));
    backdrop.stop();
}

#[wasm_bindgen_test(async)]
async fn theme_change_recenters_water_gradient() {
    let document = fixture(WATER_FIXTURE);
    let mut store = LocalStore::open();
    set_theme(&document, &mut store, Theme::Light);
    let backdrop = BackdropParallax::mount(&document).expect("backdrop mounts");
    assert_eq!(backdrop.painted_gradient(), None);

    set_theme(&document, &mut store, Theme::Dark);
    TimeoutFuture::new(50).await;
    let expected = water_gradient(50.0, 50.0, Theme::Dark);
    assert_eq!(backdrop.painted_gradient().as_deref(), Some(expected.as_str()));

    set_theme(&document, &mut store, Theme::Light);
    TimeoutFuture::new(50).await;
    let expected = water_gradient(50.0, 50.0, Theme::Light);
    assert_eq!(backdrop.painted_gradient().as_deref(), Some(expected.as_str()));
    backdrop.stop();
}

#[wasm_bindgen_test(async)]
async fn reveal_shows_headings_but_holds_ones_hidden_before_confirming() {
    let document = fixture(REVEAL_FIXTURE);
    let reveal = ScrollReveal::mount(&document).expect("reveal mounts");
    let subtitles = document.query_selector_all(".section-subtitle").unwrap();
    let recent = subtitles
        .item(0)
        .and_then(|node| node.dyn_into::<Element>().ok())
        .expect("recent subtitle");

    for _ in 0..200 {
        if reveal.phases()[1] == RevealPhase::Armed {
            break;
        }
        TimeoutFuture::new(5).await;
    }
    assert_eq!(reveal.phases()[1], RevealPhase::Armed);
    recent.class_list().add_1("hidden").unwrap();

    TimeoutFuture::new(300).await;
    assert_eq!(
        reveal.phases(),
        vec![RevealPhase::Shown, RevealPhase::Held, RevealPhase::Waiting]
    );
    assert_eq!(inline_style(&element(&document, ".section-title"), "opacity"), "1");
    assert_eq!(inline_style(&recent, "opacity"), "0");
}

#[wasm_bindgen_test]
fn start_mounts_right_away_on_a_parsed_document() {
    let document = fixture(MENU_FIXTURE);
    assert_ne!(document.ready_state(), "loading");
    folio_web::start();
    folio_web::start();
    let list = element(&document, ".nav-links");

    click(&document, ".menu-toggle");
    assert!(has_class(&list, CLASS_ACTIVE));
    click(&document, ".menu-toggle");
    assert!(!has_class(&list, CLASS_ACTIVE));
}
