#![cfg(not(target_arch = "wasm32"))]

#[test]
fn start_is_inert_outside_the_browser() {
    folio_web::start();
}
