use web_sys::UrlSearchParams;

use folio_core::PageConfig;

pub const MOTION_PARAM: &str = "motion";
pub const DEBUG_PARAM: &str = "debug";

/// Reads `?motion=` and `?debug` from the current location.
pub fn load_page_config() -> PageConfig {
    let Some(window) = web_sys::window() else {
        return PageConfig::default();
    };
    let search = window.location().search().unwrap_or_default();
    page_config_from_search(&search)
}

pub fn page_config_from_search(search: &str) -> PageConfig {
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return PageConfig::default();
    };
    PageConfig::from_query(
        params.get(MOTION_PARAM).as_deref(),
        params.get(DEBUG_PARAM).as_deref(),
    )
}
