use std::cell::Cell;

thread_local! {
    static VERBOSE: Cell<bool> = Cell::new(false);
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn set_verbose(enabled: bool) {
    VERBOSE.with(|flag| flag.set(enabled));
}

pub(crate) fn verbose() -> bool {
    VERBOSE.with(Cell::get)
}

/// Console line that only shows up with `?debug` in the page URL.
macro_rules! trace {
    ($($arg:expr),+ $(,)?) => {
        if $crate::logging::verbose() {
            gloo::console::log!($($arg),+);
        }
    };
}
