#![no_main]
use czy_polska_firma::site::Route;
use libfuzzer_sys::fuzz_target;

/// Request paths must map to a route, never panic, and only ever yield
/// keys usable as directory names.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Route::Category(key) | Route::Company(key) = Route::parse(s) {
            assert!(czy_polska_firma::site::is_path_segment(&key));
        }
    }
});
