//! Service worker registration and installability status.
//!
//! Detection requires a browser environment; native builds report
//! nothing supported. Worker behavior itself is out of scope: the
//! registered script is a no-op shipped with the static assets.

#[cfg(test)]
#[path = "pwa_test.rs"]
mod pwa_test;

/// Register `/service_worker.js`, fire-and-forget. A failed registration
/// is logged and otherwise ignored.
pub fn register_worker() {
    #[cfg(feature = "csr")]
    {
        if !service_worker_supported() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let container = window.navigator().service_worker();
        wasm_bindgen_futures::spawn_local(async move {
            let registration =
                wasm_bindgen_futures::JsFuture::from(container.register("/service_worker.js")).await;
            if let Err(e) = registration {
                log::warn!("service worker registration failed: {e:?}");
            }
        });
    }
}

/// Whether the browser exposes `navigator.serviceWorker`.
pub fn service_worker_supported() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().map_or(false, |w| {
            js_sys::Reflect::has(w.navigator().as_ref(), &wasm_bindgen::JsValue::from_str("serviceWorker"))
                .unwrap_or(false)
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Whether the app is running as an installed PWA (standalone display mode).
pub fn running_standalone() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(display-mode: standalone)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Status lines for the dashboard card.
pub fn status_lines() -> Vec<String> {
    describe(service_worker_supported(), running_standalone())
}

fn describe(sw_supported: bool, standalone: bool) -> Vec<String> {
    vec![
        if sw_supported {
            "Service Worker: Supported".to_owned()
        } else {
            "Service Worker: Not supported".to_owned()
        },
        if standalone {
            "Running as: Installed PWA".to_owned()
        } else {
            "Running as: Browser tab".to_owned()
        },
    ]
}
