//! Browser/native glue: language detection, document reload and timers.

/// Primary language the browser (or OS, off the web) reports.
#[cfg(target_arch = "wasm32")]
pub fn browser_language() -> Option<String> {
    web_sys::window().and_then(|window| window.navigator().language())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_language() -> Option<String> {
    crate::i18n::requested_languages()
        .first()
        .map(|lang| lang.to_string())
}

/// Reload the whole document. Returns `false` where there is no document to
/// reload; callers then refetch their data instead.
#[cfg(target_arch = "wasm32")]
pub fn reload_page() -> bool {
    match web_sys::window().map(|window| window.location().reload()) {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            tracing::warn!(?err, "document reload failed");
            false
        }
        None => false,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn reload_page() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
