use crate::config::AppConfig;
use dream_core::TrackCatalog;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js)?
        .dyn_into()
        .map_err(js)?;
    if !resp.ok() {
        anyhow::bail!("{url}: HTTP {}", resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(js)?).await.map_err(js)?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("{url}: body is not text"))
}

/// Load the manifest. Any failure leaves the session with an empty catalog.
pub async fn load_catalog(config: &AppConfig) -> TrackCatalog {
    let loaded = async {
        let json = fetch_text(&config.manifest_url).await?;
        Ok::<_, anyhow::Error>(TrackCatalog::from_manifest_json(
            &json,
            &config.music_base_url,
        )?)
    }
    .await;
    match loaded {
        Ok(catalog) => {
            log::info!(
                "[catalog] {} tracks from {}",
                catalog.len(),
                config.manifest_url
            );
            catalog
        }
        Err(e) => {
            log::error!("[catalog] failed to load music manifest: {e:#}");
            TrackCatalog::empty()
        }
    }
}
