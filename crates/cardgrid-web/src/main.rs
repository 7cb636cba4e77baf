/// CardGrid web server
///
/// Axum server that renders the Leptos app with SSR support.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use cardgrid_web::config::WebConfig;
    use cardgrid_web::error::CardGridError;
    use cardgrid_web::logging::init_logging;
    use cardgrid_web::pages::home::CARDS;
    use cardgrid_web::server;
    use leptos::get_configuration;
    use tracing::info;

    let config = WebConfig::from_env().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    // `None` reads the values cargo-leptos exports; point `leptos_manifest`
    // at the crate's Cargo.toml to run without it
    let conf = get_configuration(config.leptos_manifest.as_deref())
        .await
        .map_err(|e| CardGridError::config(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(addr) = config.site_addr {
        leptos_options.site_addr = addr;
    }
    let addr = leptos_options.site_addr;

    let app = server::router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, cards = CARDS.len(), "CardGrid listening");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|e| CardGridError::server(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point instead
}
