use dioxus::prelude::*;

use ui::{AuthProvider, NoticeBanner, NoticeProvider};
use views::{Login, Students};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/students")]
    Students {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("failed to start tokio runtime: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("server error: {e}");
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    api::settings::init()?;

    // Initialize database pool
    let pool = api::db::get_pool().await?;

    // Run migrations
    sqlx::migrate!("../api/migrations").run(pool).await?;

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::hours(8)));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NoticeProvider {
                NoticeBanner {}
                Router::<Route> {}
            }
        }
    }
}
