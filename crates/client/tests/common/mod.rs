#![allow(dead_code)]

use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_client::api::MovieApi;
use marquee_client::app::MovieApp;
use marquee_client::form::FormField;
use marquee_db::DbPool;

/// A live API server on an ephemeral port, backed by an in-memory database.
pub struct TestServer {
    pub api_url: String,
    pub pool: DbPool,
}

impl TestServer {
    pub async fn start() -> Self {
        let pool = marquee_db::connect_in_memory().await.unwrap();
        marquee_db::ensure_schema(&pool).await.unwrap();

        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            cors_origins: vec!["*".to_string()],
            request_timeout_secs: 30,
        };
        let app = build_app_router(AppState { pool: pool.clone() }, &config);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            api_url: format!("http://{addr}/api"),
            pool,
        }
    }

    pub fn api(&self) -> MovieApi {
        MovieApi::new(self.api_url.clone())
    }

    pub async fn app(&self) -> MovieApp {
        MovieApp::start(self.api()).await
    }
}

/// An API client pointed at a port nothing listens on.
pub fn unreachable_api() -> MovieApi {
    MovieApi::new("http://127.0.0.1:9/api")
}

pub fn fill_form(app: &mut MovieApp, values: &[(FormField, &str)]) {
    for (field, value) in values {
        app.state.form.set(*field, *value);
    }
}

pub fn dune_form(app: &mut MovieApp) {
    fill_form(
        app,
        &[
            (FormField::Title, "Dune"),
            (FormField::Director, "Villeneuve"),
            (FormField::Genre, "Sci-Fi"),
            (FormField::Year, "2021"),
            (FormField::Rating, "9"),
            (FormField::Duration, "155"),
        ],
    );
}
