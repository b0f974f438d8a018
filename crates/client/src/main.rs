use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_client::api::{MovieApi, DEFAULT_API_URL};
use marquee_client::app::MovieApp;
use marquee_client::command::{Command, HELP};
use marquee_client::render::render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let api_url = std::env::var("MARQUEE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
    tracing::info!(%api_url, "Connecting to movie API");

    let mut app = MovieApp::start(MovieApi::new(api_url)).await;
    println!("{}", render(&app.state));
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring input");
                continue;
            }
        };

        // Action failures are already logged by `MovieApp`; the view simply
        // stays as it was.
        match command {
            Command::Set(field, value) => app.state.form.set(field, value),
            Command::Add => {
                let _ = app.add_movie().await;
            }
            Command::Stage => {
                let _ = app.add_temp_movie();
            }
            Command::Replace => {
                let _ = app.replace_collection().await;
            }
            Command::Show => app.show_collection(),
            Command::Select(id) => {
                app.state.set_selected_id(id);
                let _ = app.select_movie().await;
            }
            Command::Edit(id) => {
                let movie = app
                    .state
                    .movies
                    .iter()
                    .find(|m| m.id.to_string() == id)
                    .cloned();
                match movie {
                    Some(movie) => app.begin_edit(&movie),
                    None => tracing::warn!(movie_id = %id, "Movie is not in the current list"),
                }
            }
            Command::Update => {
                let _ = app.update_selected().await;
            }
            Command::Delete(id) => {
                let _ = app.delete_movie(&id).await;
            }
            Command::DeleteAll => {
                let _ = app.delete_all_movies().await;
            }
            Command::List => {
                let _ = app.fetch_movies().await;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }

        println!("{}", render(&app.state));
    }

    Ok(())
}
