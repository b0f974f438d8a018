//! End-to-end tests driving `MovieApp` against a live API server.

mod common;

use assert_matches::assert_matches;
use common::{dune_form, fill_form, unreachable_api, TestServer};
use marquee_client::app::MovieApp;
use marquee_client::error::ClientError;
use marquee_client::form::{FormField, MovieForm};
use marquee_core::error::CoreError;
use marquee_core::models::movie::NewMovie;
use marquee_db::repositories::MovieRepo;

// ---------------------------------------------------------------------------
// Fetch
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_loads_existing_movies() {
    let server = TestServer::start().await;
    MovieRepo::create(&server.pool, &NewMovie::from_form("Heat", "", "", "", "", ""))
        .await
        .unwrap();

    let app = server.app().await;

    assert_eq!(app.state.movies.len(), 1);
    assert_eq!(app.state.movies[0].title.as_deref(), Some("Heat"));
}

#[tokio::test]
async fn failed_fetch_keeps_previous_list() {
    let server = TestServer::start().await;
    let mut seeded = server.app().await;
    dune_form(&mut seeded);
    seeded.add_movie().await.unwrap();

    let mut app = MovieApp::new(unreachable_api());
    app.state.movies = seeded.state.movies.clone();

    assert_matches!(app.fetch_movies().await, Err(ClientError::Request(_)));
    assert_eq!(app.state.movies, seeded.state.movies);
}

#[tokio::test]
async fn store_error_during_fetch_is_reported() {
    let server = TestServer::start().await;
    sqlx::query("DROP TABLE movies")
        .execute(&server.pool)
        .await
        .unwrap();

    let mut app = MovieApp::new(server.api());
    assert_matches!(
        app.fetch_movies().await,
        Err(ClientError::Api(msg)) if msg == "no such table: movies"
    );
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_movie_defaults_blanks_clears_form_and_refreshes() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    fill_form(&mut app, &[(FormField::Title, "Alien"), (FormField::Year, "1979")]);

    app.add_movie().await.unwrap();

    assert_eq!(app.state.form, MovieForm::default());
    assert_eq!(app.state.movies.len(), 1);
    let movie = &app.state.movies[0];
    assert_eq!(movie.title.as_deref(), Some("Alien"));
    assert_eq!(movie.year.as_deref(), Some("1979"));
    assert_eq!(movie.director.as_deref(), Some("N/A"));
    assert_eq!(movie.duration.as_deref(), Some("N/A"));
}

#[tokio::test]
async fn add_movie_without_title_sends_nothing() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    fill_form(&mut app, &[(FormField::Genre, "Noir")]);

    assert_matches!(
        app.add_movie().await,
        Err(ClientError::Core(CoreError::Validation(_)))
    );

    assert_eq!(app.state.form.genre, "Noir");
    assert!(MovieRepo::list(&server.pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn add_movie_failure_keeps_form() {
    let mut app = MovieApp::new(unreachable_api());
    dune_form(&mut app);

    assert!(app.add_movie().await.is_err());
    assert_eq!(app.state.form.title, "Dune");
}

// ---------------------------------------------------------------------------
// Temp collection and replace
// ---------------------------------------------------------------------------

#[tokio::test]
async fn staged_movies_replace_the_server_collection() {
    let server = TestServer::start().await;
    for title in ["Old 1", "Old 2"] {
        MovieRepo::create(&server.pool, &NewMovie::from_form(title, "", "", "", "", ""))
            .await
            .unwrap();
    }
    let mut app = server.app().await;
    app.show_collection();

    fill_form(&mut app, &[(FormField::Title, "New A")]);
    app.add_temp_movie().unwrap();
    fill_form(&mut app, &[(FormField::Title, "New B"), (FormField::Rating, "7")]);
    app.add_temp_movie().unwrap();

    // Staging is local only.
    assert_eq!(MovieRepo::list(&server.pool).await.unwrap().len(), 2);
    assert_eq!(app.state.temp_movies.len(), 2);

    app.replace_collection().await.unwrap();

    assert!(app.state.temp_movies.is_empty());
    assert!(!app.state.show_collection);
    assert!(app.state.selected_movie.is_none());

    let titles: Vec<_> = app
        .state
        .movies
        .iter()
        .filter_map(|m| m.title.as_deref())
        .collect();
    assert_eq!(titles, ["New A", "New B"]);
    let ids: Vec<_> = app.state.movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, [3, 4]);
    assert_eq!(app.state.movies[1].rating.as_deref(), Some("7"));
}

#[tokio::test]
async fn replace_with_nothing_staged_is_a_no_op() {
    let server = TestServer::start().await;
    MovieRepo::create(&server.pool, &NewMovie::from_form("Stay", "", "", "", "", ""))
        .await
        .unwrap();
    let mut app = server.app().await;

    app.replace_collection().await.unwrap();

    assert_eq!(MovieRepo::list(&server.pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_replace_keeps_staged_movies() {
    let mut app = MovieApp::new(unreachable_api());
    fill_form(&mut app, &[(FormField::Title, "Pending")]);
    app.add_temp_movie().unwrap();
    app.show_collection();

    assert!(app.replace_collection().await.is_err());

    assert_eq!(app.state.temp_movies.len(), 1);
    assert!(app.state.show_collection);
}

// ---------------------------------------------------------------------------
// Select
// ---------------------------------------------------------------------------

#[tokio::test]
async fn select_movie_stores_result_and_clears_input() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    dune_form(&mut app);
    app.add_movie().await.unwrap();

    app.state.set_selected_id(" 1 ");
    app.select_movie().await.unwrap();

    let selected = app.state.selected_movie.as_ref().unwrap();
    assert_eq!(selected.id, 1);
    assert_eq!(selected.title.as_deref(), Some("Dune"));
    assert!(app.state.selected_id.is_empty());
}

#[tokio::test]
async fn select_unknown_id_clears_selection() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    app.state.set_selected_id("404");

    app.select_movie().await.unwrap();

    assert!(app.state.selected_movie.is_none());
    assert!(app.state.selected_id.is_empty());
}

#[tokio::test]
async fn select_blank_id_is_a_no_op() {
    let mut app = MovieApp::new(unreachable_api());
    app.state.set_selected_id("   ");

    app.select_movie().await.unwrap();

    assert_eq!(app.state.selected_id, "   ");
}

#[tokio::test]
async fn failed_select_clears_selection_and_input() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    dune_form(&mut app);
    app.add_movie().await.unwrap();
    app.state.set_selected_id("1");
    app.select_movie().await.unwrap();
    assert!(app.state.selected_movie.is_some());

    app.state.set_selected_id("not-a-number");
    assert_matches!(app.select_movie().await, Err(ClientError::Api(_)));

    assert!(app.state.selected_movie.is_none());
    assert!(app.state.selected_id.is_empty());
}

#[tokio::test]
async fn select_id_with_query_text_is_not_truncated() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    dune_form(&mut app);
    app.add_movie().await.unwrap();

    app.state.set_selected_id("1?x");
    assert_matches!(app.select_movie().await, Err(ClientError::Api(_)));
    assert!(app.state.selected_movie.is_none());

    // A path-like id stays inside the item route.
    assert_matches!(app.delete_movie("../health").await, Err(ClientError::Api(_)));
    assert_eq!(MovieRepo::list(&server.pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_flow_updates_record_in_place() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    dune_form(&mut app);
    app.add_movie().await.unwrap();

    let listed = app.state.movies[0].clone();
    app.begin_edit(&listed);
    assert_eq!(app.state.selected_id, "1");
    app.state.form.set(FormField::Rating, "10");

    app.update_selected().await.unwrap();

    assert_eq!(app.state.form, MovieForm::default());
    assert!(app.state.selected_id.is_empty());
    assert!(app.state.selected_movie.is_none());

    let movie = &app.state.movies[0];
    assert_eq!(movie.id, 1);
    assert_eq!(movie.rating.as_deref(), Some("10"));
    assert_eq!(movie.title.as_deref(), Some("Dune"));
    assert_eq!(movie.duration.as_deref(), Some("155"));
}

#[tokio::test]
async fn edit_without_id_is_rejected_locally() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    dune_form(&mut app);

    assert_matches!(
        app.edit_movie("").await,
        Err(ClientError::Core(CoreError::Validation(_)))
    );
    assert_eq!(app.state.form.title, "Dune");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_movie_refreshes_list() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    for title in ["Keep", "Drop"] {
        fill_form(&mut app, &[(FormField::Title, title)]);
        app.add_movie().await.unwrap();
    }

    app.delete_movie("2").await.unwrap();

    assert_eq!(app.state.movies.len(), 1);
    assert_eq!(app.state.movies[0].title.as_deref(), Some("Keep"));
}

#[tokio::test]
async fn delete_all_clears_local_state() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    dune_form(&mut app);
    app.add_movie().await.unwrap();
    app.state.set_selected_id("1");
    app.select_movie().await.unwrap();

    app.delete_all_movies().await.unwrap();

    assert!(app.state.movies.is_empty());
    assert!(app.state.selected_movie.is_none());
    assert!(MovieRepo::list(&server.pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_delete_all_keeps_local_list() {
    let server = TestServer::start().await;
    let mut app = server.app().await;
    dune_form(&mut app);
    app.add_movie().await.unwrap();

    let mut offline = MovieApp::new(unreachable_api());
    offline.state.movies = app.state.movies.clone();

    assert!(offline.delete_all_movies().await.is_err());
    assert_eq!(offline.state.movies.len(), 1);
}
