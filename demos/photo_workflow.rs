//! Photo Workflow Example
//!
//! Fetches a token and a secret, looks up users, downloads every user's
//! photo one after another, then emails the photos. Each step is a plain
//! function returning a deferred; the wiring between them is done with
//! `lift`, `fold`, `first` and `shared` instead of hand-written `.await`
//! sequencing.
//!
//! Run with: cargo run --example photo_workflow --features async,tracing

use std::time::{Duration, Instant};

use settle::prelude::*;

const LATENCY: Duration = Duration::from_millis(300);

// =============================================================================
// Services
// =============================================================================

fn get_token() -> impl Deferred<Output = String, Error = String> {
    delayed("token abc".to_string(), LATENCY)
}

fn get_secret() -> impl Deferred<Output = String, Error = String> {
    delayed("secret h9irnvxwri".to_string(), LATENCY)
}

fn get_users(token: String, secret: String) -> impl Deferred<Output = Vec<String>, Error = String> {
    tracing::info!(%token, %secret, "fetching users");
    delayed(vec!["A".to_string(), "B".to_string(), "C".to_string()], LATENCY)
}

fn get_photo(token: &str, user: &str) -> impl Deferred<Output = String, Error = String> {
    let photo = match user {
        "A" => ":)",
        "B" => ":D",
        "C" => ":/",
        _ => ":-|",
    };
    tracing::debug!(token, user, "fetching photo");
    delayed(photo.to_string(), LATENCY)
}

fn send_email(photos: Vec<String>) -> impl Deferred<Output = (), Error = String> {
    tracing::info!(count = photos.len(), "sending email");
    delayed((), LATENCY)
}

// =============================================================================
// Composition
// =============================================================================

fn append_to(mut photos: Vec<String>) -> impl FnOnce(String) -> Vec<String> + Send {
    move |photo| {
        photos.push(photo);
        photos
    }
}

/// One photo at a time, in user order.
fn get_photos_sequentially(
    token: String,
    users: Vec<String>,
) -> impl Deferred<Output = Vec<String>, Error = String> {
    fold(users, Vec::new(), move |photos, user: String| {
        lift1(append_to(photos), get_photo(&token, &user))
    })
}

/// All photos at once.
fn get_photos_in_parallel(
    token: String,
    users: Vec<String>,
) -> impl Deferred<Output = Vec<String>, Error = String> {
    traverse(users, move |user| get_photo(&token, &user))
}

fn workflow() -> impl Deferred<Output = Vec<String>, Error = String> {
    // The token feeds two steps, so it must be observable twice
    let token = get_token().shared();
    let secret = get_secret();

    let users = lift2(get_users, token.clone(), secret)
        .flatten()
        .instrument(tracing::info_span!("users"));

    let photos = lift2(get_photos_sequentially, token, users)
        .flatten()
        .instrument(tracing::info_span!("photos"))
        .shared();

    let sent = lift1(send_email, photos.clone()).flatten();

    first(photos, sent)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting photo workflow");
    let started = Instant::now();

    match workflow()
        .instrument(tracing::info_span!("workflow"))
        .settle()
        .await
    {
        Ok(photos) => tracing::info!(?photos, elapsed = ?started.elapsed(), "workflow completed"),
        Err(e) => tracing::error!("workflow failed: {}", e),
    }

    // Same lookup with the photos fetched concurrently
    let started = Instant::now();
    let parallel = lift2(get_photos_in_parallel, get_token(), get_users("token abc".into(), "secret".into()))
        .flatten()
        .settle()
        .await;
    tracing::info!(?parallel, elapsed = ?started.elapsed(), "parallel lookup completed");

    // A failing step rejects the whole workflow
    let failed = lift2(
        get_photos_sequentially,
        delayed_reject::<String, _>("token expired".to_string(), LATENCY),
        get_users("token abc".into(), "secret".into()),
    )
    .flatten()
    .recover(|e| {
        tracing::warn!("recovering from: {}", e);
        pure::<_, String>(Vec::new())
    })
    .settle()
    .await;
    tracing::info!(?failed, "recovered lookup");
}
