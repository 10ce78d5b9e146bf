#![allow(dead_code)]

use linksnip::application::services::{ImportService, LinkService, RedirectService, StatsService};
use linksnip::domain::click_event::ClickEvent;
use linksnip::infrastructure::persistence::SqliteLinkRepository;
use linksnip::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const TEST_BASE_URL: &str = "http://test.local";

pub async fn create_test_link(pool: &SqlitePool, id: &str, url: &str) {
    sqlx::query("INSERT INTO urls (id, long_url) VALUES ($1, $2)")
        .bind(id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_clicked_link(pool: &SqlitePool, id: &str, url: &str, clicks: i64) {
    sqlx::query("INSERT INTO urls (id, long_url, clicks) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(url)
        .bind(clicks)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn get_clicks(pool: &SqlitePool, id: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let link_repo = Arc::new(SqliteLinkRepository::new(pool));

    let link_service = Arc::new(LinkService::new(link_repo.clone()));
    let redirect_service = Arc::new(RedirectService::new(link_repo.clone(), tx.clone()));
    let import_service = Arc::new(ImportService::new(link_service.clone()));
    let stats_service = Arc::new(StatsService::new(link_repo));

    let state = AppState {
        link_service,
        redirect_service,
        import_service,
        stats_service,
        base_url: TEST_BASE_URL.to_string(),
        click_sender: tx,
    };

    (state, rx)
}
