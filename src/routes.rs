use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Utc};

use crate::pipeline::{select, Aggregator, DisplayRecord};

pub struct AppState {
    pub site_name: String,
    pub description: String,
    pub aggregator: Aggregator,
}

// Template structs
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site_name: String,
    pub description: String,
    pub featured: Option<DisplayRecord>,
    pub games_news: Vec<DisplayRecord>,
    pub anime_news: Vec<DisplayRecord>,
    pub news: Vec<DisplayRecord>,
    pub year: i32,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub site_name: String,
    pub year: i32,
}

#[derive(Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub site_name: String,
    pub year: i32,
}

#[derive(Template)]
#[template(path = "disclaimer.html")]
pub struct DisclaimerTemplate {
    pub site_name: String,
    pub year: i32,
}

// Wrapper for HTML responses
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}

// Route handlers

/// The news page. Fetch failures are absorbed by the aggregator, so this
/// always renders successfully, at worst with empty sections.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let records = state.aggregator.collect().await;
    let bundle = select(records);

    HtmlTemplate(IndexTemplate {
        site_name: state.site_name.clone(),
        description: state.description.clone(),
        featured: bundle.featured,
        games_news: bundle.games,
        anime_news: bundle.anime,
        news: bundle.all,
        year: Utc::now().year(),
    })
}

pub async fn about(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    HtmlTemplate(AboutTemplate {
        site_name: state.site_name.clone(),
        year: Utc::now().year(),
    })
}

pub async fn privacy(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    HtmlTemplate(PrivacyTemplate {
        site_name: state.site_name.clone(),
        year: Utc::now().year(),
    })
}

pub async fn disclaimer(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    HtmlTemplate(DisclaimerTemplate {
        site_name: state.site_name.clone(),
        year: Utc::now().year(),
    })
}

pub async fn health() -> impl IntoResponse {
    Html("OK")
}
