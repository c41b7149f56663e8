use askama::Template;
use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use crate::errors::AppError;
use crate::flash::{self, Flash};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage {
    flash: Option<Flash>,
}

#[derive(Deserialize)]
pub struct IndexQuery {
    flash: Option<String>,
}

/// GET /
/// The upload form, with the flash banner for whatever the last redirect
/// carried in the query string.
pub async fn index(Query(query): Query<IndexQuery>) -> Result<Html<String>, AppError> {
    let page = IndexPage {
        flash: query.flash.as_deref().and_then(flash::lookup),
    };
    Ok(Html(page.render()?))
}
