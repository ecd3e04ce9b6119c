#![cfg(feature = "web")]

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use handlebars::Handlebars;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::error::DataSourceError;
use crate::lookup::{SearchBy, find_student};
use crate::record::StudentTable;
use crate::report::StudentReport;
use crate::store::StudentStore;

pub struct AppState {
    students: StudentStore,
    templates: Handlebars<'static>,
}

impl AppState {
    pub fn new(students: StudentStore) -> Result<Self, handlebars::TemplateError> {
        let mut templates = Handlebars::new();
        templates.register_template_string("index", include_str!("./static/index.hbs"))?;
        templates.register_template_string("error", include_str!("./static/error.hbs"))?;
        Ok(AppState {
            students,
            templates,
        })
    }

    fn render(&self, name: &str, data: &serde_json::Value) -> Response {
        match self.templates.render(name, data) {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                error!("failed to render {}: {}", name, e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
            }
        }
    }

    fn render_load_error(&self, e: &DataSourceError) -> Response {
        let page = self.render(
            "error",
            &serde_json::json!({
                "path": self.students.path().display().to_string(),
                "message": e.to_string(),
            }),
        );
        (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    by: SearchBy,
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
struct ApiResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    student: Option<StudentReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/report", get(download_report))
        .route("/api/students", get(list_students))
        .route("/api/search", get(search_student))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup app state; the sheet itself is read on the first request
    let app_state = Arc::new(AppState::new(StudentStore::new(&config.data_path))?);
    let app = router(app_state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "Listening on http://{} (data: {})",
        config.bind_addr,
        config.data_path.display()
    );
    axum::serve(listener, app).await?;

    Ok(())
}

/// Looks up one student and builds the report for them.
fn lookup(table: &StudentTable, params: &SearchParams) -> Option<StudentReport> {
    let report = find_student(table, params.by, &params.q).map(StudentReport::build);
    debug!(
        "search by {} for {:?}: {}",
        params.by,
        params.q,
        if report.is_some() { "found" } else { "not found" }
    );
    report
}

#[axum::debug_handler]
async fn serve_index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let table = match state.students.get().await {
        Ok(table) => table,
        Err(e) => return state.render_load_error(&e),
    };

    let searched = !params.q.is_empty();
    let student = if searched {
        lookup(&table, &params)
    } else {
        None
    };

    let report_href = format!(
        "/report?by={}&q={}",
        params.by,
        urlencoding::encode(&params.q)
    );

    let rows: Vec<&[String]> = table.records().iter().map(|r| r.cells()).collect();

    state.render(
        "index",
        &serde_json::json!({
            "record_count": table.len(),
            "columns": table.columns(),
            "rows": rows,
            "by_usn": params.by == SearchBy::Usn,
            "label": params.by.label(),
            "query": params.q,
            "searched": searched,
            "student": student,
            "report_href": report_href,
        }),
    )
}

async fn download_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let table = match state.students.get().await {
        Ok(table) => table,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    };

    if params.q.is_empty() {
        return (StatusCode::BAD_REQUEST, "Missing query").into_response();
    }

    match lookup(&table, &params) {
        Some(report) => (
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"student_details.txt\"",
                ),
            ],
            report.text,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "No matching student found.").into_response(),
    }
}

async fn list_students(State(state): State<Arc<AppState>>) -> Response {
    match state.students.get().await {
        Ok(table) => Json(serde_json::json!({
            "schema": table.schema(),
            "columns": table.columns(),
            "records": table.records(),
        }))
        .into_response(),
        Err(e) => error_json(&e),
    }
}

async fn search_student(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let table = match state.students.get().await {
        Ok(table) => table,
        Err(e) => return error_json(&e),
    };

    let report = if params.q.is_empty() {
        None
    } else {
        lookup(&table, &params)
    };

    match report {
        Some(report) => Json(ApiResponse {
            status: "found",
            student: Some(report),
            message: None,
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse {
                status: "not_found",
                student: None,
                message: Some("No matching student found.".to_string()),
            }),
        )
            .into_response(),
    }
}

fn error_json(e: &DataSourceError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse {
            status: "error",
            student: None,
            message: Some(e.to_string()),
        }),
    )
        .into_response()
}
