use std::net::SocketAddr;
use std::sync::Mutex;
use analyzer_console::enums::region::Region;
use analyzer_console::traits::user_notifier::UserNotifier;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

/// Serves the backend's routes on an ephemeral local port.
///
/// `/analyze` rejects code containing `syntax error` with HTTP 400 and a
/// JSON body, and answers `success` without `html` for `no html`.
pub fn spawn() -> SocketAddr {
    let health = warp::get()
        .and(warp::path("health"))
        .and(warp::path::end())
        .map(|| warp::reply::json(&json!({ "status": "healthy", "ollama": "connected" })));

    let analyze = warp::post()
        .and(warp::path("analyze"))
        .and(warp::path::end())
        .and(warp::body::json())
        .map(|body: Value| -> Response {
            let code = body["code"].as_str().unwrap_or_default();
            if code.contains("syntax error") {
                let reply = warp::reply::json(&json!({ "success": false, "error": "Invalid input" }));
                return warp::reply::with_status(reply, StatusCode::BAD_REQUEST).into_response();
            }
            if code.contains("no html") {
                return warp::reply::json(&json!({ "success": true })).into_response();
            }
            warp::reply::json(&json!({
                "success": true,
                "html": format!("<p>{} via {}</p>", body["language"].as_str().unwrap_or_default(), body["type"].as_str().unwrap_or_default()),
                "analysis": "# ok",
            }))
            .into_response()
        });

    let analyze_repo = warp::post()
        .and(warp::path("analyze-repo"))
        .and(warp::path::end())
        .and(warp::body::json())
        .map(|body: Value| -> Response {
            if body["repo_path"] == "/missing" {
                return warp::reply::json(&json!({ "success": false, "error": "Repository not found" })).into_response();
            }
            warp::reply::json(&json!({ "success": true, "files": ["a.py", "b.py"], "total": 50 })).into_response()
        });

    let reports = warp::get()
        .and(warp::path("reports"))
        .and(warp::path::end())
        .map(|| {
            warp::reply::json(&json!([
                { "path": "2024/quality_report_api.md", "name": "quality_report_api.md", "type": "quality", "modified": "2024-05-01 10:00:00", "size": 2048 },
                { "path": "impact_login.md", "name": "impact_login.md", "type": "impact", "modified": "2024-05-02 09:30:00", "size": 512 },
                { "path": "notes.md", "name": "notes.md", "type": "custom", "modified": "2024-05-03 08:00:00", "size": 10 },
            ]))
        });

    let report = warp::get()
        .and(warp::path("report"))
        .and(warp::path::tail())
        .map(|tail: warp::path::Tail| -> Response {
            if tail.as_str() == "2024/quality_report_api.md" {
                return warp::reply::json(&json!({
                    "html": "<h1>API quality</h1>",
                    "filename": "quality_report_api.md",
                    "content": "# API quality",
                }))
                .into_response();
            }
            let reply = warp::reply::json(&json!({ "error": "Report not found" }));
            warp::reply::with_status(reply, StatusCode::NOT_FOUND).into_response()
        });

    let routes = health.or(analyze).or(analyze_repo).or(reports).or(report);
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

/// Answers every request with a non-JSON error page.
pub fn spawn_broken() -> SocketAddr {
    let routes = warp::any().map(|| warp::reply::with_status("upstream exploded", StatusCode::BAD_GATEWAY));
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
    pub reveals: Mutex<Vec<Region>>,
}

impl UserNotifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn reveal(&self, region: Region) {
        self.reveals.lock().unwrap().push(region);
    }
}
