use actix_web::{http::header, middleware, web, App, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Mutex;
use tracing::{info, warn};

use crate::error::PlannerError;
use crate::export::schedule_to_csv_bytes;
use crate::plan::{plan_hosts, HostPlan, PlanSummary};
use crate::schedule::ScheduleEntry;

// Last generated plan; nothing survives a restart
pub struct AppState {
    pub plan: Mutex<Option<HostPlan>>,
}

impl AppState {
    pub fn new() -> Self {
        AppState { plan: Mutex::new(None) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
pub struct PlanRequest {
    pub roster: Vec<String>,
    /// Extracted text of each meeting programme
    pub documents: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct MeetingView {
    pub date: String,
    pub assigned: BTreeSet<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PlanResponse {
    pub success: bool,
    pub meetings: Vec<MeetingView>,
    pub schedule: Vec<ScheduleEntry>,
    pub summary: PlanSummary,
}

impl From<&HostPlan> for PlanResponse {
    fn from(plan: &HostPlan) -> Self {
        PlanResponse {
            success: true,
            meetings: plan
                .meetings_chronologically()
                .into_iter()
                .map(|(date, assigned)| MeetingView {
                    date: date.to_string(),
                    assigned: assigned.clone(),
                })
                .collect(),
            schedule: plan.schedule.entries.clone(),
            summary: plan.summary,
        }
    }
}

fn error_body(message: String) -> serde_json::Value {
    serde_json::json!({"success": false, "error": message})
}

// Runs the pipeline over uploaded roster + programme texts
async fn create_plan(
    req: web::Json<PlanRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let roster: Vec<String> = req
        .roster
        .iter()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();

    if roster.is_empty() {
        return Ok(HttpResponse::BadRequest().json(error_body("Roster is empty".to_string())));
    }

    match plan_hosts(&roster, &req.documents) {
        Ok(plan) => {
            let response = PlanResponse::from(&plan);
            *state.plan.lock().unwrap() = Some(plan);
            info!(entries = response.schedule.len(), "plan stored");
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e @ PlannerError::NoMeetingsFound { .. }) => {
            warn!("{}", e);
            Ok(HttpResponse::UnprocessableEntity().json(error_body(e.to_string())))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(error_body(e.to_string()))),
    }
}

async fn get_plan(state: web::Data<AppState>) -> Result<HttpResponse> {
    let plan = state.plan.lock().unwrap();
    match plan.as_ref() {
        Some(plan) => Ok(HttpResponse::Ok().json(PlanResponse::from(plan))),
        None => Ok(HttpResponse::NotFound().json(error_body("No plan available".to_string()))),
    }
}

async fn export_plan(state: web::Data<AppState>) -> Result<HttpResponse> {
    let plan = state.plan.lock().unwrap();
    let Some(plan) = plan.as_ref() else {
        return Ok(HttpResponse::NotFound().json(error_body("No plan available".to_string())));
    };

    let bytes = schedule_to_csv_bytes(&plan.schedule)
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"modevart_tidsplan.csv\"",
        ))
        .body(bytes))
}

async fn index() -> Result<HttpResponse> {
    let usage = "Mødevært planner\n\n\
        POST /api/plan         {\"roster\": [..], \"documents\": [..]}\n\
        GET  /api/plan         last generated plan\n\
        GET  /api/plan/export  last schedule as CSV\n";
    Ok(HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(usage))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/api/plan", web::post().to(create_plan))
        .route("/api/plan", web::get().to(get_plan))
        .route("/api/plan/export", web::get().to(export_plan));
}

pub async fn start_server(port: u16) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new());

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
