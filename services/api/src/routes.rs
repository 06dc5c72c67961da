use crate::infra::{resolve_state, AppState};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use rto_audit::config::CourseConfig;
use rto_audit::engine::ranking::SLATE_SIZE;
use rto_audit::engine::{
    network_affinity_label, rank_providers, summarize_comparison, sustainability_verdict,
    ComparisonSession, ComparisonSummary, EnquiryTarget, IntentStrategy, MarketMetrics, Metric,
    Scenario, SessionSnapshot, StateCode, SustainabilityVerdict, TransformedProvider,
};
use rto_audit::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
pub(crate) struct ProvidersResponse {
    pub(crate) state: StateCode,
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) providers: Vec<ProviderView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProviderView {
    #[serde(flatten)]
    pub(crate) provider: TransformedProvider,
    pub(crate) formatted_metrics: Vec<FormattedMetric>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FormattedMetric {
    pub(crate) metric: Metric,
    pub(crate) label: &'static str,
    pub(crate) display: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct MarketResponse {
    pub(crate) state: StateCode,
    pub(crate) generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) market: MarketMetrics,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerdictsResponse {
    pub(crate) state: StateCode,
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) market: MarketMetrics,
    pub(crate) verdicts: Vec<VerdictEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerdictEntry {
    pub(crate) provider_id: String,
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) verdict: SustainabilityVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) network_affinity: Option<&'static str>,
    pub(crate) last_audited: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RankingRequest {
    #[serde(default)]
    pub(crate) state: Option<String>,
    #[serde(default)]
    pub(crate) strategy: Option<String>,
    #[serde(default)]
    pub(crate) scenario: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankingResponse {
    pub(crate) generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) session: SessionSnapshot,
    /// Whole bucket in ranked order; the slate is its first three entries.
    pub(crate) ranked: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareRequest {
    pub(crate) state: String,
    pub(crate) provider_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompareResponse {
    pub(crate) state: StateCode,
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) provider_ids: Vec<String>,
    #[serde(flatten)]
    pub(crate) summary: ComparisonSummary,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/course", get(course_endpoint))
        .route("/api/v1/states/:state/providers", get(providers_endpoint))
        .route("/api/v1/states/:state/market", get(market_endpoint))
        .route("/api/v1/states/:state/verdicts", get(verdicts_endpoint))
        .route(
            "/api/v1/states/:state/providers/:provider_id/enquiry",
            get(enquiry_endpoint),
        )
        .route("/api/v1/rankings", post(rankings_endpoint))
        .route("/api/v1/compare", post(compare_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn course_endpoint(Extension(state): Extension<AppState>) -> Json<CourseConfig> {
    Json(state.data.course.clone())
}

pub(crate) async fn providers_endpoint(
    Extension(state): Extension<AppState>,
    Path(raw_state): Path<String>,
) -> Result<Json<ProvidersResponse>, AppError> {
    let code = request_state(&raw_state)?;
    let providers = state
        .data
        .buckets
        .providers(code)
        .iter()
        .map(|provider| ProviderView {
            formatted_metrics: provider
                .metrics
                .formatted()
                .into_iter()
                .map(|(metric, display)| FormattedMetric {
                    metric,
                    label: metric.label(),
                    display,
                })
                .collect(),
            provider: provider.clone(),
        })
        .collect();

    Ok(Json(ProvidersResponse {
        state: code,
        generated_at: Utc::now(),
        providers,
    }))
}

pub(crate) async fn market_endpoint(
    Extension(state): Extension<AppState>,
    Path(raw_state): Path<String>,
) -> Result<Json<MarketResponse>, AppError> {
    let code = request_state(&raw_state)?;
    Ok(Json(MarketResponse {
        state: code,
        generated_at: Utc::now(),
        market: state.data.catalog.market(code),
    }))
}

pub(crate) async fn verdicts_endpoint(
    Extension(state): Extension<AppState>,
    Path(raw_state): Path<String>,
) -> Result<Json<VerdictsResponse>, AppError> {
    let code = request_state(&raw_state)?;
    let data = &state.data;
    let market = data.catalog.market(code);

    let verdicts = data
        .buckets
        .providers(code)
        .iter()
        .filter_map(|provider| {
            let record = data.catalog.find(&provider.source_id)?;
            Some(VerdictEntry {
                provider_id: provider.id.clone(),
                name: provider.name.clone(),
                verdict: sustainability_verdict(record, &market),
                network_affinity: network_affinity_label(record),
                last_audited: record.audit.last_audit_date(),
            })
        })
        .collect();

    Ok(Json(VerdictsResponse {
        state: code,
        generated_at: Utc::now(),
        market,
        verdicts,
    }))
}

pub(crate) async fn enquiry_endpoint(
    Extension(state): Extension<AppState>,
    Path((raw_state, provider_id)): Path<(String, String)>,
) -> Result<Json<EnquiryTarget>, AppError> {
    let code = request_state(&raw_state)?;
    let provider = state
        .data
        .buckets
        .find(code, &provider_id)
        .ok_or_else(|| AppError::NotFound(format!("provider '{provider_id}' in {code}")))?;

    Ok(Json(provider.enquiry_target(code)))
}

pub(crate) async fn rankings_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RankingRequest>,
) -> Result<Json<RankingResponse>, AppError> {
    let buckets = &state.data.buckets;

    let scenario = payload.scenario.as_deref().and_then(|scenario_id| {
        let found = Scenario::find(scenario_id);
        if found.is_none() {
            warn!(scenario = scenario_id, "unknown scenario; keeping state order");
        }
        found
    });

    let code = match (payload.state.as_deref(), scenario, payload.scenario.is_some()) {
        (_, Some(scenario), _) => scenario.state,
        (Some(raw_state), None, _) => request_state(raw_state)?,
        (None, None, true) => state.data.course.default_state(),
        (None, None, false) => {
            warn!("ranking request without state or scenario");
            return Err(AppError::InvalidRequest(
                "either 'state' or 'scenario' is required".to_string(),
            ));
        }
    };

    let mut session = ComparisonSession::new(buckets, code);
    if let Some(scenario) = scenario {
        session.select_scenario(scenario);
        debug!(scenario = scenario.id, state = %scenario.state, "scenario applied");
    } else {
        // Unknown strategy ids fall back to primary-score order.
        match payload.strategy.as_deref().map(IntentStrategy::parse) {
            Some(Some(strategy)) => {
                session.select_strategy(strategy);
                debug!(%strategy, state = %code, "strategy applied");
            }
            Some(None) => warn!(
                strategy = payload.strategy.as_deref().unwrap_or_default(),
                "unknown strategy; keeping score order"
            ),
            None => {}
        }
    }

    let ranked = rank_providers(session.providers(), session.strategy())
        .into_iter()
        .map(|provider| provider.id.clone())
        .collect();

    Ok(Json(RankingResponse {
        generated_at: Utc::now(),
        session: session.snapshot(),
        ranked,
    }))
}

pub(crate) async fn compare_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let code = request_state(&payload.state)?;
    if payload.provider_ids.len() > SLATE_SIZE {
        warn!(count = payload.provider_ids.len(), "too many providers to compare");
        return Err(AppError::InvalidRequest(format!(
            "at most {SLATE_SIZE} providers can be compared"
        )));
    }

    let mut session = ComparisonSession::new(&state.data.buckets, code);
    for slot in 0..SLATE_SIZE {
        session.select_provider(slot, payload.provider_ids.get(slot).cloned());
    }
    let compared = session.compared_providers();

    Ok(Json(CompareResponse {
        state: code,
        generated_at: Utc::now(),
        provider_ids: compared.iter().map(|provider| provider.id.clone()).collect(),
        summary: summarize_comparison(&compared),
    }))
}

fn request_state(raw: &str) -> Result<StateCode, AppError> {
    resolve_state(raw).inspect_err(|err| warn!(%err, "rejected state code"))
}
