use crate::infra::{load_catalog, parse_state, parse_strategy};
use clap::Args;
use rto_audit::config::AppConfig;
use rto_audit::engine::export::write_metric_table;
use rto_audit::engine::{
    network_affinity_label, rank_providers, summarize_comparison, sustainability_verdict,
    ComparisonSession, IntentStrategy, MarketMetrics, ProviderCatalog, Scenario, SessionSnapshot,
    StateCode, TransformedProvider,
};
use rto_audit::error::AppError;
use rto_audit::telemetry;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// State or territory code (NSW, VIC, QLD, WA, SA, TAS, ACT, NT)
    #[arg(long, value_parser = parse_state)]
    pub(crate) state: StateCode,
    /// Ranking strategy: compliance, value, authority or student-first
    #[arg(long, value_parser = parse_strategy)]
    pub(crate) strategy: Option<IntentStrategy>,
    /// Provider catalog JSON (defaults to APP_CATALOG_PATH, then the bundled sample)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ScenarioArgs {
    /// Scenario identifier, e.g. budget-vic
    #[arg(long)]
    pub(crate) id: String,
    /// Provider catalog JSON
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct VerdictsArgs {
    /// State or territory code
    #[arg(long, value_parser = parse_state)]
    pub(crate) state: StateCode,
    /// Provider catalog JSON
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// State or territory code
    #[arg(long, value_parser = parse_state)]
    pub(crate) state: StateCode,
    /// Provider catalog JSON
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Destination file; stdout when omitted
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

fn open_catalog(catalog: Option<PathBuf>) -> Result<ProviderCatalog, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let path = catalog.or(config.catalog.path);
    load_catalog(path.as_deref())
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let catalog = open_catalog(args.catalog)?;
    let buckets = catalog.partition();
    let providers = buckets.providers(args.state);
    debug!(state = %args.state, strategy = ?args.strategy, "ranking bucket");

    let ranked = rank_providers(providers, args.strategy);
    render_ranking(&mut io::stdout().lock(), args.state, args.strategy, &ranked)?;
    Ok(())
}

pub(crate) fn run_scenario(args: ScenarioArgs) -> Result<(), AppError> {
    let scenario = Scenario::find(&args.id)
        .ok_or_else(|| AppError::NotFound(format!("scenario '{}'", args.id)))?;
    let catalog = open_catalog(args.catalog)?;
    let buckets = catalog.partition();

    let mut session = ComparisonSession::new(&buckets, scenario.state);
    session.select_scenario(scenario);
    debug!(scenario = scenario.id, "scenario applied");

    let compared = session.compared_providers();
    render_scenario(
        &mut io::stdout().lock(),
        scenario,
        &session.snapshot(),
        &compared,
    )?;
    Ok(())
}

pub(crate) fn run_verdicts(args: VerdictsArgs) -> Result<(), AppError> {
    let catalog = open_catalog(args.catalog)?;
    let buckets = catalog.partition();
    render_verdicts(
        &mut io::stdout().lock(),
        &catalog,
        args.state,
        buckets.providers(args.state),
    )?;
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let catalog = open_catalog(args.catalog)?;
    let buckets = catalog.partition();
    let providers = buckets.providers(args.state);

    match args.out {
        Some(path) => {
            write_metric_table(File::create(&path)?, providers)?;
            println!(
                "Wrote {} {} providers to {}",
                providers.len(),
                args.state,
                path.display()
            );
        }
        None => write_metric_table(io::stdout().lock(), providers)?,
    }
    Ok(())
}

fn format_price(price: Option<f64>) -> String {
    price
        .map(|price| format!("${price}"))
        .unwrap_or_else(|| "undisclosed".to_string())
}

pub(crate) fn render_ranking<W: Write>(
    out: &mut W,
    state: StateCode,
    strategy: Option<IntentStrategy>,
    ranked: &[&TransformedProvider],
) -> io::Result<()> {
    match strategy {
        Some(strategy) => {
            let profile = strategy.profile();
            writeln!(
                out,
                "{} providers ranked by {} ({}, {})",
                state, strategy, profile.name, profile.role
            )?;
            writeln!(out, "{}", profile.advice)?;
        }
        None => writeln!(out, "{} providers by primary score", state)?,
    }

    if ranked.is_empty() {
        writeln!(out, "  No providers listed for {}", state)?;
        return Ok(());
    }

    let focus = strategy.map(IntentStrategy::focus_category);
    for (position, provider) in ranked.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {} [{}] score {} | {}",
            position + 1,
            provider.name,
            provider.id,
            provider.score,
            format_price(provider.price)
        )?;
        if let Some(category) = focus {
            let metrics: Vec<String> = category
                .metrics()
                .into_iter()
                .map(|metric| {
                    format!(
                        "{}: {}",
                        metric.label(),
                        metric.format(provider.metrics.value(metric))
                    )
                })
                .collect();
            writeln!(out, "    {}", metrics.join(" | "))?;
        }
    }

    let slate: Vec<&str> = ranked
        .iter()
        .take(rto_audit::engine::ranking::SLATE_SIZE)
        .map(|provider| provider.id.as_str())
        .collect();
    writeln!(out, "Comparison slate: {}", slate.join(", "))
}

pub(crate) fn render_scenario<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    snapshot: &SessionSnapshot,
    compared: &[&TransformedProvider],
) -> io::Result<()> {
    writeln!(out, "{}: {}", scenario.title, scenario.description)?;
    writeln!(
        out,
        "State {} | strategy {}",
        snapshot.state, scenario.strategy
    )?;
    writeln!(out, "Slate: {}", snapshot.slate.ids().join(", "))?;
    writeln!(out, "{}", snapshot.analysis)?;

    let summary = summarize_comparison(compared);
    if let Some(winner) = summary.overall_winner.as_deref() {
        writeln!(out, "Overall leader: {}", winner)?;
    }
    for entry in &summary.category_scores {
        let scores = entry.scores;
        writeln!(
            out,
            "  - {}: compliance {} | technical {} | content {} | trust {} | authority {}",
            entry.name,
            scores.compliance,
            scores.technical,
            scores.content,
            scores.trust,
            scores.authority
        )?;
        writeln!(out, "    {}", entry.insight)?;
    }
    Ok(())
}

pub(crate) fn render_verdicts<W: Write>(
    out: &mut W,
    catalog: &ProviderCatalog,
    state: StateCode,
    providers: &[TransformedProvider],
) -> io::Result<()> {
    let market: MarketMetrics = catalog.market(state);
    writeln!(
        out,
        "{} market: {} providers | median price ${} | mean score {}",
        state, market.provider_count, market.median_price, market.mean_score
    )?;

    for provider in providers {
        let Some(record) = catalog.find(&provider.source_id) else {
            continue;
        };
        let verdict = sustainability_verdict(record, &market);
        writeln!(
            out,
            "- {} [{}] {} | {} | {}",
            provider.name,
            provider.id,
            verdict.status.label(),
            verdict.attrition_label,
            verdict.failure_label
        )?;
        writeln!(out, "    {}", verdict.insight)?;
        if let Some(date) = record.audit.last_audit_date() {
            writeln!(out, "    Last audited {}", date.format("%d %b %Y"))?;
        }
        if let Some(label) = network_affinity_label(record) {
            writeln!(out, "    Network: {}", label)?;
        }
    }
    Ok(())
}
