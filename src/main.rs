//! Alzheimer's Genetic Risk Explorer - command line entry point

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use alz_risk_core::api::{self, Panel, PanelStatus};
use alz_risk_core::constants::{self, APP_NAME, APP_VERSION};
use alz_risk_core::logic::backend::PredictClient;
use alz_risk_core::logic::config::ClientConfig;
use alz_risk_core::logic::faq;
use alz_risk_core::logic::session::{self, ApplyOutcome, PredictSession, SharedSession};

#[derive(Parser, Debug)]
#[command(name = "alz-risk", version, about = APP_NAME)]
struct Cli {
    /// Prediction backend base URL
    #[arg(long, global = true, env = "RISK_BACKEND_URL", default_value = constants::DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "RISK_REQUEST_TIMEOUT", default_value_t = constants::DEFAULT_REQUEST_TIMEOUT)]
    timeout: u64,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Request a risk prediction and show its explanations
    Predict(PredictArgs),
    /// Show global feature importances
    Importance {
        /// Show the detail card of this feature
        #[arg(long)]
        select: Option<String>,
    },
    /// Browse the FAQ
    Faq {
        /// Filter questions and answers (case-insensitive)
        #[arg(long, short)]
        query: Option<String>,
        /// Press "show more" this many times
        #[arg(long, default_value_t = 0)]
        more: usize,
    },
}

#[derive(Args, Debug)]
struct PredictArgs {
    /// Fetch sample inputs from the backend first
    #[arg(long)]
    sample: bool,
    #[arg(long)]
    snp_risk_allele: Option<String>,
    #[arg(long)]
    p_value: Option<String>,
    #[arg(long)]
    or_beta: Option<String>,
    #[arg(long)]
    risk_allele_frequency: Option<String>,
    #[arg(long)]
    p_value_mlog: Option<String>,
    /// Show every significant risk factor instead of the top ones
    #[arg(long)]
    show_all: bool,
    /// Show the detail card of this SHAP feature
    #[arg(long)]
    select: Option<String>,
}

impl PredictArgs {
    fn overrides(&self) -> [(&'static str, Option<&String>); 5] {
        [
            ("snpRiskAllele", self.snp_risk_allele.as_ref()),
            ("pValue", self.p_value.as_ref()),
            ("orBeta", self.or_beta.as_ref()),
            ("riskAlleleFrequency", self.risk_allele_frequency.as_ref()),
            ("pValueMlog", self.p_value_mlog.as_ref()),
        ]
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("{} v{}", APP_NAME, APP_VERSION);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(cli)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match &cli.command {
        Command::Faq { query, more } => {
            let mut search = faq::new_search();
            let mut page = api::search_faq(&mut search, query.as_deref().unwrap_or(""));
            for _ in 0..*more {
                page = api::show_more_faq(&mut search);
            }
            if cli.json {
                return print_json(&page);
            }
            for item in &page.items {
                println!("Q: {}\nA: {}\n", item.question, item.answer);
            }
            if page.items.is_empty() {
                println!("No questions match \"{}\".", page.query);
            } else if page.can_show_more {
                println!("({} of {} shown, use --more to see more)", page.items.len(), page.match_count);
            }
            Ok(())
        }
        Command::Importance { select } => {
            let client = connect(&cli)?;
            let session = PredictSession::shared();
            session::load_importance(&session, &client).await;
            if session.read().importance().is_none() {
                let summary = api::get_prediction_summary(&session);
                return Err(summary.notification.unwrap_or_else(|| "Feature importance request failed".to_string()));
            }
            if let Some(feature) = select {
                api::select_importance_feature(&session, feature)?;
            }

            let panel = api::get_importance_view(&session);
            if cli.json {
                return print_json(&panel);
            }
            print_importance(&panel);
            Ok(())
        }
        Command::Predict(args) => {
            let client = connect(&cli)?;
            let session = PredictSession::shared();
            predict(&session, &client, args).await?;

            if cli.json {
                return print_json(&PredictReport {
                    summary: api::get_prediction_summary(&session),
                    shap: api::get_shap_view(&session),
                    breakdown: api::get_breakdown_view(&session),
                });
            }
            print_prediction(&session);
            Ok(())
        }
    }
}

fn connect(cli: &Cli) -> Result<PredictClient, String> {
    PredictClient::new(ClientConfig::new(&cli.backend_url, cli.timeout)).map_err(|e| e.to_string())
}

async fn predict(session: &SharedSession, client: &PredictClient, args: &PredictArgs) -> Result<(), String> {
    if args.sample {
        session::load_sample(session, client).await;
    }
    for (key, value) in args.overrides() {
        if let Some(value) = value {
            api::set_input(session, key, value)?;
        }
    }

    match session::submit(session, client).await {
        ApplyOutcome::Applied => {}
        ApplyOutcome::Stale => log::warn!("Prediction superseded by a newer request"),
        ApplyOutcome::Rejected | ApplyOutcome::Failed => {
            let summary = api::get_prediction_summary(session);
            return Err(summary.error.unwrap_or_else(|| "Prediction failed".to_string()));
        }
    }

    if args.show_all {
        if let Err(e) = api::toggle_breakdown(session) {
            log::warn!("--show-all ignored: {}", e);
        }
    }
    if let Some(feature) = &args.select {
        api::select_shap_feature(session, feature)?;
    }
    Ok(())
}

// ============================================================================
// OUTPUT
// ============================================================================

#[derive(Serialize)]
struct PredictReport {
    summary: api::PredictionSummary,
    shap: Panel<api::ShapPanel>,
    breakdown: Panel<api::BreakdownPanel>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", text);
    Ok(())
}

/// Text for a panel that has nothing to draw, if any
fn panel_notice<T>(title: &str, panel: &Panel<T>) -> Option<String> {
    match panel.status {
        PanelStatus::Ready => None,
        PanelStatus::Absent => Some(format!("{}: not available", title)),
        PanelStatus::Empty | PanelStatus::Invalid => Some(format!(
            "{}: {}",
            title,
            panel.message.as_deref().unwrap_or("unavailable")
        )),
    }
}

fn print_prediction(session: &SharedSession) {
    let summary = api::get_prediction_summary(session);
    if let Some(gauge) = &summary.gauge {
        println!("{} ({} risk)", gauge.headline, gauge.band);
        println!("{}\n", gauge.band.advice());
    }

    let shap = api::get_shap_view(session);
    match (&shap.data, panel_notice("SHAP Values", &shap)) {
        (Some(data), _) => {
            println!("SHAP Values");
            for bar in &data.bars {
                println!("  {:<24} {:>+9.4}  {}", bar.feature, bar.value, bar.direction.as_str());
            }
            if let Some(detail) = &data.detail {
                println!("\n  {}\n  {}\n  {}", detail.feature, detail.value_text, detail.summary);
            }
        }
        (None, Some(notice)) => println!("{}", notice),
        (None, None) => {}
    }
    println!();

    let breakdown = api::get_breakdown_view(session);
    match (&breakdown.data, panel_notice("Risk Factor Breakdown", &breakdown)) {
        (Some(data), _) => {
            println!("Risk Factor Breakdown (total risk {})", data.total_risk);
            for slice in &data.slices {
                println!("  {:<24} {:>5}", slice.name, slice.label);
            }
            println!();
            println!("  {:<24} {:>12} {:>12}", "Factor", "Contribution", "Relative");
            for row in &data.rows {
                println!("  {:<24} {:>12} {:>12}", row.name, row.contribution, row.relative_importance);
            }
        }
        (None, Some(notice)) => println!("{}", notice),
        (None, None) => {}
    }
}

fn print_importance(panel: &Panel<api::ImportancePanel>) {
    if let Some(notice) = panel_notice("Feature Importance", panel) {
        println!("{}", notice);
        return;
    }
    if let Some(data) = &panel.data {
        println!("Feature Importance");
        for bar in &data.bars {
            println!("  {:<24} {:.4}", bar.label, bar.importance);
        }
        if let Some(detail) = &data.detail {
            println!("\n  {}\n  {}\n  {}", detail.feature, detail.importance_text, detail.description);
        }
    }
}
