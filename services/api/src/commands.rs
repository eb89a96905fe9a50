use careboard::config::AppConfig;
use careboard::error::AppError;
use careboard::patients::{ConfiguredPatientSource, DashboardView, PatientSource};
use careboard::readmission::{PredictionResult, Preset, ReadmissionEstimator};
use careboard::telemetry;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Example form to start from (high or low)
    #[arg(long, default_value = "high")]
    pub(crate) preset: String,
    /// Override a form field, e.g. `--set age=70`. Repeatable.
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = crate::infra::parse_assignment)]
    pub(crate) overrides: Vec<(String, String)>,
    /// Admission/discharge date used by the example (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the prediction as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PatientsArgs {
    /// Patient to highlight (defaults to DASHBOARD_FOCUS_PATIENT)
    #[arg(long)]
    pub(crate) focus: Option<String>,
    /// Print the composed dashboard as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs {
        preset,
        overrides,
        today,
        json,
    } = args;

    let preset: Preset = preset.parse()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut input = preset.input(today);
    for (field, value) in &overrides {
        input.apply_field(field, value)?;
    }

    let result = ReadmissionEstimator::standard().estimate(&input);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Prediction payload unavailable: {}", err),
        }
        return Ok(());
    }

    println!("Readmission estimate ({})", preset.label());
    if !overrides.is_empty() {
        let fields: Vec<&str> = overrides.iter().map(|(field, _)| field.as_str()).collect();
        println!("Overrides: {}", fields.join(", "));
    }
    render_prediction(&result);
    Ok(())
}

fn render_prediction(result: &PredictionResult) {
    let scores = &result.scores;
    println!("\nSeverity scores");
    println!("  SOFA            {:>4}", scores.sofa);
    println!("  SAPS-II         {:>4}", scores.saps_ii);
    println!("  APS-III         {:>4}", scores.aps_iii);
    println!("  mLODS           {:>4}", scores.mlods);
    println!("  SIRS            {:>4}", scores.sirs);
    println!("  Elixhauser SID30{:>4}", scores.elixhauser_sid30);

    println!("\nRisk factors ({} of {})", result.risk_score, result.risk_factors.len());
    for finding in &result.risk_factors {
        let mark = if finding.present { "x" } else { " " };
        println!("  [{}] {}", mark, finding.label);
    }

    println!("\n{}", result.headline());
    for paragraph in result.paragraphs() {
        println!("\n{}", paragraph);
    }
}

pub(crate) async fn run_patients(args: PatientsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let focus = args
        .focus
        .unwrap_or_else(|| config.dashboard.focus_patient.clone());
    let source = ConfiguredPatientSource::from_config(&config.dashboard);
    let patients = source.fetch_all().await?;
    let view = DashboardView::compose(&patients, &focus);

    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Dashboard payload unavailable: {}", err),
        }
        return Ok(());
    }

    render_dashboard(&view, &source.describe());
    Ok(())
}

fn render_dashboard(view: &DashboardView, source: &str) {
    println!("Patients ({} from {})", view.roster.len(), source);
    for entry in &view.roster {
        let marker = if entry.is_active { ">" } else { " " };
        println!("{} {} ({}, {})", marker, entry.name, entry.gender, entry.age);
    }

    let Some(profile) = &view.profile else {
        println!("\nNo patient matches '{}'", view.focus_patient);
        return;
    };

    println!("\n{}", profile.profile.name);
    if let Some(date_of_birth) = &profile.date_of_birth_display {
        println!("  Date of birth: {}", date_of_birth);
    }
    println!("  Contact: {}", profile.profile.phone_number);
    println!("  Emergency contact: {}", profile.profile.emergency_contact);
    println!("  Insurance: {}", profile.profile.insurance_type);

    let pressure = &view.vitals.blood_pressure;
    if let (Some(systolic), Some(diastolic)) =
        (pressure.systolic_average, pressure.diastolic_average)
    {
        println!("  Blood pressure (avg): {}/{}", systolic, diastolic);
    }
    for card in &view.vitals.cards {
        match card.value {
            Some(value) => println!(
                "  {}: {} ({})",
                card.title,
                value,
                card.levels.as_deref().unwrap_or("n/a")
            ),
            None => println!("  {}: n/a", card.title),
        }
    }

    if !view.diagnostics.is_empty() {
        println!("\nDiagnostics");
        for diagnostic in &view.diagnostics {
            println!("  - {}: {}", diagnostic.name, diagnostic.status);
        }
    }
    if !view.lab_results.is_empty() {
        println!("\nLab results: {}", view.lab_results.join(", "));
    }
}
