//! Attendance Recap - attendance grid and meal-allowance payroll from scanner exports.

use std::path::{Path, PathBuf};

use anyhow::Context;
use attendance_recap as app;
use clap::Parser;
use directories::ProjectDirs;
use eframe::egui;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use app::config::{AppConfig, ConfigLoadResult};
use app::models::DepartmentReport;
use app::ui::RecapApp;
use app::{export, import, report};

/// Attendance grid and payroll recap from scanner CSV exports.
#[derive(Parser)]
#[command(name = "attendance-recap")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Load configuration from this file
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    config: Option<PathBuf>,

    /// Process this export without opening the window
    #[arg(long, value_name = "CSV")]
    input: Option<PathBuf>,

    /// Department to report (default: first department in the file)
    #[arg(long, requires = "input")]
    department: Option<String>,

    /// Write the report to this Excel file
    #[arg(long, value_name = "XLSX", requires = "input")]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging();

    tracing::info!("Attendance Recap starting...");

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => {
            tracing::info!("Dev mode: loading config from current directory");
            PathBuf::from("config.toml")
        }
        (None, false) => AppConfig::default_path(),
    };
    tracing::info!("Config path: {:?}", config_path);

    let (config, config_warning) = load_config(&config_path);

    match cli.input {
        Some(input) => run_headless(&config, &input, cli.department.as_deref(), cli.export.as_deref()),
        None => run_gui(config, config_warning).map_err(|e| anyhow::anyhow!("GUI error: {e}")),
    }
}

/// Log to stderr and, when a data directory is available, to a daily file.
fn init_logging() -> Option<WorkerGuard> {
    let filter = || EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let appender = ProjectDirs::from("", "", "attendance-recap").and_then(|dirs| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("attendance-recap")
            .filename_suffix("log")
            .build(dirs.data_local_dir().join("logs"))
            .ok()
    });

    match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter())
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

/// Load config, falling back to defaults. Returns a warning for invalid files.
fn load_config(path: &Path) -> (AppConfig, Option<String>) {
    match AppConfig::try_load(path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing defaults");
            let config = AppConfig::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Could not write default config: {}", e);
            }
            (config, None)
        }
        ConfigLoadResult::Invalid(e) => {
            let err = app::AppError::from(e);
            tracing::warn!("{}, using defaults", err);
            (AppConfig::default(), Some(err.to_string()))
        }
    }
}

/// Build one department report from a file and print the payroll table.
fn run_headless(
    config: &AppConfig,
    input: &Path,
    department: Option<&str>,
    export_path: Option<&Path>,
) -> anyhow::Result<()> {
    let rows = import::read_export(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let departments = import::list_departments(&rows);
    let department = import::resolve_department(&departments, department)?;

    let batch = report::normalize_rows(&rows, &config.vocabulary);
    let report = report::build_department_report(&batch.events, &department, config);

    print_summary(&report, &config.payroll.currency_prefix);

    if let Some(path) = export_path {
        export::export_department_report(&report, &config.payroll.currency_prefix, path)
            .with_context(|| format!("Failed to export {}", path.display()))?;
        tracing::info!("Exported report to {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &DepartmentReport, prefix: &str) {
    println!("{} ({})", report.department, report.period_caption);
    if report.is_empty() {
        println!("No attendance for this department.");
        return;
    }
    println!(
        "{:<30} {:>7} {:>7} {:>5} {:>9} {:>6} {:>16} {:>16}",
        "Name", "Missing", "Partial", "Late", "Very Late", "Worked", "Deduction", "Net Pay"
    );
    for s in &report.summaries {
        println!(
            "{:<30} {:>7} {:>7} {:>5} {:>9} {:>6} {:>16} {:>16}",
            s.name,
            s.absence_display(),
            s.partial_display(),
            s.late_display(),
            s.very_late_display(),
            s.worked_days,
            s.deduction_display(prefix),
            s.net_pay_display(prefix),
        );
    }
}

/// Run the desktop viewer.
fn run_gui(config: AppConfig, config_warning: Option<String>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Attendance Recap")
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Attendance Recap",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(RecapApp::new(config, config_warning)))
        }),
    )
}
