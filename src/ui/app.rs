//! Main application state and window layout.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use eframe::egui::{self, Align, Layout};
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::Result;
use crate::export;
use crate::import;
use crate::models::DepartmentReport;
use crate::report::{self, NormalizedBatch};

use super::components::colors;
use super::recap_panel;

/// Message shown in the status bar.
#[derive(Debug, Clone)]
pub enum StatusMessage {
    Info(String),
    Success(String),
    Error(String),
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::Info("Open an attendance export to begin".to_string())
    }
}

/// Export file currently loaded, already normalized.
pub struct LoadedExport {
    pub path: PathBuf,
    pub departments: Vec<String>,
    pub batch: NormalizedBatch,
}

/// Desktop viewer for attendance recaps.
pub struct RecapApp {
    pub config: AppConfig,
    pub source: Option<LoadedExport>,
    pub selected_department: Option<String>,
    pub report: Option<DepartmentReport>,
    pub status: StatusMessage,
}

impl RecapApp {
    /// Create the app, optionally with a warning about the configuration.
    pub fn new(config: AppConfig, config_warning: Option<String>) -> Self {
        let status = match config_warning {
            Some(warning) => StatusMessage::Error(format!("Config ignored, using defaults: {warning}")),
            None => StatusMessage::default(),
        };

        Self {
            config,
            source: None,
            selected_department: None,
            report: None,
            status,
        }
    }

    /// Ask for an export file and load it.
    pub fn open_file(&mut self) {
        if let Some(path) = export::show_open_dialog() {
            self.load_file(&path);
        }
    }

    /// Reload the current file from disk.
    pub fn reload_file(&mut self) {
        if let Some(path) = self.source.as_ref().map(|s| s.path.clone()) {
            self.load_file(&path);
        }
    }

    /// Load an export, replacing all previous state.
    pub fn load_file(&mut self, path: &Path) {
        if let Err(e) = self.try_load_file(path) {
            error!("Failed to load {}: {e}", path.display());
            self.status = StatusMessage::Error(format!("Failed to load file: {e}"));
        }
    }

    fn try_load_file(&mut self, path: &Path) -> Result<()> {
        let rows = import::read_export(path)?;
        let departments = import::list_departments(&rows);
        let batch = report::normalize_rows(&rows, &self.config.vocabulary);

        let skipped = batch.skipped.len();
        let events = batch.events.len();

        // Keep the current department when the new file has it
        let selected = self
            .selected_department
            .take()
            .filter(|d| departments.contains(d))
            .or_else(|| departments.first().cloned());

        self.source = Some(LoadedExport {
            path: path.to_path_buf(),
            departments,
            batch,
        });
        self.selected_department = selected;
        self.regenerate();

        self.status = if skipped > 0 {
            StatusMessage::Info(format!("Loaded {events} events, skipped {skipped} malformed rows"))
        } else {
            StatusMessage::Success(format!("Loaded {events} events"))
        };
        Ok(())
    }

    /// Switch the displayed department.
    pub fn select_department(&mut self, department: &str) {
        self.selected_department = Some(department.to_string());
        self.regenerate();
    }

    /// Change the pay period and rebuild the report.
    pub fn set_period(&mut self, start: NaiveDate, end: NaiveDate) {
        self.config.period.start = start;
        self.config.period.end = end;
        self.regenerate();
    }

    /// Rebuild the report from the loaded events.
    pub fn regenerate(&mut self) {
        self.report = match (&self.source, &self.selected_department) {
            (Some(source), Some(department)) => Some(report::build_department_report(
                &source.batch.events,
                department,
                &self.config,
            )),
            _ => None,
        };
    }

    /// Export the displayed report to Excel.
    pub fn export_report(&mut self) {
        let Some(report) = &self.report else {
            self.status = StatusMessage::Error("Nothing to export".to_string());
            return;
        };

        let default_name = export::generate_export_filename(&format!("recap_{}", report.department));
        let Some(path) = export::show_save_dialog(&default_name) else {
            return;
        };

        match export::export_department_report(report, &self.config.payroll.currency_prefix, &path) {
            Ok(()) => {
                info!("Exported report to {}", path.display());
                self.status = StatusMessage::Success(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                error!("Export failed: {e}");
                self.status = StatusMessage::Error(e.to_string());
            }
        }
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (color, text) = match &self.status {
                        StatusMessage::Info(msg) => (colors::NEUTRAL, msg),
                        StatusMessage::Success(msg) => (colors::SUCCESS, msg),
                        StatusMessage::Error(msg) => (colors::ERROR, msg),
                    };
                    ui.colored_label(color, text);

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(source) = &self.source {
                            let skipped = source.batch.skipped.len();
                            if skipped > 0 {
                                ui.colored_label(colors::WARNING, format!("{skipped} rows skipped"))
                                    .on_hover_text(skipped_tooltip(&source.batch));
                            }
                            ui.label(source.path.display().to_string());
                        }
                    });
                });
            });
    }
}

/// First few skipped lines with their reasons.
fn skipped_tooltip(batch: &NormalizedBatch) -> String {
    const MAX_LINES: usize = 20;

    let mut lines: Vec<String> = batch
        .skipped
        .iter()
        .take(MAX_LINES)
        .map(|s| format!("Line {}: {}", s.line, s.reason))
        .collect();
    if batch.skipped.len() > MAX_LINES {
        lines.push(format!("... and {} more", batch.skipped.len() - MAX_LINES));
    }
    lines.join("\n")
}

impl eframe::App for RecapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            recap_panel::show(self, ui);
        });
    }
}
