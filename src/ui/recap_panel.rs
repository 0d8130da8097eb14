//! Attendance grid and payroll summary panel.

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, FILE_XLS, FOLDER_OPEN};

use super::app::RecapApp;
use super::components::{class_fill, class_legend, panel_header, primary_button_with_icon, styled_button_with_icon};
use crate::models::DepartmentReport;

/// Show the recap panel.
pub fn show(app: &mut RecapApp, ui: &mut Ui) {
    let subtitle = app.report.as_ref().map(|r| r.period_caption.clone());
    panel_header(ui, "Attendance Recap", subtitle.as_deref());

    // File and department controls
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, FOLDER_OPEN, "Open Export").clicked() {
            app.open_file();
        }

        if app.source.is_some() && styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Reload").clicked() {
            app.reload_file();
        }

        ui.add_space(20.0);

        ui.label("Department:");
        let departments = app
            .source
            .as_ref()
            .map(|s| s.departments.clone())
            .unwrap_or_default();
        let mut chosen = None;
        egui::ComboBox::from_id_salt("department_selector")
            .width(200.0)
            .selected_text(app.selected_department.as_deref().unwrap_or("-"))
            .show_ui(ui, |ui| {
                for dept in &departments {
                    let selected = app.selected_department.as_deref() == Some(dept.as_str());
                    if ui.selectable_label(selected, dept).clicked() {
                        chosen = Some(dept.clone());
                    }
                }
            });
        if let Some(dept) = chosen {
            app.select_department(&dept);
        }

        ui.add_space(20.0);

        if ui
            .add_enabled(app.report.is_some(), egui::Button::new(format!("{FILE_XLS} Export Excel")))
            .clicked()
        {
            app.export_report();
        }
    });

    ui.add_space(8.0);

    // Pay period
    ui.horizontal(|ui| {
        let mut start = app.config.period.start;
        let mut end = app.config.period.end;

        ui.label("Period from:");
        let start_changed = ui.add(DatePickerButton::new(&mut start).id_salt("period_start")).changed();
        ui.label("to:");
        let end_changed = ui.add(DatePickerButton::new(&mut end).id_salt("period_end")).changed();

        if start_changed || end_changed {
            app.set_period(start, end);
        }

        ui.add_space(20.0);
        class_legend(ui);
    });

    ui.add_space(10.0);
    ui.separator();

    let Some(report) = &app.report else {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("No data").size(18.0).weak());
        });
        return;
    };

    let prefix = app.config.payroll.currency_prefix.clone();
    let available = ui.available_height();

    ui.label(RichText::new("Attendance").strong());
    ScrollArea::both()
        .id_salt("attendance_scroll")
        .max_height(available * 0.6)
        .show(ui, |ui| show_attendance_grid(report, ui));

    ui.add_space(10.0);
    ui.label(RichText::new("Payroll").strong());
    ScrollArea::both()
        .id_salt("payroll_scroll")
        .show(ui, |ui| show_payroll_table(report, &prefix, ui));
}

fn show_attendance_grid(report: &DepartmentReport, ui: &mut Ui) {
    egui::Grid::new("attendance_grid")
        .num_columns(report.columns.len() + 1)
        .striped(true)
        .min_col_width(44.0)
        .spacing([4.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Name");
            for label in &report.columns {
                ui.strong(label.to_string());
            }
            ui.end_row();

            for row in &report.rows {
                ui.label(&row.name);
                for cell in &row.cells {
                    let mut text = RichText::new(cell.text()).monospace().size(11.0);
                    if let Some(fill) = class_fill(cell.class) {
                        text = text.background_color(fill).color(Color32::BLACK);
                    }
                    ui.label(text).on_hover_text(cell.class.name());
                }
                ui.end_row();
            }

            if report.is_empty() {
                ui.label("No attendance for this department.");
                ui.end_row();
            }
        });
}

fn show_payroll_table(report: &DepartmentReport, prefix: &str, ui: &mut Ui) {
    egui::Grid::new("payroll_grid")
        .num_columns(9)
        .striped(true)
        .min_col_width(70.0)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            // Header
            ui.strong("Department");
            ui.strong("Name");
            ui.strong("Missing");
            ui.strong("Partial");
            ui.strong("Late");
            ui.strong("Very Late");
            ui.strong("Days Worked");
            ui.strong("Deduction");
            ui.strong("Net Pay");
            ui.end_row();

            for summary in &report.summaries {
                ui.label(&summary.department);
                ui.label(&summary.name);
                ui.label(summary.absence_display());
                ui.label(summary.partial_display());
                ui.label(summary.late_display());
                ui.label(summary.very_late_display());
                ui.label(summary.worked_days.to_string());
                ui.label(summary.deduction_display(prefix));
                ui.label(summary.net_pay_display(prefix));
                ui.end_row();
            }
        });
}
