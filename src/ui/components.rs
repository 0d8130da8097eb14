//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Ui};

use crate::export::class_color;
use crate::models::DayClass;

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const PRIMARY: Color32 = Color32::from_rgb(0x44, 0x72, 0xC4);
}

/// Render a panel header with title and optional subtitle.
pub fn panel_header(ui: &mut Ui, title: &str, subtitle: Option<&str>) {
    ui.heading(RichText::new(title).size(24.0));
    if let Some(subtitle) = subtitle {
        ui.label(RichText::new(subtitle).weak());
    }
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Button with a leading phosphor icon.
pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    ui.button(RichText::new(format!("{icon} {text}")).size(14.0))
}

/// Filled accent button with a leading phosphor icon.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    ui.add(
        egui::Button::new(RichText::new(format!("{icon} {text}")).size(14.0).color(Color32::WHITE))
            .fill(colors::PRIMARY),
    )
}

/// Background color of a grid cell, `None` for on-time days.
pub fn class_fill(class: DayClass) -> Option<Color32> {
    class_color(class).map(|rgb| {
        let [_, r, g, b] = rgb.to_be_bytes();
        Color32::from_rgb(r, g, b)
    })
}

/// Small colored legend of the day classes.
pub fn class_legend(ui: &mut Ui) {
    ui.horizontal(|ui| {
        for class in [
            DayClass::NoData,
            DayClass::PartialData,
            DayClass::OnTimeLate,
            DayClass::VeryLate,
        ] {
            if let Some(fill) = class_fill(class) {
                ui.label(
                    RichText::new(format!("  {}  ", class.name()))
                        .background_color(fill)
                        .color(Color32::BLACK),
                );
            }
        }
    });
}
