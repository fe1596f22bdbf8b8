//! Reusable UI components
//!
//! Standalone widgets used by the conversion form.

use crate::catalog::Unit;
use crate::theme;
use eframe::egui;

/// Left-aligned form label with a fixed width, so rows line up
pub fn form_label(ui: &mut egui::Ui, text: &str) {
    ui.add_sized(
        egui::vec2(theme::FORM_LABEL_WIDTH, 20.0),
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}

/// Drop-down over a category's units. Returns true if the selection changed.
pub fn unit_picker(ui: &mut egui::Ui, id: &str, units: &[Unit], selected: &mut usize) -> bool {
    let current = units.get(*selected).map(|u| u.label).unwrap_or_default();
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .width(theme::PICKER_WIDTH)
        .selected_text(egui::RichText::new(current).size(theme::FONT_BODY))
        .show_ui(ui, |ui| {
            for (i, unit) in units.iter().enumerate() {
                if ui.selectable_label(i == *selected, unit.label).clicked() && i != *selected {
                    *selected = i;
                    changed = true;
                }
            }
        });
    changed
}

/// Small icon-only button with a hover hint
pub fn icon_button(ui: &mut egui::Ui, icon: &str, hint: &str) -> bool {
    let response = ui
        .add(
            egui::Button::new(egui::RichText::new(icon).size(theme::FONT_BODY))
                .fill(egui::Color32::TRANSPARENT)
                .corner_radius(theme::RADIUS_DEFAULT),
        )
        .on_hover_text(hint);
    response.clicked()
}
