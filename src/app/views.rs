//! View rendering (header, conversion form, display settings)

use super::App;
use crate::catalog::Category;
use crate::constants::{APP_NAME, DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::format::format_value;
use crate::theme;
use crate::ui::components::{form_label, icon_button, unit_picker};
use eframe::egui;

impl App {
    /// Title bar row: app name on the left, settings toggle on the right
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(APP_NAME)
                        .size(theme::FONT_TITLE)
                        .color(theme::TEXT_PRIMARY)
                        .strong(),
                )
                .selectable(false),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if icon_button(ui, egui_phosphor::regular::GEAR_SIX, "Display settings") {
                    self.show_settings = !self.show_settings;
                }
            });
        });
    }

    pub(crate) fn render_form(&mut self, ui: &mut egui::Ui) {
        // Category picker
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        let mut selected = self.form.category().index();
        if theme::segmented_picker(ui, &names, &mut selected) {
            if let Some(c) = Category::from_index(selected) {
                self.form.select_category(c);
                self.focus_input = true;
            }
        }
        ui.add_space(theme::SPACING_LG);

        let units = self.form.category().units();

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Convert from
            ui.horizontal(|ui| {
                form_label(ui, "Convert from");
                let mut from = self.form.from_unit();
                if unit_picker(ui, "convert_from", units, &mut from) {
                    self.form.select_from(from);
                    self.focus_input = true;
                }
            });

            // Value
            let hint = self.form.input_hint();
            ui.horizontal(|ui| {
                form_label(ui, "Value");
                theme::input_frame().show(ui, |ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.form.input)
                            .hint_text(hint)
                            .frame(false)
                            .font(egui::FontId::proportional(theme::FONT_BODY))
                            .desired_width(theme::PICKER_WIDTH - 16.0),
                    );
                    if self.focus_input {
                        self.focus_input = false;
                        response.request_focus();
                    }
                });
            });

            // Convert to
            ui.horizontal(|ui| {
                form_label(ui, "Convert to");
                let mut to = self.form.to_unit();
                if unit_picker(ui, "convert_to", units, &mut to) {
                    self.form.select_to(to);
                }
                if icon_button(ui, egui_phosphor::regular::ARROWS_DOWN_UP, "Swap units") {
                    self.form.swap_units();
                }
            });
        });

        ui.add_space(theme::SPACING_XL);

        // Result
        let summary = self.form.summary();
        self.note_error(&summary);
        match summary {
            Ok(text) => {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(text)
                            .size(theme::FONT_RESULT)
                            .color(theme::ACCENT),
                    )
                    .wrap(),
                );
            }
            Err(e) => {
                ui.label(
                    egui::RichText::new(format!("{} {}", egui_phosphor::regular::WARNING, e))
                        .size(theme::FONT_BODY)
                        .color(theme::STATUS_ERROR),
                );
            }
        }
    }

    /// Decimal-places control shown under the form when toggled from the header
    pub(crate) fn render_settings(&mut self, ui: &mut egui::Ui) {
        if !self.show_settings {
            return;
        }
        ui.add_space(theme::SPACING_MD);
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                form_label(ui, "Decimal places");
                let decimals = self.form.decimals();
                if ui
                    .add_enabled(decimals > 0, theme::button(egui_phosphor::regular::MINUS))
                    .clicked()
                {
                    self.form.set_decimals(decimals - 1);
                }
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(decimals.to_string())
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(theme::SPACING_SM);
                if ui
                    .add_enabled(decimals < MAX_DECIMALS, theme::button(egui_phosphor::regular::PLUS))
                    .clicked()
                {
                    self.form.set_decimals(decimals + 1);
                }
                if decimals != DEFAULT_DECIMALS && ui.add(theme::button("Reset")).clicked() {
                    self.form.set_decimals(DEFAULT_DECIMALS);
                }
            });
            ui.label(
                egui::RichText::new(format!("Example: {}", format_value(std::f64::consts::PI, self.form.decimals())))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            );
        });
    }
}
