//! App module - contains the main application state and logic

mod views;

use crate::catalog::{Category, Unit};
use crate::constants::MAX_DECIMALS;
use crate::converter::{convert_indexed, ConversionError};
use crate::format;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, warn};

// ============================================================================
// FORM STATE
// ============================================================================

/// Everything the conversion form shows. Indices always point into the
/// selected category's unit list.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    category: Category,
    from_unit: usize,
    to_unit: usize,
    pub input: String,
    decimals: usize,
}

impl FormState {
    /// Build from saved settings; settings are sanitized so indices are valid.
    pub fn from_settings(settings: &Settings) -> Self {
        let settings = settings.clone().sanitized();
        Self {
            category: Category::from_index(settings.category).unwrap_or(Category::ALL[0]),
            from_unit: settings.from_unit,
            to_unit: settings.to_unit,
            input: String::new(),
            decimals: settings.decimals,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> usize {
        self.from_unit
    }

    pub fn to_unit(&self) -> usize {
        self.to_unit
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// Switch category, clamping unit indices into the new unit list
    pub fn select_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        let last = category.units().len() - 1;
        self.category = category;
        self.from_unit = self.from_unit.min(last);
        self.to_unit = self.to_unit.min(last);
        debug!(category = category.name(), from = self.from_unit, to = self.to_unit, "Category selected");
    }

    /// Returns false (and leaves the selection alone) for an index outside the category
    pub fn select_from(&mut self, index: usize) -> bool {
        if index < self.category.units().len() {
            self.from_unit = index;
            true
        } else {
            false
        }
    }

    pub fn select_to(&mut self, index: usize) -> bool {
        if index < self.category.units().len() {
            self.to_unit = index;
            true
        } else {
            false
        }
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
    }

    pub fn set_decimals(&mut self, decimals: usize) {
        self.decimals = decimals.min(MAX_DECIMALS);
    }

    pub fn source(&self) -> &'static Unit {
        self.category.unit(self.from_unit).unwrap_or(self.category.base_unit())
    }

    pub fn target(&self) -> &'static Unit {
        self.category.unit(self.to_unit).unwrap_or(self.category.base_unit())
    }

    /// Input text as a number, 0 when unparseable
    pub fn input_value(&self) -> f64 {
        format::parse_input(&self.input)
    }

    pub fn output(&self) -> Result<f64, ConversionError> {
        convert_indexed(self.input_value(), self.category.index(), self.from_unit, self.to_unit)
    }

    /// The sentence under the form, or the conversion fault
    pub fn summary(&self) -> Result<String, ConversionError> {
        let output = self.output()?;
        Ok(format::summary(
            self.input_value(),
            self.source(),
            output,
            self.target(),
            self.decimals,
        ))
    }

    pub fn input_hint(&self) -> String {
        format::input_hint(self.source())
    }

    fn write_to(&self, settings: &mut Settings) {
        settings.category = self.category.index();
        settings.from_unit = self.from_unit;
        settings.to_unit = self.to_unit;
        settings.decimals = self.decimals;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) form: FormState,
    pub(crate) show_settings: bool,
    pub(crate) focus_input: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    // Last reported conversion fault, so it is logged once rather than every frame
    pub(crate) last_error: Option<ConversionError>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self {
            form: FormState::from_settings(&settings),
            show_settings: false,
            focus_input: true,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            last_error: None,
        }
    }

    pub fn save_settings(&self) {
        let mut settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..Settings::default()
        };
        self.form.write_to(&mut settings);
        settings.save(&self.data_dir);
    }

    /// Log a conversion fault the first time it shows up
    pub(crate) fn note_error(&mut self, result: &Result<String, ConversionError>) {
        match result {
            Err(e) if self.last_error.as_ref() != Some(e) => {
                warn!(error = %e, "Conversion failed");
                self.last_error = Some(e.clone());
            }
            Err(_) => {}
            Ok(_) => self.last_error = None,
        }
    }
}
