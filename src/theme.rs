//! Look and feel for the converter window
//! Slate surfaces with an amber accent; every widget reads its colors from here

use egui::Color32;

// =============================================================================
// PALETTE
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a); // slate-900
pub const BG_CARD: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BG_INPUT: Color32 = Color32::from_rgb(0x0b, 0x11, 0x20);
pub const BG_POPUP: Color32 = Color32::from_rgb(0x1a, 0x24, 0x36);
pub const BG_WIDGET_HOVER: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700

pub const ACCENT: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400
pub const ACCENT_DEEP: Color32 = Color32::from_rgb(0x78, 0x35, 0x0f); // amber-900

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xf8, 0xfa, 0xfc);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe1); // slate-300
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500

pub const BORDER: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// Segmented category picker
pub const TOGGLE_SELECTED: Color32 = ACCENT_DEEP;
pub const TOGGLE_UNSELECTED: Color32 = BG_CARD;
pub const TOGGLE_GLOW: Color32 = Color32::from_rgb(0xb4, 0x53, 0x09); // amber-700

// =============================================================================
// TYPOGRAPHY
// =============================================================================
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_RESULT: f32 = 22.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const SEGMENT_HEIGHT: f32 = 30.0;
pub const FORM_LABEL_WIDTH: f32 = 110.0;
pub const PICKER_WIDTH: f32 = 180.0;
pub const RADIUS_DEFAULT: f32 = 5.0;
pub const RADIUS_CARD: u8 = 10;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

/// Dark visuals tuned for the form's widgets: combo boxes and their popup,
/// the value text field, and plain buttons.
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_POPUP; // combo box popup
    visuals.window_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.extreme_bg_color = BG_INPUT; // text edit background
    visuals.text_cursor.stroke = egui::Stroke::new(2.0, ACCENT);
    visuals.selection.bg_fill = ACCENT_DEEP;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    let widgets = &mut visuals.widgets;
    widgets.inactive.weak_bg_fill = BG_CARD;
    widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    widgets.inactive.fg_stroke.color = TEXT_SECONDARY;
    widgets.hovered.weak_bg_fill = BG_WIDGET_HOVER;
    widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    widgets.open.weak_bg_fill = BG_WIDGET_HOVER;
    for state in [
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        state.corner_radius = RADIUS_DEFAULT.into();
    }

    ctx.set_visuals(visuals);
    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.combo_width = PICKER_WIDTH;
    });
}

// =============================================================================
// HELPER - Frames and buttons
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(egui::CornerRadius::same(RADIUS_CARD))
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Bordered frame around the text input
pub fn input_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 6))
}

/// Flat button in the card color
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BG_WIDGET_HOVER)
        .corner_radius(RADIUS_DEFAULT)
}

// =============================================================================
// HELPER - Segmented picker (pill-style)
// =============================================================================

/// Renders a segmented picker across `labels`, splitting the available width
/// evenly. Returns true if the selection changed.
///
/// Container -> Glow (1px) -> Active fill, like a two-way toggle but with any
/// number of segments.
pub fn segmented_picker(ui: &mut egui::Ui, labels: &[&str], selected: &mut usize) -> bool {
    if labels.is_empty() {
        return false;
    }
    let mut changed = false;
    let font_size = FONT_SMALL;
    let rounding = RADIUS_DEFAULT;

    let total_width = ui.available_width();
    let segment_width = total_width / labels.len() as f32;

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(total_width, SEGMENT_HEIGHT), egui::Sense::click());
    let painter = ui.painter();

    // Layer 1: Container background
    painter.rect_filled(rect, rounding + 2.0, TOGGLE_UNSELECTED);

    let segment_rect = |i: usize| {
        let left = rect.min.x + segment_width * i as f32;
        egui::Rect::from_min_max(
            egui::pos2(left, rect.min.y),
            egui::pos2(left + segment_width, rect.max.y),
        )
    };

    // Layer 2 + 3: Glow then active fill, inset 2px from the container
    let active = (*selected).min(labels.len() - 1);
    let glow_rect = segment_rect(active).shrink(2.0);
    painter.rect_filled(glow_rect, rounding, TOGGLE_GLOW);
    painter.rect_filled(glow_rect.shrink(1.0), rounding - 1.0, TOGGLE_SELECTED);

    for (i, label) in labels.iter().enumerate() {
        let color = if i == active { TEXT_PRIMARY } else { TEXT_MUTED };
        painter.text(
            segment_rect(i).center(),
            egui::Align2::CENTER_CENTER,
            *label,
            egui::FontId::proportional(font_size),
            color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let clicked = segment_at(pos.x - rect.min.x, segment_width, labels.len());
            if clicked != *selected {
                *selected = clicked;
                changed = true;
            }
        }
    }
    changed
}

/// Segment index under a pointer `offset` from the picker's left edge
fn segment_at(offset: f32, segment_width: f32, count: usize) -> usize {
    if offset <= 0.0 || segment_width <= 0.0 {
        return 0;
    }
    ((offset / segment_width) as usize).min(count - 1)
}
