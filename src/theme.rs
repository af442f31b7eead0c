//! Centralized theme constants for UPI Pay Desk
//! All colors, sizes, and styling should reference these constants

use eframe::egui;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x14, 0x14, 0x18); // input field background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x0f, 0x1a, 0x19); // subtle teal hover
pub const BG_MODAL: Color32 = Color32::from_rgb(0x12, 0x12, 0x14); // popup and notice dialogs

// =============================================================================
// COLORS - Accent (Teal)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(0x04, 0x2f, 0x2e); // text on accent fill

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BORDER_FOCUS: Color32 = ACCENT;

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_PENDING: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa); // blue-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// COLORS - Toggle
// =============================================================================
pub const TOGGLE_SELECTED: Color32 = Color32::from_rgb(0x11, 0x5e, 0x59); // teal-800
pub const TOGGLE_UNSELECTED: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const TOGGLE_GLOW: Color32 = Color32::from_rgb(0x0f, 0x76, 0x6e);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x2d, 0xd4, 0xbf); // teal-400
pub const BTN_SUCCESS: Color32 = Color32::from_rgb(0x16, 0xa3, 0x4a); // green-600
pub const BTN_DANGER: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CARD_WIDTH: f32 = 420.0;
pub const POPUP_WIDTH: f32 = 340.0;
pub const BUTTON_HEIGHT: f32 = 28.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 40.0;
pub const APP_TILE_SIZE: f32 = 72.0;
pub const ADDRESS_BAR_HEIGHT: f32 = 36.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_LARGE: f32 = 8.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 24.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let stroke = |color: Color32| egui::Stroke::new(STROKE_DEFAULT, color);
    let widgets = egui::style::Widgets {
        noninteractive: widget_state(BG_ELEVATED, BG_ELEVATED, BORDER_SUBTLE, TEXT_SECONDARY),
        inactive: widget_state(BG_INPUT, BG_SURFACE, BORDER_DEFAULT, TEXT_SECONDARY),
        hovered: egui::style::WidgetVisuals {
            fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
            ..widget_state(BG_HOVER, TOGGLE_UNSELECTED, TOGGLE_GLOW, TEXT_PRIMARY)
        },
        active: egui::style::WidgetVisuals {
            expansion: -1.0,
            ..widget_state(TOGGLE_SELECTED, TOGGLE_SELECTED, BORDER_FOCUS, TEXT_PRIMARY)
        },
        open: widget_state(BG_SURFACE, BG_ELEVATED, TOGGLE_GLOW, TEXT_PRIMARY),
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_MODAL,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: TOGGLE_SELECTED,
            stroke: stroke(ACCENT),
        },
        widgets,
        text_cursor: egui::style::TextCursorStyle {
            stroke: egui::Stroke::new(2.0, ACCENT),
            ..Default::default()
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: stroke(BORDER_SUBTLE),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        window_shadow: egui::epaint::Shadow {
            offset: [0, 8],
            blur: 24,
            spread: 0,
            color: Color32::from_black_alpha(140),
        },
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

/// One widget state: fills, 1px border, text colour
fn widget_state(bg: Color32, weak_bg: Color32, border: Color32, fg: Color32) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: weak_bg,
        bg_stroke: egui::Stroke::new(STROKE_DEFAULT, border),
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    }
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Centered page card (form and result pages)
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XXL as i8))
}

/// Inset panel inside a card (payment details, QR box)
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_MODAL)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent teal button (primary actions like Confirm & Pay)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_TEXT).strong())
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

pub fn button_success(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_SUCCESS)
        .corner_radius(RADIUS_DEFAULT)
}

pub fn button_danger(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_DANGER)
        .corner_radius(RADIUS_DEFAULT)
}

// =============================================================================
// HELPER - Segmented toggle (pill-style)
// =============================================================================

/// Two-option segmented toggle. `left_active` is the current selection.
/// Returns true if the selection changed.
/// Container (2px) -> Glow (1px) -> Active fill
pub fn segmented_toggle(
    ui: &mut egui::Ui,
    left_label: &str,
    right_label: &str,
    left_active: &mut bool,
) -> bool {
    let mut changed = false;
    let height = 29.0;
    let font = egui::FontId::proportional(12.0);
    let rounding = 4.0;
    let pad = 14.0;

    let text_width = |label: &str| {
        ui.fonts(|f| f.layout_no_wrap(label.to_string(), font.clone(), TEXT_PRIMARY).rect.width())
    };
    let left_width = text_width(left_label) + pad * 2.0 + 3.0;
    let right_width = text_width(right_label) + pad * 2.0 + 3.0;

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(left_width + right_width, height),
        egui::Sense::click(),
    );
    let painter = ui.painter();

    // Layer 1: Container background
    painter.rect_filled(rect, rounding + 2.0, TOGGLE_UNSELECTED);

    let left_rect =
        egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + left_width, rect.max.y));
    let right_rect =
        egui::Rect::from_min_max(egui::pos2(rect.min.x + left_width, rect.min.y), rect.max);

    // 2px on outer edges, 1px on the inner edge
    let glow_of = |r: egui::Rect, is_left: bool| {
        let (l, rr) = if is_left { (2.0, 1.0) } else { (1.0, 2.0) };
        egui::Rect::from_min_max(
            egui::pos2(r.min.x + l, r.min.y + 2.0),
            egui::pos2(r.max.x - rr, r.max.y - 2.0),
        )
    };
    let left_inner = glow_of(left_rect, true).shrink(1.0);
    let right_inner = glow_of(right_rect, false).shrink(1.0);

    // Layer 2 + 3: glow, then active fill inset 1px
    let glow_rect = if *left_active { glow_of(left_rect, true) } else { glow_of(right_rect, false) };
    painter.rect_filled(glow_rect, rounding, TOGGLE_GLOW);
    painter.rect_filled(glow_rect.shrink(1.0), rounding - 1.0, TOGGLE_SELECTED);

    let (left_color, right_color) = if *left_active {
        (TEXT_PRIMARY, TEXT_MUTED)
    } else {
        (TEXT_MUTED, TEXT_PRIMARY)
    };
    painter.text(left_inner.center(), egui::Align2::CENTER_CENTER, left_label, font.clone(), left_color);
    painter.text(right_inner.center(), egui::Align2::CENTER_CENTER, right_label, font, right_color);

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let clicked_left = pos.x < rect.min.x + left_width;
            if clicked_left != *left_active {
                *left_active = clicked_left;
                changed = true;
            }
        }
    }
    changed
}
