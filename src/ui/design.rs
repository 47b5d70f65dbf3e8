use eframe::egui;

/// Colors and frames shared by the form widgets
pub struct DesignSystem;

impl DesignSystem {
    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(14, 17, 23);
    pub const BG_SIDEBAR: egui::Color32 = egui::Color32::from_rgb(22, 27, 34);
    pub const BG_TITLE: egui::Color32 = egui::Color32::BLACK;

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 230, 118);
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 23, 68);
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(41, 121, 255);
    pub const CELEBRATION: egui::Color32 = egui::Color32::from_rgb(255, 145, 0);

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 246, 252);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(160);

    pub const ROUNDING_MEDIUM: f32 = 8.0;
    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;

    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_WINDOW;
        visuals
    }

    /// Black title bar, white centered heading
    pub fn title_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_TITLE)
            .inner_margin(10_i8)
    }

    /// Tinted box used for status messages (success, error, info)
    pub fn status_frame(color: egui::Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(color.linear_multiply(0.15))
            .stroke(egui::Stroke::new(1.0, color))
            .corner_radius(Self::ROUNDING_MEDIUM)
            .inner_margin(Self::SPACING_SMALL as i8)
    }
}
