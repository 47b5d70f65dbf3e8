//! Desktop form built on eframe

use crate::app::AppState;
use crate::banner::BannerStatus;
use crate::error::StartupError;
use crate::shell::form::{self, Control, FormState};
use crate::shell::{Feedback, FormSession, Tone};
use crate::types::request::Coded;
use crate::ui::design::DesignSystem;
use eframe::egui;
use std::time::Instant;

/// The prediction form
pub struct FraudFormApp {
    session: FormSession,
    banner: BannerStatus,
}

impl FraudFormApp {
    pub fn new(state: AppState) -> Self {
        let session = FormSession::new(state.service.clone(), state.config.shell.clone());
        Self {
            session,
            banner: state.banner,
        }
    }

    fn sidebar(&mut self, ui: &mut egui::Ui) -> bool {
        ui.heading(form::SIDEBAR_TITLE);
        ui.label(egui::RichText::new(form::SIDEBAR_SUBTITLE).color(DesignSystem::TEXT_SECONDARY));
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        let mut state: FormState = *self.session.form();

        number_input(ui, "TransactionAmt", &mut state.transaction_amt);
        number_input(ui, "card1", &mut state.card1);
        number_input(ui, "card2", &mut state.card2);
        radio_input(ui, "card4", &mut state.card4);
        radio_input(ui, "card6", &mut state.card6);
        slider_input(ui, "addr1", &mut state.addr1);
        slider_input(ui, "addr2", &mut state.addr2);
        select_input(ui, "P_emaildomain", &mut state.p_emaildomain);
        select_input(ui, "ProductCD", &mut state.product_cd);
        radio_input(ui, "DeviceType", &mut state.device_type);

        self.session.update_form(state);

        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.button(form::PREDICT_BUTTON).clicked()
    }

    fn banner(&self, ui: &mut egui::Ui) {
        match &self.banner {
            BannerStatus::Loaded(banner) => {
                ui.label(
                    egui::RichText::new(&banner.caption)
                        .italics()
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            }
            BannerStatus::Unavailable(e) => status_box(ui, DesignSystem::DANGER, &e.to_string()),
        }
    }
}

impl eframe::App for FraudFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        title_bar(ctx);

        let mut predict_clicked = false;
        egui::SidePanel::left("parameters")
            .default_width(320.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(DesignSystem::BG_SIDEBAR))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    predict_clicked = self.sidebar(ui);
                });
            });

        let now = Instant::now();
        if predict_clicked {
            self.session.submit(now);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.banner(ui);
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            if let Some(feedback) = self.session.feedback(now) {
                render_feedback(ui, &feedback);
                if let Some(delay) = feedback.refresh_in {
                    ctx.request_repaint_after(delay);
                }
            }
        });
    }
}

/// Shown instead of the form when the model could not be loaded
pub struct FatalErrorApp {
    error: StartupError,
}

impl FatalErrorApp {
    pub fn new(error: StartupError) -> Self {
        Self { error }
    }
}

impl eframe::App for FatalErrorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());
        title_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            status_box(ui, DesignSystem::DANGER, &self.error.to_string());
        });
    }
}

fn title_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::top("title")
        .frame(DesignSystem::title_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    egui::RichText::new(form::TITLE)
                        .color(egui::Color32::WHITE)
                        .size(26.0),
                );
            });
        });
}

fn render_feedback(ui: &mut egui::Ui, feedback: &Feedback) {
    if let Some(headline) = &feedback.headline {
        ui.heading(headline.as_str());
        ui.add_space(DesignSystem::SPACING_SMALL);
    }

    match feedback.tone {
        Tone::Danger => {
            ui.label(egui::RichText::new("⛔").size(96.0).color(DesignSystem::DANGER));
            status_box(ui, DesignSystem::DANGER, &feedback.message);
        }
        Tone::Celebrating => {
            balloons(ui, feedback.bursts);
        }
        Tone::Success => {
            balloons(ui, feedback.bursts);
            ui.label(egui::RichText::new("✅").size(96.0).color(DesignSystem::SUCCESS));
            status_box(ui, DesignSystem::SUCCESS, &feedback.message);
        }
        Tone::Error => status_box(ui, DesignSystem::DANGER, &feedback.message),
    }
}

fn balloons(ui: &mut egui::Ui, bursts: u32) {
    if bursts == 0 {
        return;
    }
    ui.label(
        egui::RichText::new("🎈".repeat(bursts as usize * 5))
            .size(32.0)
            .color(DesignSystem::CELEBRATION),
    );
}

fn status_box(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    DesignSystem::status_frame(color).show(ui, |ui| {
        ui.label(egui::RichText::new(text).strong().color(DesignSystem::TEXT_PRIMARY));
    });
}

fn info_box(ui: &mut egui::Ui, name: &str) {
    if let Some(legend) = form::legend(name) {
        status_box(ui, DesignSystem::INFO, &legend);
    }
}

fn label_for(name: &str) -> &'static str {
    form::field(name).map(|f| f.label).unwrap_or("")
}

fn number_input(ui: &mut egui::Ui, name: &str, value: &mut f64) {
    let max = match form::field(name).map(|f| f.control) {
        Some(Control::Number { max }) => max,
        _ => f64::MAX,
    };

    ui.label(label_for(name));
    ui.add(egui::DragValue::new(value).range(0.0..=max).speed(1.0).fixed_decimals(0));
    ui.add_space(DesignSystem::SPACING_SMALL);
}

fn slider_input(ui: &mut egui::Ui, name: &str, value: &mut u16) {
    let max = match form::field(name).map(|f| f.control) {
        Some(Control::Slider { max }) => max,
        _ => u16::MAX,
    };

    ui.label(label_for(name));
    ui.add(egui::Slider::new(value, 0..=max).step_by(1.0));
    ui.add_space(DesignSystem::SPACING_SMALL);
}

fn radio_input<T: Coded>(ui: &mut egui::Ui, name: &str, value: &mut T) {
    ui.label(label_for(name));
    ui.horizontal(|ui| {
        for &option in T::options() {
            ui.radio_value(value, option, option.code().to_string());
        }
    });
    info_box(ui, name);
    ui.add_space(DesignSystem::SPACING_SMALL);
}

fn select_input<T: Coded>(ui: &mut egui::Ui, name: &str, value: &mut T) {
    ui.label(label_for(name));
    egui::ComboBox::from_id_salt(name)
        .selected_text(value.code().to_string())
        .show_ui(ui, |ui| {
            for &option in T::options() {
                ui.selectable_value(value, option, option.code().to_string());
            }
        });
    info_box(ui, name);
    ui.add_space(DesignSystem::SPACING_SMALL);
}
