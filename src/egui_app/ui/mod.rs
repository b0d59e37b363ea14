//! egui renderer for the prediction form.

/// Palette and status tones.
pub mod style;

use std::time::Duration;

use eframe::egui::{self, Color32, Frame, RichText};

use crate::egui_app::controller::PredictionController;
use crate::egui_app::state::PredictionDisplay;
use crate::predict::form::FieldId;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: PredictionController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app, loading persisted configuration and probing the
    /// service once so the status bar reflects connectivity at startup.
    pub fn new() -> Self {
        let mut controller = PredictionController::new();
        controller.load_configuration();
        controller.check_backend();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = Color32::from_rgb(12, 12, 12);
        visuals.panel_fill = Color32::from_rgb(16, 16, 16);
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(16, 16, 16);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::none().fill(Color32::from_rgb(0, 0, 0)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        6.0,
                        style::status_color(status.tone),
                    );
                    ui.add_space(14.0);
                    ui.label(RichText::new(&status.text).color(Color32::WHITE));
                });
            });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let mut edits: Vec<(FieldId, String)> = Vec::new();
        let mut snap_back = false;
        {
            let inputs = &mut self.controller.ui.form.inputs;
            egui::Grid::new("prediction_form")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    for (index, field) in FieldId::ALL.into_iter().enumerate() {
                        ui.label(RichText::new(field.label()).color(palette.text_primary));
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut inputs[index])
                                .desired_width(140.0),
                        );
                        if response.changed() {
                            edits.push((field, inputs[index].clone()));
                        }
                        if response.lost_focus() {
                            snap_back = true;
                        }
                        ui.end_row();
                    }
                });
        }
        for (field, raw) in edits {
            self.controller.update_field(field, &raw);
        }
        if snap_back {
            self.controller.refresh_field_inputs();
        }
    }

    fn render_submit(&mut self, ui: &mut egui::Ui) {
        let submitting = self.controller.submitting();
        let label = if submitting { "Chargement..." } else { "Prédire" };
        if ui
            .add_enabled(!submitting, egui::Button::new(label).min_size(egui::vec2(120.0, 28.0)))
            .clicked()
        {
            self.controller.submit();
        }
    }

    fn render_result(&mut self, ui: &mut egui::Ui) {
        let Some(result) = self.controller.ui.form.result.clone() else {
            return;
        };
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(6.0);
        ui.heading("Résultat :");
        let color = match &result {
            PredictionDisplay::Positive => style::status_color(style::StatusTone::Warning),
            PredictionDisplay::Negative => style::status_color(style::StatusTone::Info),
            PredictionDisplay::Message(_) => style::status_color(style::StatusTone::Error),
        };
        ui.label(RichText::new(result.text()).color(color).size(18.0));
    }

    fn render_endpoint_section(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        egui::CollapsingHeader::new("Service de prédiction")
            .default_open(false)
            .show(ui, |ui| {
                ui.label(RichText::new("Adresse du service").color(palette.text_muted));
                let mut apply_clicked = false;
                let mut test_clicked = false;
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.controller.ui.endpoint_input)
                            .hint_text("http://backend:8000")
                            .desired_width(240.0),
                    );
                    if ui.button("Appliquer").clicked() {
                        apply_clicked = true;
                    }
                    let checking = self.controller.checking_backend();
                    if ui
                        .add_enabled(!checking, egui::Button::new("Tester la connexion"))
                        .clicked()
                    {
                        test_clicked = true;
                    }
                });
                if apply_clicked {
                    self.controller.apply_endpoint();
                }
                if test_clicked {
                    self.controller.check_backend();
                }
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        if self.controller.submitting() || self.controller.checking_backend() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading("Prédiction du diabète");
            });
            ui.add_space(12.0);
            self.render_form(ui);
            ui.add_space(12.0);
            self.render_submit(ui);
            self.render_result(ui);
            ui.add_space(16.0);
            self.render_endpoint_section(ui);
        });
    }
}
