//! Schematic Capture.
//!
//! Editor für Logikschaltpläne: Bauteile platzieren, verdrahten, prüfen.
//! egui-Oberfläche über einem rein datengetriebenen Modellkern.

use eframe::egui;
use schematic_capture::{
    render, ui, AppController, AppIntent, AppState, ComponentLibrary, EditorOptions,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Schematic Capture v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Schematic Capture"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Schematic Capture",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    draw_commands: Vec<render::DrawCommand>,
}

impl EditorApp {
    fn new() -> Self {
        // Bauteil-Bibliothek und Optionen aus TOML laden (oder Standardwerte)
        let library = ComponentLibrary::load_from_file(&ComponentLibrary::library_path());
        let editor_options = EditorOptions::load_from_file(&EditorOptions::config_path());

        Self {
            state: AppState::with_library(library, editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
            draw_commands: Vec::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::SurfaceResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_diagnostics_panel(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &mut self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(
                    self.input
                        .collect_canvas_events(ui, &response, &self.state),
                );

                // Draw-Commands nur bei Modelländerung oder Ansichtswechsel neu erzeugen
                if self.state.view.take_redraw_request() || self.draw_commands.is_empty() {
                    let scene = self.controller.build_render_scene(&self.state);
                    self.draw_commands = render::render(&scene);
                }

                let painter = ui.painter_at(rect);
                ui::paint_draw_commands(&painter, rect.min, &self.draw_commands);

                if self.state.schematic.is_empty() {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Empty schematic. Pick a component from the toolbar",
                        egui::FontId::proportional(18.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.view.redraw_requested
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
