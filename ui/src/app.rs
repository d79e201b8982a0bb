use crate::{state::State, widgets};

pub struct DirectoryApp {
    pub state: State,
}

impl DirectoryApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for DirectoryApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::directory_panel(&mut self.state.ctx, ui);
        });
    }
}
