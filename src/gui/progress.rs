// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Mirrors load progress into the status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn fetched(&mut self, bytes: usize) {
        self.set_status(format!("Received {:.1} MB", bytes as f64 / 1_048_576.0));
    }
    fn finish(&mut self) {
        self.ctx.request_repaint();
    }
}
