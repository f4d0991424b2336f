// src/gui/actions/load.rs
use std::thread;

use eframe::egui;

use crate::gui::{app::App, progress::GuiProgress};

/// Kick off the feed load on a worker thread. The store's lock makes a second
/// concurrent call wait for the first fetch rather than fetching again.
pub fn start_load(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Load: already running");
        return;
    }
    app.running = true;
    app.load_error = None;
    app.status("Loading data …");

    let store = app.store.clone();
    let inbox = app.inbox.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let ctx = ctx.clone();

    logf!("Load: Begin source={}", store.source().describe());

    thread::spawn(move || {
        let res = store.snapshot(Some(&mut prog));
        if let Ok(mut slot) = inbox.lock() {
            *slot = Some(res);
        }
        ctx.request_repaint();
    });
}

/// Drain a finished load, if any. Called at the top of every frame.
pub fn poll_load(app: &mut App) {
    let done = match app.inbox.lock() {
        Ok(mut slot) => slot.take(),
        Err(_) => None,
    };
    let Some(res) = done else { return };
    app.running = false;

    match res {
        Ok(snap) => {
            logf!(
                "Load: OK rows={} kept={}",
                snap.dataset.len(),
                snap.filtered.len()
            );
            app.data = Some(snap.filtered);
            app.rebuild_view();
            app.status("Ready");
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            app.status(format!("Error: {e}"));
            app.load_error = Some(e.to_string());
        }
    }
}
