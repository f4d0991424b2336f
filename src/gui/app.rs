// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    filter::FilteredDataset,
    source::{self, Source},
    store::{DatasetStore, Snapshot},
    view::{self, DashboardView},
};

use super::{actions, components};

pub type GuiStore = DatasetStore<Box<dyn Source>>;

/// Result slot the loader thread fills and the UI thread drains.
pub type LoadInbox = Arc<Mutex<Option<crate::Result<Snapshot>>>>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let state = AppState::default();
    let store = Arc::new(DatasetStore::new(source::from_options(&state.options.source)));

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let mut app = App::new(state, store);
            actions::start_load(&mut app, &cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // shared feed cache; the loader thread holds a clone
    pub store: Arc<GuiStore>,

    // loaded data + the view rendered from it
    pub data: Option<Arc<FilteredDataset>>,
    pub view: Option<Arc<DashboardView>>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status/progress (loader writes here)
    pub status: Arc<Mutex<String>>,
    pub inbox: LoadInbox,
    pub running: bool,
    pub load_error: Option<String>,
}

impl App {
    pub fn new(state: AppState, store: Arc<GuiStore>) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!("Init: source={}", store.source().describe());

        Self {
            state,
            store,
            data: None,
            view: None,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new("Idle".to_string())),
            inbox: Arc::new(Mutex::new(None)),
            running: false,
            load_error: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Re-render the dashboard from loaded data + current selection.
    /// The resolved (clamped) selection is written back so the widgets agree.
    pub fn rebuild_view(&mut self) {
        let Some(data) = self.data.as_ref() else {
            self.view = None;
            return;
        };

        let view = view::render(data, &self.state.gui.selection);
        for n in &view.notices {
            logd!("View: {}", n);
        }

        // Default export name follows the region until the user types a path.
        if let Some(r) = view.selection.region.as_deref() {
            self.state.options.export.set_region_stem(r);
            if !self.out_path_dirty {
                self.out_path_text =
                    self.state.options.export.out_path().to_string_lossy().into_owned();
            }
        }
        self.state.gui.selection = view.selection.clone();
        self.view = Some(Arc::new(view));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_load(self);

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running {
                    ui.add(egui::Spinner::new());
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::dashboard::draw(ui, self);
                });
        });
    }
}
