// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod config;
mod drivers;
mod gui;
mod reader;
mod types;

use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc};

use anyhow::Context;
use eframe::egui;

use crate::drivers::{RedrawGate, SampleWindow, SerialTransport};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let transport = SerialTransport::open(config::PORT, config::BAUD_RATE, config::READ_TIMEOUT)
        .with_context(|| format!("could not open {}", config::PORT))?;
    let window = SampleWindow::with_capacity(config::WINDOW_CAPACITY)?;
    let gate = RedrawGate::new(config::REDRAW_INTERVAL);

    let (tx, rx) = mpsc::channel();
    let shutdown = Arc::new(AtomicBool::new(false));
    let reader = reader::spawn_thread(transport, tx, shutdown.clone());

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1000.0, 520.0])
        .with_title("serialscope");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "serialscope",
        options,
        Box::new(move |_cc| Box::new(gui::ScopeApp::new(window, gate, rx, shutdown, reader))),
    )
    .map_err(|err| anyhow::anyhow!("event loop failed: {err}"))
}
