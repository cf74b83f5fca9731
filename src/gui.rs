// src/gui.rs
use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;

use crate::drivers::{RedrawGate, SampleWindow};
use crate::types::ReaderMessage;

pub struct ScopeApp {
    window: SampleWindow,
    gate: RedrawGate,
    // Plotted series, rebuilt only when the gate opens. Samples that land
    // between rebuilds still reach the window; only their frames are skipped.
    points: Vec<[f64; 2]>,
    total_samples: u64,
    transport_error: Option<String>,

    rx: Receiver<ReaderMessage>,
    shutdown: Arc<AtomicBool>,
    reader: Option<JoinHandle<()>>,
}

impl ScopeApp {
    pub fn new(
        window: SampleWindow,
        gate: RedrawGate,
        rx: Receiver<ReaderMessage>,
        shutdown: Arc<AtomicBool>,
        reader: JoinHandle<()>,
    ) -> Self {
        Self {
            window,
            gate,
            points: Vec::new(),
            total_samples: 0,
            transport_error: None,
            rx,
            shutdown,
            reader: Some(reader),
        }
    }

    /// Drains everything the acquisition thread produced since the last
    /// frame. Returns true if at least one sample arrived.
    fn drain_messages(&mut self) -> bool {
        let mut received = false;
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                ReaderMessage::Sample(sample) => {
                    self.window.push(sample);
                    self.total_samples += 1;
                    received = true;
                }
                ReaderMessage::TransportFailed(reason) => {
                    self.transport_error = Some(reason);
                }
            }
        }
        received
    }

    fn rebuild_points(&mut self) {
        self.points = self
            .window
            .snapshot()
            .enumerate()
            .map(|(i, sample)| [i as f64, f64::from(sample)])
            .collect();
    }
}

impl eframe::App for ScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let received = self.drain_messages();
        if received && self.gate.try_pass(Instant::now()) {
            self.rebuild_points();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Real-Time Filtered Data");
            if let Some(reason) = &self.transport_error {
                ui.label(
                    egui::RichText::new(format!("Transport failed: {reason}"))
                        .color(Color32::RED),
                );
            } else if self.window.is_empty() {
                ui.label("Waiting for samples...");
            } else {
                ui.label(format!("{} samples received", self.total_samples));
            }

            Plot::new("waveform")
                .legend(Legend::default())
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .include_x(0.0)
                .include_x(self.window.capacity() as f64)
                .include_y(f64::from(i16::MIN))
                .include_y(f64::from(i16::MAX))
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::new(self.points.clone()))
                            .name("Filtered Wave")
                            .color(Color32::from_rgb(0x5b, 0x8f, 0xff)),
                    );
                });
        });

        if self.transport_error.is_none() {
            // Keep polling the channel even with no input events; one wake
            // per gate interval is all the chart can use anyway.
            ctx.request_repaint_after(self.gate.interval());
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.reader.take() {
            if handle.join().is_err() {
                log::warn!("acquisition thread panicked during shutdown");
            }
        }
    }
}
