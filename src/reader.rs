// src/reader.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::drivers::{decode_sample, SampleTransport};
use crate::types::ReaderMessage;

/// Spawns the acquisition loop: read one frame, decode it, hand the sample
/// to the GUI. Runs until the shutdown flag is raised, the GUI side of the
/// channel disappears, or the transport fails.
///
/// The loop closes the transport exactly once on its way out, whichever of
/// the three exits is taken.
pub fn spawn_thread<T>(
    mut transport: T,
    tx: Sender<ReaderMessage>,
    shutdown: Arc<AtomicBool>,
) -> JoinHandle<()>
where
    T: SampleTransport + Send + 'static,
{
    thread::spawn(move || {
        log::info!("acquisition loop started");
        while !shutdown.load(Ordering::Relaxed) {
            match transport.read_frame() {
                Ok(Some(frame)) => {
                    let sample = decode_sample(frame);
                    log::trace!("decoded sample {sample}");
                    if tx.send(ReaderMessage::Sample(sample)).is_err() {
                        // GUI is gone, nothing left to feed.
                        break;
                    }
                }
                // Short read or timeout: no sample this cycle.
                Ok(None) => {}
                Err(err) => {
                    log::error!("transport failure: {err}");
                    let _ = tx.send(ReaderMessage::TransportFailed(err.to_string()));
                    break;
                }
            }
        }
        if let Err(err) = transport.close() {
            log::warn!("failed to close transport: {err}");
        }
        log::info!("acquisition loop stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::ManualTransport;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    #[test]
    fn decodes_and_forwards_samples_in_order() {
        let transport = ManualTransport::new(vec![
            vec![0x00, 0x80],
            vec![0x2A],
            vec![0xFF, 0x7F],
            vec![0x00, 0x00],
        ]);
        let close_calls = transport.close_calls();
        let (tx, rx) = channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let handle = spawn_thread(transport, tx, shutdown.clone());

        let timeout = Duration::from_secs(1);
        for expected in [-32768i16, 32767, 0] {
            match rx.recv_timeout(timeout).unwrap() {
                ReaderMessage::Sample(sample) => assert_eq!(sample, expected),
                other => panic!("unexpected message: {other:?}"),
            }
        }

        shutdown.store(true, Ordering::Relaxed);
        handle.join().unwrap();
        assert_eq!(close_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn short_reads_produce_no_messages() {
        let transport = ManualTransport::new(vec![vec![], vec![0x01], vec![0xAB]]);
        let (tx, rx) = channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let handle = spawn_thread(transport, tx, shutdown.clone());

        // No full frame exists anywhere in the queue, so nothing can arrive.
        assert!(rx
            .recv_timeout(Duration::from_millis(50))
            .is_err());

        shutdown.store(true, Ordering::Relaxed);
        handle.join().unwrap();
    }

    #[test]
    fn dropping_the_receiver_stops_the_loop_and_closes_once() {
        let transport = ManualTransport::new(vec![vec![0x01, 0x00]]);
        let close_calls = transport.close_calls();
        let (tx, rx) = channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        drop(rx);
        let handle = spawn_thread(transport, tx, shutdown);

        handle.join().unwrap();
        assert_eq!(close_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
