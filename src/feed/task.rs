use crate::feed::config::FeedConfig;
use crate::feed::snapshot::{FeedSnapshot, FeedSummary, FeedUpdate};
use crate::telemetry::TelemetryGenerator;
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Cheap, cloneable read side of the live feed.
///
/// Handed to HTTP and WebSocket handlers; never mutates anything.
#[derive(Clone)]
pub struct FeedReader {
    snapshot_rx: watch::Receiver<Arc<FeedSnapshot>>,
    updates_tx: broadcast::Sender<FeedUpdate>,
}

impl FeedReader {
    /// Latest published snapshot
    pub fn snapshot(&self) -> Arc<FeedSnapshot> {
        Arc::clone(&self.snapshot_rx.borrow())
    }

    /// Receiver notified whenever a new snapshot is published.
    ///
    /// `changed()` errors once the feed task has stopped.
    pub fn watch(&self) -> watch::Receiver<Arc<FeedSnapshot>> {
        self.snapshot_rx.clone()
    }

    /// Subscribe to per-tick entity and summary updates
    pub fn subscribe(&self) -> broadcast::Receiver<FeedUpdate> {
        self.updates_tx.subscribe()
    }
}

/// Background task that owns the telemetry generator.
///
/// The task is the only writer. Readers get immutable snapshots through
/// [`FeedReader`]. Dropping the feed aborts the task.
pub struct LiveFeed {
    reader: FeedReader,
    handle: Option<JoinHandle<()>>,
}

impl LiveFeed {
    /// Publish the generator's initial state and start ticking.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<R>(generator: TelemetryGenerator<R>, config: &FeedConfig) -> Self
    where
        R: Rng + Send + 'static,
    {
        let initial = FeedSnapshot::new(
            generator.patients().to_vec(),
            generator.devices().to_vec(),
        );
        let (snapshot_tx, snapshot_rx) = watch::channel(Arc::new(initial));
        let (updates_tx, _) = broadcast::channel(config.update_buffer.max(1));

        let patient_period = Duration::from_millis(config.patient_interval_ms.max(1));
        let device_period = Duration::from_millis(config.device_interval_ms.max(1));

        info!(
            patient_interval_ms = config.patient_interval_ms,
            device_interval_ms = config.device_interval_ms,
            patients = generator.patients().len(),
            devices = generator.devices().len(),
            "Starting live telemetry feed"
        );

        let handle = tokio::spawn(run_feed(
            generator,
            patient_period,
            device_period,
            snapshot_tx,
            updates_tx.clone(),
        ));

        Self {
            reader: FeedReader {
                snapshot_rx,
                updates_tx,
            },
            handle: Some(handle),
        }
    }

    pub fn reader(&self) -> FeedReader {
        self.reader.clone()
    }

    pub fn snapshot(&self) -> Arc<FeedSnapshot> {
        self.reader.snapshot()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FeedUpdate> {
        self.reader.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop ticking.
    ///
    /// Aborts the task and waits for it to finish, so no tick can land
    /// after this returns. The last snapshot stays readable.
    pub async fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
            let last = self.reader.snapshot();
            info!(
                patient_ticks = last.patient_ticks,
                device_ticks = last.device_ticks,
                "Live telemetry feed stopped"
            );
        }
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[derive(Clone, Copy)]
enum Ticked {
    Patients,
    Devices,
}

/// Tick loop. Runs until aborted.
async fn run_feed<R: Rng>(
    mut generator: TelemetryGenerator<R>,
    patient_period: Duration,
    device_period: Duration,
    snapshot_tx: watch::Sender<Arc<FeedSnapshot>>,
    updates_tx: broadcast::Sender<FeedUpdate>,
) {
    // First tick fires one full period after start, like a browser interval
    let start = Instant::now();
    let mut patient_ticker = interval_at(start + patient_period, patient_period);
    let mut device_ticker = interval_at(start + device_period, device_period);

    // Skip missed ticks to prevent bursts after a stall
    patient_ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    device_ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut patient_ticks: u64 = 0;
    let mut device_ticks: u64 = 0;

    loop {
        let ticked = tokio::select! {
            _ = patient_ticker.tick() => {
                generator.tick_patients();
                patient_ticks += 1;
                Ticked::Patients
            }
            _ = device_ticker.tick() => {
                generator.tick_devices();
                device_ticks += 1;
                Ticked::Devices
            }
        };

        let now = Utc::now();
        let snapshot = Arc::new(FeedSnapshot {
            patients: generator.patients().to_vec(),
            devices: generator.devices().to_vec(),
            patient_ticks,
            device_ticks,
            updated_at: now,
        });
        snapshot_tx.send_replace(Arc::clone(&snapshot));

        // No subscribers is fine; skip building the messages
        if updates_tx.receiver_count() > 0 {
            match ticked {
                Ticked::Patients => {
                    for patient in &snapshot.patients {
                        let _ = updates_tx.send(FeedUpdate::Patient {
                            patient: patient.clone(),
                            timestamp: now,
                        });
                    }
                }
                Ticked::Devices => {
                    for device in &snapshot.devices {
                        let _ = updates_tx.send(FeedUpdate::Device {
                            device: device.clone(),
                            timestamp: now,
                        });
                    }
                }
            }
            let _ = updates_tx.send(FeedUpdate::Summary {
                summary: FeedSummary::from(snapshot.as_ref()),
                timestamp: now,
            });
        }

        debug!(
            patient_ticks,
            device_ticks,
            critical = snapshot.critical_patient_count(),
            device_alerts = snapshot.device_alert_count(),
            "Telemetry tick"
        );
    }
}
