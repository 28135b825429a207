use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Runs a job on a fixed period until cancelled.
pub struct PeriodicTask;

impl PeriodicTask {
    /// Spawn `job` on the current runtime. The first run happens immediately.
    ///
    /// A run in progress is allowed to finish when the handle is cancelled;
    /// no further run starts afterwards.
    pub fn spawn<F, Fut>(name: &'static str, period: Duration, mut job: F) -> RefreshHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let ticks = Arc::new(AtomicU64::new(0));
        let task_ticks = Arc::clone(&ticks);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!("Periodic refresh '{}' started every {:?}", name, period);

            loop {
                tokio::select! {
                    biased;
                    _ = cancel_rx.changed() => break,
                    _ = interval.tick() => {
                        debug!("Periodic refresh '{}' running", name);
                        job().await;
                        task_ticks.fetch_add(1, Ordering::SeqCst);
                    }
                }
                if *cancel_rx.borrow() {
                    break;
                }
            }

            info!("Periodic refresh '{}' stopped", name);
        });

        RefreshHandle {
            name,
            cancel: cancel_tx,
            task: Some(task),
            ticks,
        }
    }
}

/// Owner of a running [`PeriodicTask`]. Dropping it stops the task.
pub struct RefreshHandle {
    name: &'static str,
    cancel: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
    ticks: Arc<AtomicU64>,
}

impl RefreshHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Completed runs so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::SeqCst)
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().map(|t| !t.is_finished()).unwrap_or(false)
    }

    /// Signal the task to stop and wait for it to exit.
    pub async fn cancel(mut self) {
        let _ = self.cancel.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        let _ = self.cancel.send(true);
    }
}
