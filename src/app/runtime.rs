use crate::input::{spawn_input_thread, InputAction, RawInputCollector};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Poll interval of the input thread; also bounds how long shutdown waits for it.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Owns the blocking input thread and stops it on drop.
pub struct InputRuntime {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputRuntime {
    /// Start collecting terminal input and forwarding actions onto `tx`.
    pub fn start(tx: UnboundedSender<InputAction>, collector: RawInputCollector) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let handle = spawn_input_thread(tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL, collector);
        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    /// Signal the thread and wait for it to exit
    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Input thread panicked");
            }
        }
    }
}

impl Drop for InputRuntime {
    fn drop(&mut self) {
        self.stop();
    }
}
