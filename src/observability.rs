use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

pub struct Observability {
    requests_total: AtomicU64,
    request_errors_total: AtomicU64,
    unsupported_version_total: AtomicU64,
    response_bytes_total: AtomicU64,
    request_latency_ms: Mutex<VecDeque<u64>>,
}

impl Observability {
    fn new() -> Self {
        Self {
            requests_total: AtomicU64::new(0),
            request_errors_total: AtomicU64::new(0),
            unsupported_version_total: AtomicU64::new(0),
            response_bytes_total: AtomicU64::new(0),
            request_latency_ms: Mutex::new(VecDeque::with_capacity(10_000)),
        }
    }

    pub fn record_request(&self, latency: Duration, ok: bool) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if !ok {
            self.request_errors_total.fetch_add(1, Ordering::Relaxed);
        }
        let ms = latency.as_millis() as u64;
        let mut lock = self.request_latency_ms.lock().expect("metrics mutex poisoned");
        if lock.len() >= 10_000 {
            lock.pop_front();
        }
        lock.push_back(ms);
    }

    pub fn record_unsupported_version(&self) {
        self.unsupported_version_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_response_bytes(&self, bytes: usize) {
        self.response_bytes_total
            .fetch_add(bytes as u64, Ordering::Relaxed);
    }

    fn p99_latency_ms(&self) -> u64 {
        let lock = self.request_latency_ms.lock().expect("metrics mutex poisoned");
        if lock.is_empty() {
            return 0;
        }
        let mut v: Vec<u64> = lock.iter().copied().collect();
        v.sort_unstable();
        let idx = ((v.len() as f64) * 0.99).floor() as usize;
        v[idx.min(v.len() - 1)]
    }

    pub fn render_prometheus(&self) -> String {
        let mut out = String::new();
        out.push_str("# TYPE franz_requests_total counter\n");
        out.push_str(&format!(
            "franz_requests_total {}\n",
            self.requests_total.load(Ordering::Relaxed)
        ));
        out.push_str("# TYPE franz_request_errors_total counter\n");
        out.push_str(&format!(
            "franz_request_errors_total {}\n",
            self.request_errors_total.load(Ordering::Relaxed)
        ));
        out.push_str("# TYPE franz_unsupported_version_total counter\n");
        out.push_str(&format!(
            "franz_unsupported_version_total {}\n",
            self.unsupported_version_total.load(Ordering::Relaxed)
        ));
        out.push_str("# TYPE franz_response_bytes_total counter\n");
        out.push_str(&format!(
            "franz_response_bytes_total {}\n",
            self.response_bytes_total.load(Ordering::Relaxed)
        ));
        out.push_str("# TYPE franz_request_latency_p99_ms gauge\n");
        out.push_str(&format!(
            "franz_request_latency_p99_ms {}\n",
            self.p99_latency_ms()
        ));
        out
    }
}

static OBS: OnceLock<Observability> = OnceLock::new();

pub fn observability() -> &'static Observability {
    OBS.get_or_init(Observability::new)
}
