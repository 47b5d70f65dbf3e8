//! Prediction metrics and statistics tracking.

use crate::types::verdict::Verdict;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics collector for the prediction service
pub struct PredictionMetrics {
    /// Total predictions returned to a caller
    pub predictions_served: AtomicU64,
    /// Predictions answered from the cache
    pub cache_hits: AtomicU64,
    /// Calls that reached the model
    pub model_invocations: AtomicU64,
    /// Model calls that returned an error
    pub model_failures: AtomicU64,
    /// Verdicts shown, by kind
    verdicts: RwLock<HashMap<Verdict, u64>>,
    /// Prediction latency (in microseconds)
    latencies: RwLock<Vec<u64>>,
    /// Score distribution buckets
    score_buckets: RwLock<[u64; 10]>,
    /// Start time for rate calculation
    start_time: Instant,
}

impl PredictionMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            predictions_served: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            model_invocations: AtomicU64::new(0),
            model_failures: AtomicU64::new(0),
            verdicts: RwLock::new(HashMap::new()),
            latencies: RwLock::new(Vec::with_capacity(1000)),
            score_buckets: RwLock::new([0; 10]),
            start_time: Instant::now(),
        }
    }

    /// Record a served prediction
    pub fn record_prediction(&self, latency: Duration, score: f64, cached: bool) {
        self.predictions_served.fetch_add(1, Ordering::Relaxed);
        if cached {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
        }

        if let Ok(mut times) = self.latencies.write() {
            times.push(latency.as_micros() as u64);
            // Keep only last 10000 for memory efficiency
            if times.len() > 10000 {
                times.drain(0..5000);
            }
        }

        let bucket = (score.clamp(0.0, 1.0) * 10.0).min(9.0) as usize;
        if let Ok(mut buckets) = self.score_buckets.write() {
            buckets[bucket] += 1;
        }
    }

    /// Record a call that reached the model
    pub fn record_model_invocation(&self) {
        self.model_invocations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed model call
    pub fn record_model_failure(&self) {
        self.model_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a verdict shown to the user
    pub fn record_verdict(&self, verdict: Verdict) {
        if let Ok(mut by_kind) = self.verdicts.write() {
            *by_kind.entry(verdict).or_insert(0) += 1;
        }
    }

    /// Get latency statistics
    pub fn get_latency_stats(&self) -> LatencyStats {
        let mut sorted: Vec<u64> = match self.latencies.read() {
            Ok(times) if !times.is_empty() => times.clone(),
            _ => return LatencyStats::default(),
        };
        sorted.sort_unstable();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();
        let percentile = |p: f64| sorted[((count as f64 * p) as usize).min(count - 1)];

        LatencyStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p95_us: percentile(0.95),
            p99_us: percentile(0.99),
            max_us: sorted[count - 1],
        }
    }

    /// Fraction of served predictions answered from the cache
    pub fn cache_hit_rate(&self) -> f64 {
        let served = self.predictions_served.load(Ordering::Relaxed);
        if served == 0 {
            return 0.0;
        }
        self.cache_hits.load(Ordering::Relaxed) as f64 / served as f64
    }

    /// Get current throughput (predictions per second)
    pub fn get_throughput(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.predictions_served.load(Ordering::Relaxed) as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Get score distribution
    pub fn get_score_distribution(&self) -> [u64; 10] {
        self.score_buckets.read().map(|b| *b).unwrap_or([0; 10])
    }

    /// Count of verdicts of one kind
    pub fn verdict_count(&self, verdict: Verdict) -> u64 {
        self.verdicts
            .read()
            .ok()
            .and_then(|by_kind| by_kind.get(&verdict).copied())
            .unwrap_or(0)
    }

    /// Point-in-time copy of the counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            predictions_served: self.predictions_served.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            model_invocations: self.model_invocations.load(Ordering::Relaxed),
            model_failures: self.model_failures.load(Ordering::Relaxed),
            fraudulent: self.verdict_count(Verdict::Fraudulent),
            legitimate: self.verdict_count(Verdict::Legitimate),
            latency: self.get_latency_stats(),
        }
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        let snapshot = self.snapshot();
        let throughput = self.get_throughput();
        let hit_rate = self.cache_hit_rate();
        let score_dist = self.get_score_distribution();

        info!("╔══════════════════════════════════════════════════════════════╗");
        info!("║            FRAUD PREDICTION FORM - METRICS SUMMARY           ║");
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!(
            "║ Predictions Served: {:>8}  │  Throughput: {:>8.1} req/s   ║",
            snapshot.predictions_served, throughput
        );
        info!(
            "║ Model Invocations:  {:>8}  │  Cache Hit Rate: {:>6.1}%    ║",
            snapshot.model_invocations,
            hit_rate * 100.0
        );
        info!(
            "║ Model Failures:     {:>8}                                  ║",
            snapshot.model_failures
        );
        info!(
            "║ Verdicts: fraudulent={:>6} legitimate={:>6}               ║",
            snapshot.fraudulent, snapshot.legitimate
        );
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!(
            "║ Latency (μs): mean={:>5} p50={:>5} p95={:>5} p99={:>5}       ║",
            snapshot.latency.mean_us,
            snapshot.latency.p50_us,
            snapshot.latency.p95_us,
            snapshot.latency.p99_us
        );
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!("║ Score Distribution:                                          ║");
        let total: u64 = score_dist.iter().sum();
        for (i, &count) in score_dist.iter().enumerate() {
            let pct = if total > 0 { (count as f64 / total as f64) * 100.0 } else { 0.0 };
            let bar: String = "█".repeat(((pct / 2.0) as usize).min(20));
            info!(
                "║   {:.1}-{:.1}: {:>6} ({:>5.1}%) {}",
                i as f64 / 10.0,
                (i + 1) as f64 / 10.0,
                count,
                pct,
                bar
            );
        }
        info!("╚══════════════════════════════════════════════════════════════╝");
    }
}

impl Default for PredictionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Latency statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct LatencyStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

/// Counters as seen at one moment
#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub predictions_served: u64,
    pub cache_hits: u64,
    pub model_invocations: u64,
    pub model_failures: u64,
    pub fraudulent: u64,
    pub legitimate: u64,
    pub latency: LatencyStats,
}

/// Periodic metrics reporter
pub struct MetricsReporter {
    metrics: Arc<PredictionMetrics>,
    interval_secs: u64,
}

impl MetricsReporter {
    pub fn new(metrics: Arc<PredictionMetrics>, interval_secs: u64) -> Self {
        Self {
            metrics,
            interval_secs,
        }
    }

    /// Start the periodic reporting task
    pub async fn start(self) {
        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs.max(1)));
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            self.metrics.print_summary();
        }
    }
}
