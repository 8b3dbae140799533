use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use lazy_static::lazy_static;
use parking_lot::RwLock;
use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

// Categories for timed engine operations
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    Generation,
    Simulation,
    FinancialAnalysis,
    Scoring,
    FileIO,
    Other,
}

impl OperationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationCategory::Generation => "Candidate Generation",
            OperationCategory::Simulation => "Operation Simulation",
            OperationCategory::FinancialAnalysis => "Financial Analysis",
            OperationCategory::Scoring => "Scoring",
            OperationCategory::FileIO => "File I/O",
            OperationCategory::Other => "Other Operations",
        }
    }
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: RwLock<HashMap<String, (Duration, usize)>> =
        RwLock::new(HashMap::new());
    static ref CATEGORY_TIMINGS: RwLock<HashMap<OperationCategory, (Duration, usize)>> =
        RwLock::new(HashMap::new());
}

pub struct TimingGuard {
    function_name: String,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        if !is_timing_enabled() {
            return;
        }
        let duration = self.start.elapsed();

        {
            let mut timings = FUNCTION_TIMINGS.write();
            let entry = timings
                .entry(self.function_name.clone())
                .or_insert((Duration::ZERO, 0));
            entry.0 += duration;
            entry.1 += 1;
        }
        {
            let mut timings = CATEGORY_TIMINGS.write();
            let entry = timings
                .entry(self.category.clone())
                .or_insert((Duration::ZERO, 0));
            entry.0 += duration;
            entry.1 += 1;
        }
    }
}

pub fn start_timing(function_name: &str, category: OperationCategory) -> TimingGuard {
    TimingGuard {
        function_name: function_name.to_string(),
        category,
        start: Instant::now(),
    }
}

pub fn init_logging(enable_timing: bool) {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let env_filter = EnvFilter::from_default_env()
        .add_directive(Level::INFO.into())
        .add_directive("hesopt=debug".parse().expect("static directive parses"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty());

    // Repeated init in tests is harmless; only the first subscriber wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nPerformance Report");
    println!("==========================");

    println!("\nBy Function:");
    let function_timings = FUNCTION_TIMINGS.read();
    let mut entries: Vec<_> = function_timings.iter().collect();
    entries.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
    for (name, (total, count)) in entries {
        let avg = total.div_f64((*count).max(1) as f64);
        println!(
            "{}: total={:.2}ms, count={}, avg={:.3}ms",
            name,
            total.as_secs_f64() * 1000.0,
            count,
            avg.as_secs_f64() * 1000.0,
        );
    }

    println!("\nBy Category:");
    let category_timings = CATEGORY_TIMINGS.read();
    let mut categories: Vec<_> = category_timings.iter().collect();
    categories.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));
    for (category, (total, count)) in categories {
        println!(
            "{}: total={:.2}ms, count={}",
            category.as_str(),
            total.as_secs_f64() * 1000.0,
            count,
        );
    }
    println!("==========================\n");
}
