// src/scrape.rs
use std::{
    thread,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::ScrapeOptions,
    core::{ Extractor, PageSource },
    progress::Progress,
    record::Record,
};

/// Completion counter owned by the collector.
/// Bumped exactly once per finished id as its result is received, whether the
/// fetch worked or not, so reported counts only ever go up.
pub struct Tally {
    completed: AtomicUsize,
    total: usize,
    every: usize,
}

impl Tally {
    pub fn new(total: usize, every: usize) -> Self {
        Self { completed: AtomicUsize::new(0), total, every }
    }

    /// Count one completion and return the new running total.
    pub fn complete(&self) -> usize {
        self.completed.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_milestone(&self, n: usize) -> bool {
        n == self.total || (self.every > 0 && n % self.every == 0)
    }
}

/// What the collect phase produced. `records` is sorted by id.
pub struct Collected {
    pub records: Vec<Record>,
    pub failed: Vec<u32>,
    pub completed: usize,
}

struct Done {
    id: u32,
    outcome: Result<Record, String>,
}

/// Fetch + extract every id in the range on a fixed pool of threads, then sort.
/// Per-id failures are reported and dropped; they never end the run.
pub fn collect(
    scrape: &ScrapeOptions,
    source: Arc<dyn PageSource>,
    extractor: Arc<Extractor>,
    mut progress: Option<&mut dyn Progress>,
) -> Collected {
    let ids: Vec<u32> = scrape.ids().collect();
    let tally = Tally::new(ids.len(), scrape.report_every);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }
    if ids.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No ids to process.");
            p.finish();
        }
        return Collected { records: Vec::new(), failed: Vec::new(), completed: 0 };
    }

    // Concurrency
    let ids_arc = Arc::new(ids);
    let cursor = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Done>();

    let workers = scrape.workers.min(ids_arc.len()).max(1);
    logd!("dispatching {} ids over {workers} workers", ids_arc.len());

    // Spawn workers
    let mut handles = Vec::with_capacity(workers);
    for _ in 0..workers {
        let ids = Arc::clone(&ids_arc);
        let idx = Arc::clone(&cursor);
        let source = Arc::clone(&source);
        let extractor = Arc::clone(&extractor);
        let tx = res_tx.clone();

        handles.push(thread::spawn(
            move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= ids.len() {
                        break;
                    }
                    let id = ids[i];
                    let outcome = match source.fetch(id) {
                        Ok(html) => Ok(extractor.extract(id, &html)),
                        Err(e) => Err(e.to_string()),
                    };
                    if tx.send(Done { id, outcome }).is_err() {
                        break;
                    }
                }
            }
        ));
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results, arrival order
    let mut records: Vec<Record> = Vec::with_capacity(ids_arc.len());
    let mut failed: Vec<u32> = Vec::new();

    for _ in 0..ids_arc.len() {
        let Ok(done) = res_rx.recv() else {
            break; // workers ended early; bail gracefully
        };
        let completed = tally.complete();
        match done.outcome {
            Ok(record) => {
                records.push(record);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(done.id);
                }
            }
            Err(msg) => {
                failed.push(done.id);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(done.id, &msg);
                }
            }
        }
        if tally.is_milestone(completed) {
            if let Some(p) = progress.as_deref_mut() {
                p.tick(completed, tally.total());
            }
        }
    }

    for h in handles {
        if h.join().is_err() {
            loge!("scrape worker panicked");
        }
    }

    let completed = tally.completed();
    if completed < tally.total() {
        loge!("only {completed}/{} ids completed", tally.total());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Sort
    records.sort_by_key(|r| r.id);
    failed.sort_unstable();

    Collected { records, failed, completed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_every_n_and_last() {
        let t = Tally::new(250, 100);
        let hits: Vec<usize> = (1..=250).filter(|n| t.is_milestone(*n)).collect();
        assert_eq!(hits, vec![100, 200, 250]);
    }

    #[test]
    fn zero_interval_reports_only_final() {
        let t = Tally::new(7, 0);
        let hits: Vec<usize> = (1..=7).filter(|n| t.is_milestone(*n)).collect();
        assert_eq!(hits, vec![7]);
    }

    #[test]
    fn concurrent_completions_are_not_lost() {
        let t = Arc::new(Tally::new(8_000, 100));
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let t = Arc::clone(&t);
                let seen = Arc::clone(&seen);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        let n = t.complete();
                        seen.lock().unwrap().push(n);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(t.completed(), 8_000);
        let mut seen = seen.lock().unwrap().clone();
        seen.sort_unstable();
        assert_eq!(seen, (1..=8_000).collect::<Vec<_>>());
    }
}
