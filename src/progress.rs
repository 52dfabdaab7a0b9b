// src/progress.rs
/// Lightweight progress reporting used by the scrape loop.
/// Frontends implement this to surface status to users; every method runs on the
/// collecting thread, never on a worker.
pub trait Progress {
    /// Called at the start with the total number of ids.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One id fetched and extracted.
    fn item_done(&mut self, _id: u32) {}

    /// One id dropped; `err` is the fetch error text.
    fn item_failed(&mut self, _id: u32, _err: &str) {}

    /// `completed` of `total` units finished. Only called on reporting milestones.
    fn tick(&mut self, _completed: usize, _total: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Plain stdout sink used by the binary.
/// Failures are already logged by the fetcher, so they aren't repeated here.
#[derive(Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn tick(&mut self, completed: usize, total: usize) {
        println!("Processed {completed}/{total} pages");
    }
}
