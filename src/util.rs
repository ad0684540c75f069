use std::panic;
use std::thread;

use itertools::Itertools;
use tracing::debug;

/// Splits `list` into `num_threads` contiguous chunks, runs `f_thread` on each chunk in a
/// scoped thread and concatenates the results in chunk order.
///
/// Borrowed context (such as a lexicon store) can be captured by `f_thread` directly, so
/// nothing needs to be cloned per thread. A panic in any worker is resumed on the caller.
pub fn multi_thread_process_list<T, R, F>(list: &[T], num_threads: usize, f_thread: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> Vec<R> + Sync,
{
    if list.is_empty() {
        return Vec::new();
    }
    let num_threads = num_threads.clamp(1, list.len());
    let num_in_chunk = list.len().div_ceil(num_threads);
    debug!(total = list.len(), num_in_chunk, "splitting work across threads");

    let f_thread = &f_thread;
    thread::scope(|s| {
        let handles = list
            .chunks(num_in_chunk)
            .map(|chunk| s.spawn(move || f_thread(chunk)))
            .collect_vec();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect_vec()
    })
}
