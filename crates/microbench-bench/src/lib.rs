//! Shared helpers for the criterion bench targets.

/// Pin the bench thread to CPU 0 when `MICROBENCH_BENCH_PIN=1`.
///
/// Best effort: a failed pin is reported on stderr and the run continues.
pub fn maybe_pin_thread() {
    if std::env::var("MICROBENCH_BENCH_PIN").ok().as_deref() != Some("1") {
        return;
    }

    #[cfg(target_os = "linux")]
    unsafe {
        // SAFETY: cpu_set_t is plain data; zeroed is a valid empty set and the
        // pointer passed to sched_setaffinity outlives the call.
        let mut set: libc::cpu_set_t = std::mem::zeroed();
        libc::CPU_ZERO(&mut set);
        libc::CPU_SET(0, &mut set);
        let rc = libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set);
        if rc != 0 {
            let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
            eprintln!("MICROBENCH_META pinning_failed errno={errno}");
        } else {
            eprintln!("MICROBENCH_META pinned_to_cpu=0");
        }
    }
}
