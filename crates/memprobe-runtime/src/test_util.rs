//! Shared helpers for live-memory tests

use std::ptr;
use std::sync::{Mutex, MutexGuard};

/// Serialises tests that unmap pages, so a parallel test's mmap cannot
/// land in a hole while another test is probing it
static MAP_LOCK: Mutex<()> = Mutex::new(());

pub fn map_lock() -> MutexGuard<'static, ()> {
    MAP_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn page_size() -> usize {
    // SAFETY: plain sysconf query.
    unsafe { libc::sysconf(libc::_SC_PAGESIZE) as usize }
}

/// Map `pages` read-write pages, then unmap the last one
///
/// Returns the base and the page size. The caller owns the first
/// `pages - 1` pages and must release them with `unmap`.
pub fn map_with_hole(pages: usize) -> (*mut u8, usize) {
    let page = page_size();
    // SAFETY: fresh anonymous private mapping.
    let base = unsafe {
        libc::mmap(
            ptr::null_mut(),
            pages * page,
            libc::PROT_READ | libc::PROT_WRITE,
            libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
            -1,
            0,
        )
    };
    assert_ne!(base, libc::MAP_FAILED);
    let base = base as *mut u8;
    // SAFETY: the last page lies inside the mapping created above.
    let hole = unsafe { base.add((pages - 1) * page) };
    unmap(hole, 1);
    (base, page)
}

pub fn unmap(base: *mut u8, pages: usize) {
    // SAFETY: callers only pass ranges they mapped.
    let ret = unsafe { libc::munmap(base as *mut libc::c_void, pages * page_size()) };
    assert_eq!(ret, 0);
}
