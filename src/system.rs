//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

extern crate libc;


#[cfg(target_os = "redox")]
extern crate syscall as redox_syscall;


#[cfg(any(target_os = "macos", target_os = "ios"))]
extern {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::c_void) -> libc::c_int;
}

#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "redox")))]
use libc::clock_gettime;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(any(target_os = "macos", target_os = "ios"))]
#[allow(trivial_numeric_casts)]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let _ = gettimeofday(&mut tv, null_mut());
    (tv.tv_sec as i64, tv.tv_usec as i32 * 1000)
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(windows)]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    use std::mem;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft: FILETIME = mem::zeroed();
    GetSystemTimeAsFileTime(&mut ft);

    let since_epoch = file_time_as_u64(&ft) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    (since_epoch.div_euclid(HECTONANOSECS_IN_SEC), (since_epoch.rem_euclid(HECTONANOSECS_IN_SEC) * 100) as i32)
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "redox")))]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = clock_gettime(libc::CLOCK_REALTIME, &mut ts);
    (i64::from(ts.tv_sec), ts.tv_nsec as i32)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(target_os = "redox")]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    let mut ts = redox_syscall::TimeSpec::default();
    let _ = redox_syscall::clock_gettime(redox_syscall::CLOCK_REALTIME, &mut ts);
    (ts.tv_sec, ts.tv_nsec)
}


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(not(any(unix, windows)))]
pub(crate) unsafe fn sys_time() -> (i64, i32) {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d)  => (d.as_secs() as i64, d.subsec_nanos() as i32),
        // A clock set before 1970.
        Err(e) => {
            let d = e.duration();
            let nanos = i64::from(d.subsec_nanos());
            (-(d.as_secs() as i64) - nanos.signum(), ((1_000_000_000 - nanos) % 1_000_000_000) as i32)
        },
    }
}

#[cfg(test)]
mod test {
    use super::sys_time;

    #[test]
    fn sanity_check() {
        let (seconds, nanoseconds) = unsafe { sys_time() };

        // Some time after 2020-01-01.
        assert!(seconds > 1_577_836_800);
        assert!((0 .. 1_000_000_000).contains(&nanoseconds));
    }
}
