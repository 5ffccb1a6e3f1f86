//! Small shared helpers.

const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Formats a byte count as a human-readable binary-prefixed size.
///
/// # Examples
///
/// ```
/// use swarmfile::util::pretty_size;
///
/// assert_eq!(pretty_size(0), "0.00 B");
/// assert_eq!(pretty_size(1536), "1.50 KiB");
/// assert_eq!(pretty_size(5 * 1024 * 1024), "5.00 MiB");
/// ```
pub fn pretty_size(bytes: u64) -> String {
    let mut unit = 0;
    let mut mul = 1u64;
    let mut scaled = bytes;

    while scaled >= 1024 && unit < UNITS.len() - 1 {
        unit += 1;
        mul *= 1024;
        scaled /= 1024;
    }

    format!("{:.2} {}", bytes as f64 / mul as f64, UNITS[unit])
}
