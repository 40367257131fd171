//! Small helpers shared across the catalog: entity id generation and
//! duration formatting.

use std::time::Duration;

use rand::Rng;

const ID_LEN: usize = 24;
const ID_CHARSET: &[u8] = b"0123456789abcdef";

/// Generate a fresh 24-character lowercase hex entity id.
///
/// Ids are drawn independently per entity; uniqueness is probabilistic,
/// not checked.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ID_CHARSET[rng.random_range(0..ID_CHARSET.len())] as char)
        .collect()
}

/// Format a `Duration` as `MM:SS`, or `H:MM:SS` once it reaches an hour.
///
/// Minutes and seconds are zero-padded to width 2, hours are not. Durations
/// cannot be negative, so there is no error path.
pub fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
