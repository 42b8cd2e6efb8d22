//! Time management: map the remaining overage clock to a per-move budget.

use std::time::Duration;

/// Budget by remaining overage time.
///
/// | Remaining  | Budget  |
/// |------------|---------|
/// | >= 4 s     | 8000 ms |
/// | >= 2 s     |  180 ms |
/// | otherwise  |   90 ms |
pub fn allocate_time(remaining: Duration) -> Duration {
    let remaining_ms = remaining.as_millis();
    let budget_ms = if remaining_ms >= 4_000 {
        8_000
    } else if remaining_ms >= 2_000 {
        180
    } else {
        90
    };
    Duration::from_millis(budget_ms)
}
