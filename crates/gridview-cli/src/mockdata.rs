//! Deterministic mock record sets.
//!
//! Stands in for the record fetch: everything is generated up front and the
//! same `(count, seed)` always yields the same records.

use chrono::{Duration, NaiveDate};
use gridview_model::{
    Label, Payment, PaymentStatus, Priority, RecordId, StatusValue, Task, TaskStatus,
};

const NAMES: [&str; 20] = [
    "alice", "bob", "charlie", "david", "emma", "frank", "grace", "henry", "ivy", "jack", "kate",
    "liam", "mia", "noah", "olivia", "peter", "quinn", "rachel", "sam", "tina",
];

const DOMAINS: [&str; 15] = [
    "example.com",
    "gmail.com",
    "test.com",
    "company.com",
    "business.com",
    "website.com",
    "service.com",
    "store.com",
    "platform.com",
    "startup.com",
    "corp.com",
    "enterprise.com",
    "firm.com",
    "shop.com",
    "agency.com",
];

const TASK_TITLES: [&str; 12] = [
    "Set up project repository",
    "Design database schema",
    "Implement login flow",
    "Write API documentation",
    "Fix pagination off-by-one",
    "Add CSV export",
    "Review pull requests",
    "Migrate settings storage",
    "Improve table rendering",
    "Update dependencies",
    "Add keyboard shortcuts",
    "Profile slow queries",
];

/// Smallest generated payment amount.
pub const MIN_AMOUNT: u32 = 50;

/// Width of the amount range; amounts fall in `[MIN_AMOUNT, MIN_AMOUNT + AMOUNT_SPAN)`.
pub const AMOUNT_SPAN: u64 = 900;

/// Mix index and seed into a well-spread value (splitmix64 finalizer).
fn scramble(index: usize, seed: u64) -> u64 {
    let mut z = (index as u64)
        .wrapping_add(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn cycle<T: Copy>(values: &[T], index: usize) -> T {
    values[index % values.len()]
}

fn record_id(prefix: &str, width: usize, number: usize) -> Option<RecordId> {
    RecordId::new(format!("{prefix}-{number:0width$}")).ok()
}

/// Generate `count` payments with ids `PAY-00001`, `PAY-00002`, ...
pub fn generate_payments(count: usize, seed: u64) -> Vec<Payment> {
    (0..count)
        .filter_map(|i| {
            let id = record_id("PAY", 5, i + 1)?;
            let email = format!(
                "{}{}@{}",
                cycle(&NAMES, i),
                i / NAMES.len() + 1,
                cycle(&DOMAINS, i)
            );
            let amount = MIN_AMOUNT + (scramble(i, seed) % AMOUNT_SPAN) as u32;
            Some(Payment {
                id,
                email,
                status: cycle(PaymentStatus::ALL, i),
                amount,
            })
        })
        .collect()
}

/// Generate `count` tasks with ids `TASK-0001`, `TASK-0002`, ...
pub fn generate_tasks(count: usize, seed: u64) -> Vec<Task> {
    let epoch = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .unwrap_or_default();
    (0..count)
        .filter_map(|i| {
            let id = record_id("TASK", 4, i + 1)?;
            let noise = scramble(i, seed);
            // Quarter-hour estimates between 0.5 and 40 hours.
            let estimated_hours = 0.5 + (noise % 159) as f64 * 0.25;
            let created_at = epoch + Duration::hours(((noise >> 16) % (24 * 180)) as i64);
            Some(Task {
                id,
                title: cycle(&TASK_TITLES, i).to_string(),
                status: cycle(TaskStatus::ALL, i),
                priority: cycle(Priority::ALL, i),
                label: cycle(Label::ALL, i),
                estimated_hours,
                created_at,
            })
        })
        .collect()
}
