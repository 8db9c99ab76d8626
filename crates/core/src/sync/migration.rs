//! Legacy mirror migration pass
//!
//! Older mirror payloads stored a raw rank string in `occupation` and
//! sometimes a `zipCode` field that no longer exists. This pass normalizes
//! both on load, strictly against the local mirror; the remote store is never
//! touched. It runs on every mirror read and is idempotent on
//! already-migrated data. The classification below is a lossy heuristic:
//! once a rank string has been folded into `suboccupation` there is no way
//! back to the pre-migration shape.

use serde_json::Value;

/// Case-insensitive substring indicators that classify a legacy occupation
/// string as technical (numeric rank codes, enlisted grade words).
const TECHNICAL_INDICATORS: [&str; 15] = [
    "soldier", "n.z", "private", "corporal", "sergeant", "rank1", "rank2", "rank3", "rank4",
    "rank5", "rank6", "rank7", "rank8", "rank9", "rank10",
];

const DEPRECATED_ZIP_KEY: &str = "zipCode";

/// Normalize one raw mirror array.
///
/// Returns the (possibly rewritten) array and whether anything changed, so
/// the caller knows to rewrite the mirror.
pub fn migrate_records(records: Vec<Value>) -> (Vec<Value>, bool) {
    let mut changed = false;

    let migrated = records
        .into_iter()
        .map(|mut record| {
            changed |= migrate_record(&mut record);
            record
        })
        .collect();

    (migrated, changed)
}

fn migrate_record(record: &mut Value) -> bool {
    let Some(fields) = record.as_object_mut() else {
        return false;
    };

    let mut changed = false;

    // Only string occupations are candidates; canonical values pass through.
    if let Some(occupation) = fields.get("occupation").and_then(Value::as_str) {
        if occupation != "technical" && occupation != "nonTechnical" {
            let legacy = occupation.to_string();
            let category =
                if is_technical_rank(&legacy) { "technical" } else { "nonTechnical" };
            fields.insert("suboccupation".to_string(), Value::String(legacy));
            fields.insert("occupation".to_string(), Value::String(category.to_string()));
            changed = true;
        }
    }

    if fields.remove(DEPRECATED_ZIP_KEY).is_some() {
        changed = true;
    }

    changed
}

fn is_technical_rank(occupation: &str) -> bool {
    let lowered = occupation.to_lowercase();
    TECHNICAL_INDICATORS.iter().any(|indicator| lowered.contains(indicator))
}
