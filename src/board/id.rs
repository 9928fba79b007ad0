//! Entity ID generation utilities.
//!
//! Board, column and task IDs are generated from the title by:
//! 1. Converting to lowercase
//! 2. Replacing non-alphanumeric characters with hyphens
//! 3. Collapsing multiple hyphens
//! 4. Trimming leading/trailing hyphens
//! 5. Appending 8 random hex characters
//!
//! IDs are opaque to the rest of the crate; only uniqueness within the
//! owning collection matters.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Global counter for deterministic ID generation in tests.
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Whether to use deterministic IDs (for testing).
static USE_DETERMINISTIC_IDS: AtomicBool = AtomicBool::new(false);

/// Per-process counter mixed into random suffixes.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Enable deterministic ID generation for testing.
///
/// When enabled, IDs will use a counter instead of random hex.
pub fn enable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(true, Ordering::SeqCst);
    TEST_COUNTER.store(0, Ordering::SeqCst);
}

/// Disable deterministic ID generation.
pub fn disable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(false, Ordering::SeqCst);
}

/// Convert a title to a slug, truncated to 40 characters.
#[must_use]
pub fn slugify(title: &str) -> String {
    slugify_with_max_len(title, 40)
}

/// Convert a title to a slug with a custom maximum length.
#[must_use]
pub fn slugify_with_max_len(title: &str, max_len: usize) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // Start true to avoid leading hyphen

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    if slug.len() > max_len {
        slug.truncate(max_len);
    }
    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Generate an 8-character hex suffix.
#[allow(clippy::cast_possible_truncation)]
fn random_suffix() -> String {
    if USE_DETERMINISTIC_IDS.load(Ordering::SeqCst) {
        let count = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        format!("{count:08x}")
    } else {
        use std::collections::hash_map::RandomState;
        use std::hash::{BuildHasher, Hasher};

        let mut hasher = RandomState::new().build_hasher();
        hasher.write_u64(SEQUENCE.fetch_add(1, Ordering::Relaxed));
        // Truncation is intentional - we only need entropy, not precision
        hasher.write_u64(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| d.as_nanos() as u64),
        );
        format!("{:08x}", hasher.finish() & 0xFFFF_FFFF)
    }
}

/// Generate an ID from a title.
///
/// The ID is the slugified title plus an 8-character hex suffix. Titles with
/// no usable characters fall back to `fallback` as the prefix.
#[must_use]
pub fn generate_id(title: &str, fallback: &str) -> String {
    let slug = slugify(title);
    let suffix = random_suffix();

    if slug.is_empty() {
        format!("{fallback}-{suffix}")
    } else {
        format!("{slug}-{suffix}")
    }
}

/// Generate an ID that `is_taken` does not report as already in use.
#[must_use]
pub fn generate_unique_id(title: &str, fallback: &str, is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_id(title, fallback);
        if !is_taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("To Do"), "to-do");
        assert_eq!(slugify("Sprint 12"), "sprint-12");
        assert_eq!(slugify("done"), "done");
    }

    #[test]
    fn test_slugify_special_characters() {
        assert_eq!(slugify("Fix: login (urgent)!"), "fix-login-urgent");
        assert_eq!(slugify("  In   Progress  "), "in-progress");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_slugify_truncation_removes_trailing_hyphens() {
        let slug = slugify_with_max_len("abc  d", 4);
        assert_eq!(slug, "abc");
    }

    #[test]
    fn test_slugify_default_length() {
        let slug = slugify(&"a".repeat(100));
        assert_eq!(slug.len(), 40);
    }

    #[test]
    #[serial]
    fn test_generate_id_format() {
        enable_deterministic_ids();

        let id = generate_id("Write report", "task");
        assert_eq!(id, "write-report-00000000");

        disable_deterministic_ids();
    }

    #[test]
    #[serial]
    fn test_generate_id_fallback() {
        enable_deterministic_ids();

        assert_eq!(generate_id("???", "column"), "column-00000000");

        disable_deterministic_ids();
    }

    #[test]
    #[serial]
    fn test_generate_unique_id_skips_taken() {
        enable_deterministic_ids();

        let id = generate_unique_id("Backlog", "column", |id| {
            id == "backlog-00000000" || id == "backlog-00000001"
        });
        assert_eq!(id, "backlog-00000002");

        disable_deterministic_ids();
    }

    #[test]
    #[serial]
    fn test_random_ids_differ() {
        disable_deterministic_ids();

        let first = generate_id("same", "task");
        let second = generate_id("same", "task");
        assert!(first.starts_with("same-"));
        assert_eq!(first.len(), "same-".len() + 8);
        assert_ne!(first, second);
    }
}
