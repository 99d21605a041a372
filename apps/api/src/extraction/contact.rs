use std::sync::LazyLock;

use regex::Regex;

use crate::models::profile::ContactInfo;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}")
        .expect("email pattern should compile")
});

// A maximal run of digit groups joined by at most one `-`, `.` or space, with an
// optional leading `+`. Leftmost-first greedy matching means a run is never
// preceded or followed by another digit.
static PHONE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?[0-9]+(?:[-. ]?[0-9]+)*").expect("phone run pattern should compile")
});

static DIGIT_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit group pattern should compile"));

const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=11;

/// Extracts emails and phone numbers from the whole text.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        emails: extract_emails(text),
        phones: extract_phones(text),
    }
}

/// All email matches in document order. Duplicates are kept.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Separated groups shorter than this are never glued into a number.
const MIN_PHONE_GROUP: usize = 3;

/// Group lengths of a separated number with no country code, e.g. `555 123 4567`.
const LOCAL_SHAPE: [usize; 3] = [3, 3, 4];

/// Digit-only phone numbers of exactly 10 or 11 digits, in document order.
///
/// Each run is resolved in this order:
/// 1. Digit groups that are 10 or 11 digits on their own, taken as they are.
/// 2. The whole run, when it totals 10 or 11 digits and every group is at least
///    three digits long, apart from a `+` country code (`+1 555 123 4567`).
/// 3. Consecutive `3-3-4` groups inside a longer run (`555 123 4567 2019`).
pub fn extract_phones(text: &str) -> Vec<String> {
    PHONE_RUN
        .find_iter(text)
        .flat_map(|run| {
            let groups: Vec<&str> = DIGIT_GROUP
                .find_iter(run.as_str())
                .map(|g| g.as_str())
                .collect();
            phones_in_run(run.as_str(), &groups)
        })
        .collect()
}

fn phones_in_run(run: &str, groups: &[&str]) -> Vec<String> {
    let standalone: Vec<String> = groups
        .iter()
        .filter(|g| PHONE_DIGITS.contains(&g.len()))
        .map(|g| g.to_string())
        .collect();
    if !standalone.is_empty() {
        return standalone;
    }

    let total: usize = groups.iter().map(|g| g.len()).sum();
    if PHONE_DIGITS.contains(&total) && is_separated_number(run, groups) {
        return vec![groups.concat()];
    }

    let mut found = Vec::new();
    let mut i = 0;
    while i + LOCAL_SHAPE.len() <= groups.len() {
        let window = &groups[i..i + LOCAL_SHAPE.len()];
        if window.iter().map(|g| g.len()).eq(LOCAL_SHAPE) {
            found.push(window.concat());
            i += LOCAL_SHAPE.len();
        } else {
            i += 1;
        }
    }
    found
}

fn is_separated_number(run: &str, groups: &[&str]) -> bool {
    let body = match groups.split_first() {
        Some((_, rest)) if run.starts_with('+') => rest,
        _ => groups,
    };
    body.len() > 1 && body.iter().all(|g| g.len() >= MIN_PHONE_GROUP)
}
