//! Thousands grouping of the memory field, as the form displays it while typing.

use composer_domain::constants::GROUP_SEPARATOR;

/// Removes every grouping separator.
///
/// ```rust
/// assert_eq!(composer_memory::strip_separators("8,388,608"), "8388608");
/// ```
#[must_use]
pub fn strip_separators(raw: &str) -> String {
    raw.chars().filter(|c| *c != GROUP_SEPARATOR).collect()
}

/// Regroups typed text into thousands, e.g. `5242880` or `52,42,880` into `5,242,880`.
///
/// Text that contains anything but digits and separators is returned untouched so the
/// validator can report it.
#[must_use]
pub fn group_digits(raw: &str) -> String {
    let digits = strip_separators(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_owned();
    }
    insert_separators(&digits)
}

/// Formats a number with thousands separators.
#[must_use]
pub fn grouped(value: u64) -> String {
    insert_separators(&value.to_string())
}

fn insert_separators(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
