/// Compact counter for profile headers: `2847` becomes `"2.8K"`.
///
/// Tenths are rounded half up, so `1250` is `"1.3K"`.
pub fn format_count(count: u32) -> String {
    if count >= 1000 {
        let tenths = (u64::from(count) + 50) / 100;
        format!("{}.{}K", tenths / 10, tenths % 10)
    } else {
        count.to_string()
    }
}

/// Avatar fallback: the first character of a display name.
pub fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Header avatar fallback: the first character of every space-separated
/// word, `"Alex Rivera"` becomes `"AR"`.
pub fn initials(name: &str) -> String {
    name.split(' ').map(initial).collect()
}
