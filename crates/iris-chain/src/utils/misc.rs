/// Format a duration in seconds as whole minutes, eg. `150 -> "2m"`
pub fn time_in_minutes(seconds: u64) -> String {
    format!("{}m", seconds / 60)
}

/// Convert a css like rgb value to the `number,number,number` form
///
/// `"rgb(239, 51, 116)" -> "239,51,116"`
pub fn format_rgb(color: &str) -> String {
    color
        .split(',')
        .map(|part| part.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
}
