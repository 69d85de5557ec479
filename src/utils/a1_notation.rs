//! Helpers for building and reading A1-notation ranges (`'My Tab'!A1:E1`).

/// Quotes a tab name for use in an A1 range.
///
/// Names made only of ASCII letters, digits and underscores (not starting with a
/// digit) are left bare, matching how the Sheets API echoes ranges back.
/// Everything else is wrapped in single quotes with embedded quotes doubled.
pub fn quote_sheet_name(name: &str) -> String {
    let bare = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if bare {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

/// Builds `<tab>!<cells>`.
pub fn range(sheet_name: &str, cells: &str) -> String {
    format!("{}!{}", quote_sheet_name(sheet_name), cells)
}

/// Splits a range into its tab name (unquoted) and cell part.
///
/// A range without `!` has no tab name.
pub fn split_range(range: &str) -> (Option<String>, &str) {
    let Some(bang) = range.rfind('!') else {
        return (None, range);
    };

    let (sheet, cells) = (&range[..bang], &range[bang + 1..]);
    let sheet = match sheet.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
        Some(quoted) => quoted.replace("''", "'"),
        None => sheet.to_string(),
    };

    (Some(sheet), cells)
}

/// Converts a 1-based column number to letters (1 → `A`, 27 → `AA`).
pub fn column_letters(mut column: u32) -> String {
    let mut letters = Vec::new();
    while column > 0 {
        let rem = (column - 1) % 26;
        letters.push(b'A' + rem as u8);
        column = (column - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
