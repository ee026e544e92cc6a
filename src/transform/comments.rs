//! Comment marker conversion.
//!
//! API documentation often shows JSON samples annotated with `//` comments.
//! [`convert_comments`] rewrites those markers as `#` so the sample can be
//! pasted into Python or YAML.

/// Convert `//` comment markers to `#`, line by line.
///
/// - A line whose text before `//` is blank becomes `<indent># <comment>`.
/// - A line whose code before `//` ends with a comma becomes
///   `<code>  # <comment>`.
/// - Any other line containing `//` is left untouched.
///
/// # Example
///
/// ```
/// use cliptools::transform::convert_comments;
///
/// let json = "{\n  // user id\n  \"id\": 1, // required\n}";
/// assert_eq!(
///     convert_comments(json),
///     "{\n  # user id\n  \"id\": 1,  # required\n}"
/// );
/// ```
pub fn convert_comments(text: &str) -> String {
    text.split('\n')
        .map(convert_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn convert_line(line: &str) -> String {
    let Some(index) = line.find("//") else {
        return line.to_string();
    };

    let (code, comment) = (&line[..index], line[index + 2..].trim());

    if code.trim().is_empty() {
        return format!("{}# {}", code, comment);
    }

    let code = code.trim_end();
    if code.ends_with(',') {
        return format!("{}  # {}", code, comment);
    }

    line.to_string()
}
