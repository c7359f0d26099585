use anyhow::Result;
use regex::Regex;

/// Turn free text into a single-column CSV: `header`, then every non-empty
/// line of `body` quoted and comma-terminated, minus the final comma.
///
/// `("Name", "a\nb")` → `Name\n"a",\n"b"`
pub fn to_csv(header: &str, body: &str) -> Result<String> {
    let line_break = Regex::new(r"\r?\n")?;

    let fields: Vec<String> = line_break
        .split(body)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{},", quote(line)))
        .collect();

    let mut out = header.trim().to_string();
    if !fields.is_empty() {
        out.push('\n');
        out.push_str(&fields.join("\n"));
        // The last record carries no trailing comma
        out.pop();
    }
    Ok(out)
}

/// Quote a CSV field, doubling embedded quotes.
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(to_csv("Name", "a\nb").unwrap(), "Name\n\"a\",\n\"b\"");
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        assert_eq!(
            to_csv("Name", "\r\nalice\r\n\r\n  bob  \r\n").unwrap(),
            "Name\n\"alice\",\n\"bob\""
        );
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(to_csv("Name", "\n\n").unwrap(), "Name");
    }

    #[test]
    fn test_embedded_quotes() {
        assert_eq!(to_csv("Quote", "say \"hi\"").unwrap(), "Quote\n\"say \"\"hi\"\"\"");
    }
}
