//! Log sanitization utilities
//!
//! Response bodies can carry whole content records (long HTML fragments,
//! rich text). Debug logs only keep a prefix of them.

/// Maximum number of bytes of a body kept in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a body for logging, cutting on a character boundary.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Field names of a submitted form, without their values.
pub fn field_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    names
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log(r#"{"ok":true}"#), r#"{"ok":true}"#);
    }

    #[test]
    fn long_body_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"a".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn multibyte_body_cut_on_boundary() {
        let s = "é".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total 400 bytes]"));
    }

    #[test]
    fn field_names_omit_values() {
        let fields: std::collections::BTreeMap<String, String> =
            [("body".to_string(), "secret text".to_string()), ("title".to_string(), "x".to_string())]
                .into_iter()
                .collect();
        assert_eq!(field_names(fields.keys()), "body,title");
    }
}
