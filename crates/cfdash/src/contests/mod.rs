use cfdash_core::contest::extract_contest_id;

use crate::prelude::*;

pub mod cache;
pub mod fav;
pub mod list;
pub mod show;

// Re-export public data functions
pub use fav::{favorites_data, toggle_data};
pub use list::list_data;
pub use show::show_data;

/// Accept a contest id or a contest URL
pub fn parse_contest_arg(input: &str) -> Result<u64> {
    Ok(extract_contest_id(input)?)
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contest_arg() {
        assert_eq!(parse_contest_arg("1900").unwrap(), 1900);
        assert_eq!(
            parse_contest_arg("https://codeforces.com/contest/1900/problem/A").unwrap(),
            1900
        );
        assert!(parse_contest_arg("round nine hundred").is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("Codeforces Round", 10), "Codeforces...");
        assert_eq!(truncate_text("Раунд Кодфорсес", 5), "Раунд...");
    }
}
