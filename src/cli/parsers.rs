// src/cli/parsers.rs
use user_stats_shared_kernel::{PresentationError, PresentationResult};

/// `--delimiter` の値を 1 バイトに変換する。`\t` と `tab` はタブとして扱う。
pub fn parse_delimiter(s: &str) -> PresentationResult<u8> {
    match s {
        "\\t" | "tab" => return Ok(b'\t'),
        _ => {}
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(PresentationError::InvalidValue {
            flag: "--delimiter".to_string(),
            value: s.to_string(),
            reason: "must be a single ASCII character".to_string(),
        }),
    }
}
