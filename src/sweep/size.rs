use crate::error::{Result, SweepError};

/// Parse a size string like "2G", "500M", "1024K" into bytes
pub(crate) fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim();

    // Raw byte counts need no suffix handling
    if let Ok(bytes) = s.parse::<u64>() {
        return Ok(bytes);
    }

    let split_pos = s
        .char_indices()
        .find(|(_, ch)| ch.is_alphabetic())
        .map_or(s.len(), |(i, _)| i);
    let (num_part, suffix) = s.split_at(split_pos);

    if num_part.is_empty() {
        return Err(SweepError::InvalidSize(
            s.to_string(),
            "No number found".to_string(),
        ));
    }

    let multiplier = match suffix.to_uppercase().as_str() {
        "B" | "" => 1,
        "K" | "KB" | "KIB" => 1024,
        "M" | "MB" | "MIB" => 1024 * 1024,
        "G" | "GB" | "GIB" => 1024 * 1024 * 1024,
        "T" | "TB" | "TIB" => 1024_u64.pow(4),
        _ => {
            return Err(SweepError::InvalidSize(
                s.to_string(),
                format!("Unknown size suffix: {suffix}"),
            ));
        }
    };

    let base: f64 = num_part.parse().map_err(|_| {
        SweepError::InvalidSize(s.to_string(), "Invalid number format".to_string())
    })?;

    Ok((base * multiplier as f64) as u64)
}

/// Format size in human-readable format
pub(crate) fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit_idx])
    }
}
