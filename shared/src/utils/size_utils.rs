#[allow(clippy::cast_precision_loss)]
pub fn human_readable_byte_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{size} {}", UNITS[0])
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::human_readable_byte_size;

    #[test]
    fn test_byte_size() {
        assert_eq!(human_readable_byte_size(0), "0 B");
        assert_eq!(human_readable_byte_size(1023), "1023 B");
        assert_eq!(human_readable_byte_size(512_000), "500.00 KB");
        assert_eq!(human_readable_byte_size(3 * 1024 * 1024), "3.00 MB");
    }
}
