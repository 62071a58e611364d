pub fn get_trimmed_string(value: Option<&str>) -> Option<String> {
    if let Some(v) = value {
        let trimmed = v.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::get_trimmed_string;

    #[test]
    fn test_trimmed() {
        assert_eq!(get_trimmed_string(Some("  en ")), Some("en".to_string()));
        assert_eq!(get_trimmed_string(Some("   ")), None);
        assert_eq!(get_trimmed_string(None), None);
    }
}
