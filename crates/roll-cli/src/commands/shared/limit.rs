/// Compute effective limit with precedence: global flag -> config default.
#[must_use]
pub fn effective_limit(global: Option<u32>, configured: u32) -> usize {
    usize::try_from(global.unwrap_or(configured)).unwrap_or(usize::MAX)
}

/// Keep at most the effective limit of `items`.
pub fn apply_limit<T>(items: &mut Vec<T>, global: Option<u32>, configured: u32) {
    items.truncate(effective_limit(global, configured));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 50), 5);
    }

    #[test]
    fn configured_default_used_when_flag_missing() {
        assert_eq!(effective_limit(None, 50), 50);
    }

    #[test]
    fn apply_limit_truncates() {
        let mut items = vec![1, 2, 3, 4];
        apply_limit(&mut items, Some(2), 50);
        assert_eq!(items, vec![1, 2]);
    }
}
