/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(global: Option<u32>, configured: u32) -> u32 {
    global.unwrap_or(configured)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(3), 10), 3);
    }

    #[test]
    fn configured_used_when_flag_missing() {
        assert_eq!(effective_limit(None, 10), 10);
    }
}
