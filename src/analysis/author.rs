/// Authors affiliated with MBRAS get a bonus on positive sentiment and
/// influence. External specialists are excluded from the affiliation.
#[must_use]
pub fn is_privileged_author(user_id: &str) -> bool {
    let lowered = user_id.to_lowercase();
    lowered.contains("mbras") && !lowered.contains("especialista")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privileged_detection() {
        assert!(is_privileged_author("user_mbras_ana"));
        assert!(is_privileged_author("USER_MBRAS_ANA"));
        assert!(!is_privileged_author("user_mbras_especialista"));
        assert!(!is_privileged_author("user_ana"));
    }
}
