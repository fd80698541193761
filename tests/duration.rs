#[cfg(test)]
mod tests {
    use shiftdesk::libs::duration::{format_minutes, parse_minutes};

    #[test]
    fn test_parses_both_terms() {
        assert_eq!(parse_minutes("9h 18m"), 558);
        assert_eq!(parse_minutes("0h 0m"), 0);
        assert_eq!(parse_minutes("12h 5m"), 725);
    }

    #[test]
    fn test_single_term() {
        assert_eq!(parse_minutes("45m"), 45);
        assert_eq!(parse_minutes("3h"), 180);
    }

    #[test]
    fn test_empty_and_dash_are_zero() {
        assert_eq!(parse_minutes(""), 0);
        assert_eq!(parse_minutes("-"), 0);
    }

    #[test]
    fn test_garbage_degrades_to_zero() {
        assert_eq!(parse_minutes("n/a"), 0);
        assert_eq!(parse_minutes("h m"), 0);
        assert_eq!(parse_minutes("99999999999999999999999h"), 0);
    }

    #[test]
    fn test_terms_are_found_anywhere() {
        assert_eq!(parse_minutes("worked 8h and 30m"), 510);
        assert_eq!(parse_minutes("30m 2h"), 150);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(558), "9h 18m");
        assert_eq!(parse_minutes(&format_minutes(1441)), 1441);
    }
}
