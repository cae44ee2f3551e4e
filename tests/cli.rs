#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::Parser;
    use clockfill::commands::Cli;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("clockfill").chain(args.iter().copied()))
    }

    #[test]
    fn test_accepts_fill_flags() {
        assert!(parse(&[]).is_ok());
        assert!(parse(&["--from", "2025-01-01", "--to", "2025-01-03", "--desc", "X"]).is_ok());
        assert!(parse(&["--from", "2025-01-01", "--to", "2025-01-03", "--desc", "X", "--dry-run", "--include-weekends"]).is_ok());
        assert!(parse(&["--dry-run"]).is_ok());
    }

    #[test]
    fn test_accepts_listing_flags() {
        assert!(parse(&["--list"]).is_ok());
        assert!(parse(&["--list-tags"]).is_ok());
    }

    #[test]
    fn test_env_file_combines_with_any_mode() {
        assert!(parse(&["--env-file", "work.env"]).is_ok());
        assert!(parse(&["--env-file", "work.env", "--list"]).is_ok());
        assert!(parse(&["--env-file", "work.env", "--from", "2025-01-01", "--to", "2025-01-03", "--desc", "X"]).is_ok());

        assert!(parse(&["--env-file"]).is_err());
    }

    #[test]
    fn test_listing_flags_are_exclusive() {
        let err = parse(&["--list", "--list-tags"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["--list", "--from", "2025-01-01"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["--list-tags", "--dry-run"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse(&["--weekly"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
