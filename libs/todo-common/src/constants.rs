//! Constants for the todo service

/// Default database filename, resolved against the working directory
pub const DATABASE_FILENAME: &str = "todoApplication.db";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Format every due date is normalized to before storage and comparison
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar-date formats accepted from clients, tried in order
pub const ACCEPTED_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%a %b %d %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%a %B %d %Y",
];

/// Date-time formats accepted from clients; only the date part is kept
pub const ACCEPTED_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_filename() {
        assert_eq!(DATABASE_FILENAME, "todoApplication.db");
    }

    #[test]
    fn test_default_port() {
        assert_eq!(DEFAULT_PORT, 3000);
    }

    #[test]
    fn test_storage_format_is_first_accepted_format() {
        assert_eq!(ACCEPTED_DATE_FORMATS[0], STORAGE_DATE_FORMAT);
    }

    #[test]
    fn test_date_formats() {
        assert!(ACCEPTED_DATE_FORMATS.contains(&"%Y/%m/%d"));
        assert!(ACCEPTED_DATE_FORMATS.contains(&"%m/%d/%Y"));
        assert!(ACCEPTED_DATETIME_FORMATS.contains(&"%Y-%m-%dT%H:%M:%S"));
    }

    #[test]
    fn test_full_month_name_formats() {
        for format in ["%B %d %Y", "%B %d, %Y", "%d %B %Y"] {
            assert!(ACCEPTED_DATE_FORMATS.contains(&format), "missing {format}");
        }
    }
}
