use time_service::utils::validation::*;

#[cfg(test)]
mod validation_tests {
    use super::*;

    // Timezone normalization tests
    #[test]
    fn test_normalize_restores_plus_signs() {
        assert_eq!(normalize_timezone("Etc/GMT 5"), "Etc/GMT+5");
        assert_eq!(normalize_timezone("Etc/GMT 0"), "Etc/GMT+0");
        assert_eq!(normalize_timezone("Not A Zone"), "Not+A+Zone");
    }

    #[test]
    fn test_normalize_leaves_plain_identifiers_alone() {
        assert_eq!(normalize_timezone("America/New_York"), "America/New_York");
        assert_eq!(normalize_timezone("UTC"), "UTC");
        assert_eq!(normalize_timezone(""), "");
    }

    // Timezone validation tests
    #[test]
    fn test_valid_timezones() {
        let valid_zones = vec![
            "UTC",
            "America/New_York",
            "Europe/Paris",
            "Asia/Tokyo",
            "Etc/GMT+5",
            "Etc/GMT-14",
            "Australia/Lord_Howe",
        ];

        for zone in valid_zones {
            assert!(
                validate_timezone(zone).is_ok(),
                "Should accept timezone: {}",
                zone
            );
        }
    }

    #[test]
    fn test_invalid_timezones() {
        let invalid_zones = vec![
            "",
            "Not+A+Zone",
            "America/Nowhere",
            "america/new_york", // IANA identifiers are case sensitive
            "GMT+25",
            "   ",
        ];

        for zone in invalid_zones {
            assert!(
                validate_timezone(zone).is_err(),
                "Should reject timezone: {}",
                zone
            );
        }
    }

    #[test]
    fn test_validation_error_names_the_value() {
        let error = validate_timezone("Not+A+Zone").unwrap_err();
        assert!(error.to_string().contains("Not+A+Zone"));
    }

    #[test]
    fn test_normalize_then_validate_roundtrip() {
        // The decoded form of an unencoded "Etc/GMT+5" query value
        let zone = validate_timezone(&normalize_timezone("Etc/GMT 5")).unwrap();
        assert_eq!(zone.name(), "Etc/GMT+5");
    }
}
