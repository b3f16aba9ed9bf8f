//! Property tests for prival decoding and the severity table.

use proptest::prelude::*;
use severity::{
    NO_SUCH_SEVERITY, SEVERITY_MASK, Severity, severity_from_prival, severity_is_invalid,
    severity_to_string, string_to_severity,
};

proptest! {
    #[test]
    fn prival_always_decodes_to_low_bits(prival in any::<i32>()) {
        let severity = severity_from_prival(prival);
        prop_assert_eq!(i32::from(severity), prival & SEVERITY_MASK);
        prop_assert!(!severity_is_invalid(i32::from(severity)));
    }

    #[test]
    fn decoded_prival_always_has_a_name(facility in 0i32..24, level in 0i32..8) {
        let prival = facility * 8 + level;
        let name = severity_to_string(i32::from(severity_from_prival(prival)));
        prop_assert_ne!(name, NO_SUCH_SEVERITY);
        prop_assert_eq!(string_to_severity(name).map(i32::from), Some(level));
    }

    #[test]
    fn is_invalid_matches_from_value(value in any::<i32>()) {
        prop_assert_eq!(severity_is_invalid(value), Severity::from_value(value).is_none());
    }

    #[test]
    fn out_of_range_values_yield_sentinel(value in prop_oneof![i32::MIN..0, 8..i32::MAX]) {
        prop_assert_eq!(severity_to_string(value), NO_SUCH_SEVERITY);
        let record = diagnostics::get_error();
        prop_assert_eq!(record.and_then(|r| r.code()), Some(value));
    }

    #[test]
    fn names_parse_case_insensitively(
        index in 0usize..8,
        upper in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let severity = Severity::ALL[index];
        let name: String = severity
            .as_str()
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        prop_assert_eq!(string_to_severity(&name), Some(severity));
    }

    #[test]
    fn strict_prefixes_never_match(index in 0usize..8, cut in 1usize..7) {
        let name = Severity::ALL[index].as_str();
        prop_assume!(cut < name.len());
        let prefix = &name[..cut];
        // "ERR" is itself a prefix of "ERROR", and "WARN" of "WARNING".
        prop_assume!(prefix.parse::<Severity>().is_err());
        prop_assert_eq!(string_to_severity(prefix), None);
    }
}
