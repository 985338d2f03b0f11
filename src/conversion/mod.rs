//! Conversion domain module - the snake_case to camelCase rewrite engine
//!
//! This module holds the only piece of real logic in the crate: locating
//! underscore + letter triggers in a line and collapsing them according to a
//! [`CasePolicy`]. Everything here is synchronous and free of I/O.

pub mod converter;
pub mod types;

pub use converter::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_policy_from_str() {
        assert_eq!(CasePolicy::from_str("camel").unwrap(), CasePolicy::Camel);
        assert_eq!(CasePolicy::from_str("CamelCase").unwrap(), CasePolicy::Camel);
        assert_eq!(CasePolicy::from_str("PASCAL").unwrap(), CasePolicy::Pascal);
        assert_eq!(CasePolicy::from_str("upper").unwrap(), CasePolicy::Pascal);
        assert!(CasePolicy::from_str("kebab").is_err());
    }

    #[test]
    fn test_policy_properties() {
        assert_eq!(CasePolicy::default(), CasePolicy::Camel);
        assert_eq!(CasePolicy::Pascal.as_str(), "pascal");
        assert_eq!(CasePolicy::Camel.to_string(), "camel");
        assert_eq!(CasePolicy::all().len(), 2);
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&CasePolicy::Pascal).unwrap();
        assert_eq!(json, "\"pascal\"");
        let policy: CasePolicy = serde_json::from_str("\"camel\"").unwrap();
        assert_eq!(policy, CasePolicy::Camel);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = ConversionStats::default();
        stats.record(&LineConversion {
            text: "fooBar\n".to_string(),
            matches: 1,
        });
        stats.record(&LineConversion {
            text: "plain\n".to_string(),
            matches: 0,
        });

        assert_eq!(stats.lines, 2);
        assert_eq!(stats.matches, 1);
        assert_eq!(stats.changed_lines, 1);
    }
}
