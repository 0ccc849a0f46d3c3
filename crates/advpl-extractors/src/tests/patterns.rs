use crate::base::FunctionPattern;
use crate::error::PatternError;
use crate::patterns::{PatternConfig, PatternSet, SAMPLE_STATIC_FUNCTIONS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_compiles_generic_and_variables_only() {
        let set = PatternSet::try_compile(&PatternConfig::default()).unwrap();
        assert!(set.function(FunctionPattern::Generic).is_some());
        assert!(set.function(FunctionPattern::Static).is_none());
        assert!(set.function(FunctionPattern::User).is_none());
        assert!(set.variables().is_some());
    }

    #[test]
    fn test_blank_rule_is_absent() {
        let config = PatternConfig {
            functions: Some("   ".to_string()),
            ..PatternConfig::default()
        };
        let set = PatternSet::compile(&config);
        assert!(set.function(FunctionPattern::Generic).is_none());
        assert_eq!(set.function_rules().count(), 0);
    }

    #[test]
    fn test_invalid_rule_is_isolated() {
        let config = PatternConfig {
            staticfunctions: Some(r"(Static\s+Function\s+(\w+)\((".to_string()),
            ..PatternConfig::default()
        };

        let set = PatternSet::compile(&config);
        assert!(set.function(FunctionPattern::Static).is_none());
        assert!(set.function(FunctionPattern::Generic).is_some());
        assert!(set.variables().is_some());

        let err = PatternSet::try_compile(&config).unwrap_err();
        assert!(matches!(err, PatternError::Compile { kind: "staticfunctions", .. }));
    }

    #[test]
    fn test_rule_with_too_few_groups_is_rejected() {
        let config = PatternConfig {
            variables: Some(r"Local\s+(\w+)".to_string()),
            ..PatternConfig::default()
        };

        let err = PatternSet::try_compile(&config).unwrap_err();
        match err {
            PatternError::MissingGroups { kind, expected, found } => {
                assert_eq!(kind, "variables");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(PatternSet::compile(&config).variables().is_none());
    }

    #[test]
    fn test_function_rules_follow_scan_order() {
        let config = PatternConfig {
            functions: Some(r"(?m)^()Function[ \t]+(\w+)\(([^)]*)\)".to_string()),
            staticfunctions: Some(SAMPLE_STATIC_FUNCTIONS.to_string()),
            userfunctions: Some(r"(?m)^(User)[ \t]+Function[ \t]+(\w+)\(([^)]*)\)".to_string()),
            variables: None,
        };
        let set = PatternSet::compile(&config);
        let order: Vec<FunctionPattern> = set.function_rules().map(|(p, _)| p).collect();
        assert_eq!(
            order,
            vec![FunctionPattern::Generic, FunctionPattern::Static, FunctionPattern::User]
        );
    }

    #[test]
    fn test_config_keys_deserialize() {
        let json = r#"{ "functions": "(a)(b)(c)", "variables": "" }"#;
        let config: PatternConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.functions.as_deref(), Some("(a)(b)(c)"));
        assert_eq!(config.staticfunctions, None);
        assert_eq!(config.function_rule(FunctionPattern::Generic), Some("(a)(b)(c)"));

        let set = PatternSet::compile(&config);
        assert!(set.variables().is_none());
    }
}
