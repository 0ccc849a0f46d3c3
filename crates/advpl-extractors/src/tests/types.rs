use crate::base::{ParamType, Parameter};
use crate::types::{InferenceOptions, SeparatorCase, TypeFallback, infer_type, parse_parameters};

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(name: &str, param_type: ParamType) -> Parameter {
        Parameter {
            name: name.to_string(),
            param_type: Some(param_type),
        }
    }

    #[test]
    fn test_hungarian_prefixes() {
        let options = InferenceOptions::default();
        let params = parse_parameters("cName, nTotal, lOk, aItems, dDate, oModel, jBody", &options);
        assert_eq!(
            params,
            vec![
                typed("cName", ParamType::Character),
                typed("nTotal", ParamType::Numeric),
                typed("lOk", ParamType::Logical),
                typed("aItems", ParamType::Array),
                typed("dDate", ParamType::Date),
                typed("oModel", ParamType::Object),
                typed("jBody", ParamType::Json),
            ]
        );
    }

    // Only the leading character is a prefix, so a mid-token capital never types it
    #[test]
    fn test_prefix_is_first_character_only() {
        let param = infer_type("fooCParam", &InferenceOptions::default());
        assert_eq!(param.param_type, Some(ParamType::Undefined));

        let param = infer_type("cFooParam", &InferenceOptions::default());
        assert_eq!(param, typed("cFooParam", ParamType::Character));
    }

    #[test]
    fn test_unknown_prefix_fallbacks() {
        let undefined = InferenceOptions::default();
        assert_eq!(
            infer_type("xValue", &undefined),
            typed("xValue", ParamType::Undefined)
        );

        let omit = InferenceOptions {
            fallback: TypeFallback::Omit,
            ..InferenceOptions::default()
        };
        let param = infer_type("xValue", &omit);
        assert_eq!(param.param_type, None);
        assert_eq!(param.label(), "xValue");
    }

    #[test]
    fn test_explicit_type_wins_over_prefix() {
        let param = infer_type("x as SomeType", &InferenceOptions::default());
        assert_eq!(param, typed("x", ParamType::Named("SomeType".to_string())));
        assert_eq!(param.label(), "x : SomeType");

        let param = infer_type("nCount as Character", &InferenceOptions::default());
        assert_eq!(param.param_type, Some(ParamType::Named("Character".to_string())));
    }

    #[test]
    fn test_separator_case_sensitivity() {
        let sensitive = InferenceOptions::default();
        let param = infer_type("cName AS Character", &sensitive);
        assert_eq!(param, typed("cName AS Character", ParamType::Character));

        let insensitive = InferenceOptions {
            as_separator: SeparatorCase::Insensitive,
            ..InferenceOptions::default()
        };
        let param = infer_type("cName AS Character", &insensitive);
        assert_eq!(param, typed("cName", ParamType::Named("Character".to_string())));

        let param = infer_type("x As SomeType", &insensitive);
        assert_eq!(param, typed("x", ParamType::Named("SomeType".to_string())));
        assert_eq!(param.label(), "x : SomeType");

        // No space before the separator, so nothing splits
        let param = infer_type("xAs SomeType", &insensitive);
        assert_eq!(param, typed("xAs SomeType", ParamType::Undefined));
    }

    #[test]
    fn test_vocabulary_names_after_as_use_the_vocabulary() {
        let param = infer_type("xValue as numeric", &InferenceOptions::default());
        assert_eq!(param, typed("xValue", ParamType::Numeric));
    }

    #[test]
    fn test_empty_tokens_are_dropped_and_order_kept() {
        let params = parse_parameters(" nB , , nA,", &InferenceOptions::default());
        let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["nB", "nA"]);
        assert!(parse_parameters("", &InferenceOptions::default()).is_empty());
        assert!(parse_parameters("   ", &InferenceOptions::default()).is_empty());
    }

    #[test]
    fn test_line_continuations_are_stripped() {
        let params = parse_parameters("cFile,;\n    nMode ;\n", &InferenceOptions::default());
        assert_eq!(
            params,
            vec![typed("cFile", ParamType::Character), typed("nMode", ParamType::Numeric)]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(typed("nA", ParamType::Numeric).label(), "nA : numeric");
        assert_eq!(typed("xA", ParamType::Undefined).label(), "xA : undefined");
    }
}
