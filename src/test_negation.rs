#[cfg(test)]
mod negation {
    use crate::*;
    use crate::test_helpers::argv;

    fn check_all_defaults(line: &str, key: &str, expect: bool) {
        let args = ArgTable::from_strings(argv(line));
        for default in [false, true].iter() {
            let got = args.get_bool(key, *default);
            assert!(got == expect, "'{}': {} with default {}: expected {}, got {}",
                line, key, default, expect, got);
        }
    }

    #[test]
    fn bare() {
        check_all_defaults("-noACH", "-ACH", false);
    }

    #[test]
    fn with_one() {
        check_all_defaults("-noACH=1", "-ACH", false);
    }

    #[test]
    fn double_negative() {
        check_all_defaults("-noACH=0", "-ACH", true);
    }

    #[test]
    fn positive_wins() {
        check_all_defaults("-ACH -noACH", "-ACH", true);
        check_all_defaults("-ACH --noACH", "-ACH", true);
        check_all_defaults("-noACH -ACH", "-ACH", true);
        check_all_defaults("-ACH=1 -noACH=1", "-ACH", true);
        check_all_defaults("-noACH=1 -ACH=1", "-ACH", true);
    }

    #[test]
    fn positive_value_wins() {
        check_all_defaults("-ACH=0 -noACH=0", "-ACH", false);
        check_all_defaults("-noACH=0 -ACH=0", "-ACH", false);
    }

    #[test]
    fn negated_key_is_kept() {
        let args = ArgTable::from_strings(argv("-noACH=1"));
        assert!(args.is_set("-noACH"), "the negated key itself should stay queryable");
        assert!(args.get_bool("-noACH", false));
        assert!(args.get_string("-ACH", "") == "0",
            "derived value should be 0, got '{}'", args.get_string("-ACH", ""));
    }

    #[test]
    fn no_alone_is_not_negation() {
        let args = ArgTable::from_strings(argv("-no"));
        assert!(args.keys() == vec!("-no"), "got {:?}", args.keys());
    }

    #[test]
    fn prefix_is_case_sensitive() {
        let args = ArgTable::from_strings(argv("-NoACH -NOfoo"));
        assert!(!args.is_set("-ACH"));
        assert!(!args.is_set("-foo"));
    }

    #[test]
    fn no_cascade() {
        let args = ArgTable::from_strings(argv("-nonoACH"));
        assert!(args.get_bool("-noACH", true) == false, "-nonoACH should derive -noACH");
        assert!(!args.is_set("-ACH"), "derived entries should not derive again");
    }
}
