#[cfg(test)]
mod strings {
    use crate::*;
    use crate::test_helpers::argv;

    #[test]
    fn absent() {
        let args = ArgTable::from_strings(argv(""));
        assert!(args.is_empty(), "expected no keys, got {:?}", args.keys());
        assert!(args.get_string("-ACH", "") == "");
        assert!(args.get_string("-ACH", "eleven") == "eleven");
    }

    #[test]
    fn bare_is_empty_not_default() {
        let args = ArgTable::from_strings(argv("-ACH -bar"));
        assert!(args.get_string("-ACH", "") == "");
        assert!(args.get_string("-ACH", "eleven") == "",
            "bare flag should be empty, got '{}'", args.get_string("-ACH", "eleven"));
    }

    #[test]
    fn trailing_equals_is_empty() {
        let args = ArgTable::from_strings(argv("-ACH="));
        assert!(args.is_set("-ACH"), "-ACH= should still set the key");
        assert!(args.get_string("-ACH", "") == "");
        assert!(args.get_string("-ACH", "eleven") == "");
    }

    #[test]
    fn literal() {
        let args = ArgTable::from_strings(argv("-ACH=11"));
        assert!(args.get_string("-ACH", "") == "11");
        assert!(args.get_string("-ACH", "eleven") == "11");

        let args = ArgTable::from_strings(argv("-ACH=eleven"));
        assert!(args.get_string("-ACH", "") == "eleven");
        assert!(args.get_string("-ACH", "eleven") == "eleven");
    }

    #[test]
    fn splits_on_first_equals() {
        let args = ArgTable::from_strings(argv("-rpc=user=pass -path=a=b=c"));
        assert!(args.get_string("-rpc", "") == "user=pass",
            "got '{}'", args.get_string("-rpc", ""));
        assert!(args.get_string("-path", "") == "a=b=c");
    }

    #[test]
    fn double_dash() {
        let args = ArgTable::from_strings(argv("--ACH=verbose --bar=1"));
        assert!(args.get_string("-ACH", "") == "verbose");
        assert!(args.get_int("-bar", 0) == 1);
        assert!(!args.is_set("--ACH"), "keys should be stored with a single dash");
    }

    #[test]
    fn values_keep_spacing() {
        let args = ArgTable::from_strings(string_vec!("argv[0]", "-name=hello world"));
        assert!(args.get_string("-name", "") == "hello world");
    }
}
