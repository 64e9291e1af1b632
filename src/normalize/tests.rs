use crate::{Options, RangePolicy, Split, normalize_split, normalize_split_with, to_percent_number};

fn split(peak: Option<u8>, off_peak: Option<u8>) -> Split {
    Split::new(peak, off_peak)
}

#[test]
fn percent_examples() {
    // (expected, input)
    let cases: Vec<(Option<u8>, Option<&str>)> = vec![
        (None, None),
        (None, Some("")),
        (Some(70), Some("70%")),
        (Some(100), Some("130%")),
        (Some(0), Some("-5%")),
        (Some(70), Some("0.7")),
        (Some(70), Some("70")),
        (None, Some("150")),
        (Some(50), Some("0.5")),
        (Some(1), Some("0.005")),
        (Some(0), Some("0.004")),
        (Some(28), Some("0.285")),
        (Some(100), Some("1")),
        (Some(2), Some("2")),
        (Some(45), Some(" 45 ")),
        (Some(70), Some("0070")),
        (None, Some("seventy")),
        (None, Some("70 percent")),
        // browser trim also strips the byte-order mark
        (Some(70), Some("\u{feff}70")),
        (Some(30), Some("30%\u{feff}")),
    ];

    for (expected, input) in cases {
        assert_eq!(to_percent_number(input), expected, "input={input:?}");
    }
}

#[test]
fn overflowing_percent_literal_is_missing() {
    let huge = format!("{}%", "9".repeat(400));
    assert_eq!(to_percent_number(Some(&huge)), None);
    assert_eq!(normalize_split(Some(&format!("{huge},30%"))), split(None, Some(30)));
}

#[test]
fn split_examples() {
    let cases: Vec<(Split, Option<&str>)> = vec![
        (split(None, None), None),
        (split(None, None), Some("")),
        (split(None, None), Some("   ")),
        // positional arrays
        (split(Some(70), Some(30)), Some(r#"["70%","30%"]"#)),
        (split(Some(70), Some(30)), Some("[70, 30]")),
        (split(Some(70), Some(30)), Some(r#"["0.7","0.3"]"#)),
        (split(Some(70), Some(30)), Some("[[70], [30]]")),
        (split(None, Some(30)), Some(r#"[null, "30%"]"#)),
        (split(None, None), Some("[true, false]")),
        (split(None, None), Some("[70, 20, 10]")),
        (split(None, None), Some("[]")),
        // labeled arrays
        (split(Some(70), Some(30)), Some(r#"[{"label":"peak","value":"70%"},{"label":"offPeak","value":"30%"}]"#)),
        (split(Some(65), Some(35)), Some(r#"[{"name":"Off_Peak","val":0.35},{"name":"PEAK","val":0.65}]"#)),
        (split(Some(60), None), Some(r#"[{"label":"peak","amount":"60"},{"label":"shoulder","amount":"40"}]"#)),
        (split(None, Some(40)), Some(r#"[{"label":"offpeak","data":"40%"}]"#)),
        (split(None, None), Some(r#"[{"label":"peak"},{"label":"offpeak","value":null}]"#)),
        (split(None, None), Some(r#"[{"label":"day","value":"70"},{"label":"night","value":"30"}]"#)),
        // records
        (split(Some(70), Some(30)), Some(r#"{"peak":"0.7","offPeak":"0.3"}"#)),
        (split(Some(70), Some(30)), Some(r#"{"peakRate":70,"off_peak":30}"#)),
        (split(Some(55), None), Some(r#"{"peakValue":"55%"}"#)),
        (split(None, Some(45)), Some(r#"{"offValue":0.45}"#)),
        (split(None, None), Some(r#"{"day":70,"night":30}"#)),
        (split(None, None), Some(r#"{"peak":null,"offPeak":null}"#)),
        (split(None, Some(30)), Some(r#"{"peak":{"v":70},"offPeak":"30"}"#)),
        (split(None, None), Some(r#"{"peak":"150","offPeak":"-1"}"#)),
        // lenient decoding keeps the structure around unrepresentable values
        (split(None, Some(30)), Some(r#"[1e400,"30%"]"#)),
        (split(None, Some(30)), Some(r#"{"peak":1e400,"offPeak":"30%"}"#)),
        (split(None, Some(30)), Some(r#"{"peak":-1e400,"offPeak":0.3}"#)),
        (split(None, Some(30)), Some(r#"["\ud800","30%"]"#)),
        (split(Some(70), None), Some(r#"{"peak":"70","offPeak":"\udfff"}"#)),
        (split(Some(70), Some(30)), Some("\u{feff}[70, 30]")),
        // plain text
        (split(Some(70), Some(30)), Some("70,30")),
        (split(Some(70), Some(30)), Some(" 70% , 30% ")),
        (split(Some(70), None), Some("70,")),
        (split(None, Some(30)), Some(",30")),
        (split(Some(55), None), Some("55")),
        (split(None, None), Some("not json, not csv, just 55")),
        (split(None, Some(30)), Some("[70,30")),
        (split(None, None), Some("{peak: 70}")),
    ];

    for (expected, input) in cases {
        assert_eq!(normalize_split(input), expected, "input={input:?}");
    }
}

#[test]
fn every_side_is_a_whole_percent() {
    let inputs = [
        "[\"99.6%\",\"0.001\"]",
        "{\"peak\":\"100\",\"offPeak\":\"1e-9\"}",
        "1000%,-1000%",
        "0x64,0b1",
        "99.5,0.995",
    ];

    for input in inputs {
        let out = normalize_split(Some(input));
        for side in [out.peak, out.off_peak].into_iter().flatten() {
            assert!(side <= 100, "input={input:?} out={out:?}");
        }
    }
}

#[test]
fn normalizing_rendered_output_is_stable() {
    let inputs = [
        r#"["70%","30%"]"#,
        r#"{"peak":"0.01","offPeak":"0.99"}"#,
        "1,0",
        "55",
        r#"[{"label":"offpeak","value":"12"}]"#,
        "garbage",
    ];

    for input in inputs {
        let first = normalize_split(Some(input));
        let second = normalize_split(Some(&first.to_string()));
        assert_eq!(first, second, "input={input:?} rendered={first}");
    }
}

#[test]
fn clamp_policy_only_changes_out_of_range_numbers() {
    let clamp = Options { range_policy: RangePolicy::Clamp };

    assert_eq!(normalize_split_with(Some(r#"{"peak":"150","offPeak":"-1"}"#), &clamp), split(Some(100), Some(0)));
    assert_eq!(normalize_split_with(Some("70,30"), &clamp), split(Some(70), Some(30)));
    assert_eq!(normalize_split_with(Some("abc,def"), &clamp), split(None, None));
}
