use super::*;

#[test]
fn test_pad_right() {
    assert_eq!(pad_right("ab", 4), "ab  ");
    assert_eq!(pad_right("abcdef", 4), "abcdef");
}

#[test]
fn test_format_f64_2() {
    assert_eq!(format_f64_2(251.327412), "251.33");
}
