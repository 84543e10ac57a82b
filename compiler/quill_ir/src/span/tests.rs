use super::*;

#[test]
fn test_span_from_range() {
    assert_eq!(Span::from_range(10..20), Span::new(10, 20));
    assert_eq!(format!("{}", Span::new(7, 7)), "7..7");
}

#[test]
fn test_span_from_range_saturates() {
    assert_eq!(Span::from_range(3..usize::MAX), Span::new(3, u32::MAX));
}
