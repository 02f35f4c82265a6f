use base::Vec2;

#[test]
fn test_area() {
    assert_eq!(Vec2::new(640usize, 480).area(), 307200);
}

#[test]
fn test_is_empty() {
    assert!(Vec2::<usize>::zero().is_empty());
    assert!(Vec2::new(0usize, 480).is_empty());
    assert!(!Vec2::new(1usize, 1).is_empty());
}

#[test]
fn test_display() {
    assert_eq!(Vec2::new(1280usize, 720).to_string(), "1280x720");
}
