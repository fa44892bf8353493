use questlab_patterns::PatternError;
use questlab_patterns::shapes::{Circle, Rectangle, Shape, Triangle, largest, total_area};
use std::f64::consts::PI;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn circle_area_and_perimeter() {
    let c = Circle::new(2.0).unwrap();
    assert!(close(c.area(), 4.0 * PI));
    assert!(close(c.perimeter(), 4.0 * PI));
}

#[test]
fn rectangle_and_square() {
    let r = Rectangle::new(3.0, 4.0).unwrap();
    assert_eq!(r.describe(), "rectangle: area 12.00, perimeter 14.00");
    let sq = Rectangle::square(2.0).unwrap();
    assert_eq!(sq.name(), "square");
}

#[test]
fn right_triangle_uses_herons_formula() {
    let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
    assert!(close(t.area(), 6.0));
    assert!(close(t.perimeter(), 12.0));
}

#[test]
fn invalid_shapes_are_rejected() {
    assert!(matches!(
        Triangle::new(1.0, 2.0, 3.0),
        Err(PatternError::InvalidTriangle { .. })
    ));
    assert!(matches!(
        Circle::new(-1.0),
        Err(PatternError::InvalidDimension { dimension: "radius", .. })
    ));
    assert!(Circle::new(f64::NAN).is_err());
    assert!(Rectangle::new(1.0, 0.0).is_err());
    assert_eq!(
        Rectangle::new(0.0, 1.0).unwrap_err().to_string(),
        "rectangle: invalid width 0"
    );
}

#[test]
fn mixed_shapes_through_trait_objects() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(3.0, 4.0).unwrap()),
        Box::new(Triangle::new(3.0, 4.0, 5.0).unwrap()),
        Box::new(Circle::new(1.0).unwrap()),
    ];
    assert!(close(total_area(&shapes), 18.0 + PI));
    assert_eq!(largest(&shapes).unwrap().name(), "rectangle");
    assert!(largest(&[]).is_none());
}
