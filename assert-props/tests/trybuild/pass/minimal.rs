use assert_props::{Described, Properties};

#[derive(Properties)]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    assert_eq!(Point::properties().len(), 2);
    let _ = Point { x: 0, y: 0 }.x;
    let _ = Point { x: 0, y: 0 }.y;
}
