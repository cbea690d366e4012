//! Minimal walkthrough of the polygon API.
//!
//! Builds the 3-4-5 right triangle, prints its area and centroid, then
//! recenters it on the origin and prints the translated vertex list.

use planar::prelude::*;

fn main() {
    let mut triangle = Triangle::new(vec![
        point2(0.0, 0.0),
        point2(4.0, 0.0),
        point2(0.0, 3.0),
    ])
    .expect("three vertices");

    println!("triangle: {triangle}");
    println!("signed area: {}", triangle.signed_area());
    println!("centroid: {}", triangle.centroid());

    triangle.translate_center_to(point2(0.0, 0.0));
    println!("recentered: {triangle}");
    println!("centroid after translation: {}", triangle.centroid());

    let sampled = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed: 7, index: 0 });
    println!(
        "sampled {}-gon area: {}",
        sampled.vertex_count(),
        sampled.signed_area().expect("at least 3 vertices")
    );
}
