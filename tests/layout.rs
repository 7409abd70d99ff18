use sentiplot::data::tweet::{TweetId, TweetPoint};
use sentiplot::layout::{run_layout, LayoutParams};

fn points(n: usize) -> Vec<TweetPoint> {
    (0..n)
        .map(|i| TweetPoint {
            id: TweetId(i.to_string()),
            month: 1,
            sentiment: 0.0,
            subjectivity: 0.0,
            raw_text: format!("tweet {i}"),
            x: 0.0,
            y: 0.0,
        })
        .collect()
}

#[test]
fn all_points_end_inside_the_padded_canvas() {
    let params = LayoutParams::default();
    let mut pts = points(120);
    run_layout(&mut pts, &params);
    for p in &pts {
        assert!(
            p.x >= params.padding && p.x <= params.width - params.padding,
            "x out of bounds: {}",
            p.x
        );
        assert!(
            p.y >= params.padding && p.y <= params.height - params.padding,
            "y out of bounds: {}",
            p.y
        );
    }
}

#[test]
fn pairs_end_at_least_min_separation_apart() {
    // Plenty of free area for 40 points on an 800x600 canvas, so the
    // collision constraint must hold (tiny epsilon for the final clamp).
    let params = LayoutParams::default();
    let mut pts = points(40);
    run_layout(&mut pts, &params);
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            let d = ((pts[i].x - pts[j].x).powi(2) + (pts[i].y - pts[j].y).powi(2)).sqrt();
            assert!(
                d >= params.min_separation - 1e-3,
                "points {i} and {j} are only {d} apart"
            );
        }
    }
}

#[test]
fn equal_inputs_give_identical_layouts() {
    let params = LayoutParams::default();
    let mut a = points(60);
    let mut b = points(60);
    run_layout(&mut a, &params);
    run_layout(&mut b, &params);
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!((pa.x, pa.y), (pb.x, pb.y));
    }
}

#[test]
fn a_different_seed_still_satisfies_the_invariants() {
    let params = LayoutParams {
        seed: 12345,
        ..LayoutParams::default()
    };
    let mut pts = points(40);
    run_layout(&mut pts, &params);
    for p in &pts {
        assert!(p.x >= params.padding && p.x <= params.width - params.padding);
        assert!(p.y >= params.padding && p.y <= params.height - params.padding);
    }
}

#[test]
fn empty_input_is_a_no_op() {
    let mut pts = points(0);
    run_layout(&mut pts, &LayoutParams::default());
    assert!(pts.is_empty());
}

#[test]
fn single_point_drifts_toward_center() {
    let params = LayoutParams::default();
    let mut pts = points(1);
    run_layout(&mut pts, &params);
    let (cx, cy) = (params.width / 2.0, params.height / 2.0);
    let d_after = ((pts[0].x - cx).powi(2) + (pts[0].y - cy).powi(2)).sqrt();
    let d_before = (cx * cx + cy * cy).sqrt();
    assert!(d_after < d_before, "point did not move toward center");
    assert!(pts[0].x >= params.padding && pts[0].x <= params.width - params.padding);
}

#[test]
fn tiny_canvas_clamps_everything() {
    // 60x60 canvas with 20 padding leaves a 20x20 playfield; the clamp must
    // hold even though the collision force cannot.
    let params = LayoutParams {
        width: 60.0,
        height: 60.0,
        padding: 20.0,
        ..LayoutParams::default()
    };
    let mut pts = points(25);
    run_layout(&mut pts, &params);
    for p in &pts {
        assert!(p.x >= 20.0 && p.x <= 40.0);
        assert!(p.y >= 20.0 && p.y <= 40.0);
    }
}

#[test]
fn coincident_points_get_separated() {
    // All points start at the origin; without jitter the push direction
    // would be undefined and they would stay stacked.
    let params = LayoutParams::default();
    let mut pts = points(2);
    run_layout(&mut pts, &params);
    let d = ((pts[0].x - pts[1].x).powi(2) + (pts[0].y - pts[1].y).powi(2)).sqrt();
    assert!(d >= params.min_separation - 1e-3, "pair stayed stacked: {d}");
}
