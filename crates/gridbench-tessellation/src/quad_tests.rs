//! Tests for the S2 adapter.

use s2::cell::Cell;
use s2::rect::Rect;
use s2::region::Region;

use gridbench_test::polygons::{degenerate, square, square_with_hole};

use super::*;

#[test]
fn test_pinned_level_emits_only_that_level() {
    let covering = QuadDiscretizer::new()
        .discretize(&square(10.0, 10.0, 0.5), &QuadParams::at_level(9, 8, 1))
        .unwrap();

    assert!(!covering.is_empty());
    let counts = covering.level_counts();
    assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec![9]);
}

#[test]
fn test_budget_caps_free_covering() {
    let params = QuadParams {
        min_level: 0,
        max_level: 30,
        max_cells: 8,
        level_mod: 1,
    };
    let covering = QuadDiscretizer::new()
        .discretize(&square(10.0, 10.0, 0.5), &params)
        .unwrap();

    assert!(!covering.is_empty());
    assert!(covering.len() <= 8, "got {} cells", covering.len());
}

#[test]
fn test_finer_level_uses_more_cells() {
    let adapter = QuadDiscretizer::new();
    let polygon = square(37.7, -122.5, 0.2);
    let coarse = adapter.discretize(&polygon, &QuadParams::at_level(8, 8, 1)).unwrap();
    let fine = adapter.discretize(&polygon, &QuadParams::at_level(11, 8, 1)).unwrap();
    assert!(fine.len() > coarse.len());
}

#[test]
fn test_covering_is_deterministic_as_a_set() {
    let adapter = QuadDiscretizer::new();
    let params = QuadParams::at_level(10, 8, 1);
    let polygon = square(-20.0, 30.0, 0.3);
    assert_eq!(
        adapter.discretize(&polygon, &params).unwrap(),
        adapter.discretize(&polygon, &params).unwrap()
    );
}

#[test]
fn test_hole_reduces_covering() {
    let adapter = QuadDiscretizer::new();
    let params = QuadParams::at_level(12, 8, 1);

    let full = adapter.discretize(&square(10.0, 10.0, 0.4), &params).unwrap();
    let holed = adapter
        .discretize(&square_with_hole(10.0, 10.0, 0.4), &params)
        .unwrap();

    assert!(holed.len() < full.len());
    assert!(holed.iter().all(|cell| full.contains(cell)));
}

#[test]
fn test_square_covering_only_touches_the_square() {
    let adapter = QuadDiscretizer::new();
    let cases = [((37.7, -122.5), 0.2, [4, 9, 13]), ((60.0, 5.0), 2.0, [4, 8, 11])];

    for ((lat, lng), size, levels) in cases {
        let polygon = square(lat, lng, size);
        let rect = Rect::from_degrees(lat, lng, lat + size, lng + size);

        for level in levels {
            let params = QuadParams::at_level(level, 8, 1);
            let covering = adapter.discretize(&polygon, &params).unwrap();

            for cell in covering.iter() {
                assert!(
                    rect.intersects_cell(&Cell::from(cell.cell_id())),
                    "level {level}: {} lies outside the square",
                    cell.to_token()
                );
            }

            let reference = RegionCoverer {
                min_level: level,
                max_level: level,
                level_mod: 1,
                max_cells: 8,
            }
            .covering(&rect);
            assert!(!reference.0.is_empty());
            for id in reference.0 {
                assert!(
                    covering.contains(&QuadCell::from(id)),
                    "level {level}: missing {}",
                    QuadCell::from(id).to_token()
                );
            }
        }
    }
}

#[test]
fn test_invalid_params() {
    let adapter = QuadDiscretizer::new();
    let polygon = square(0.0, 0.0, 1.0);
    let cases = [
        QuadParams { min_level: 5, max_level: 4, max_cells: 8, level_mod: 1 },
        QuadParams { min_level: 0, max_level: 4, max_cells: 8, level_mod: 0 },
        QuadParams { min_level: 0, max_level: 4, max_cells: 8, level_mod: 4 },
        QuadParams { min_level: 0, max_level: 4, max_cells: 0, level_mod: 1 },
    ];
    for params in cases {
        let err = adapter.discretize(&polygon, &params).unwrap_err();
        assert!(matches!(err, DiscretizeError::InvalidParams(_)), "{params:?}");
    }

    let err = adapter
        .discretize(&polygon, &QuadParams::at_level(31, 8, 1))
        .unwrap_err();
    assert!(matches!(
        err,
        DiscretizeError::InvalidResolution { resolution: 31, .. }
    ));
}

#[test]
fn test_degenerate_exterior_is_an_error() {
    let err = QuadDiscretizer::new()
        .discretize(&degenerate(), &QuadParams::at_level(5, 8, 1))
        .unwrap_err();
    assert_eq!(err, DiscretizeError::DegenerateExterior { points: 1 });
}

#[test]
fn test_face_tokens() {
    assert_eq!(QuadCell::from(CellID::from_face(0)).to_token(), "1");
    assert_eq!(QuadCell::from(CellID::from_face(1)).to_token(), "3");
    assert_eq!(QuadCell::from_token("1").unwrap().level(), 0);
}

#[test]
fn test_token_round_trip() {
    let covering = QuadDiscretizer::new()
        .discretize(&square(37.7, -122.5, 0.2), &QuadParams::at_level(13, 8, 1))
        .unwrap();
    for cell in covering.iter() {
        let token = cell.to_token();
        assert_eq!(QuadCell::from_token(&token), Ok(*cell));
    }
}

#[test]
fn test_invalid_tokens() {
    for token in ["", "X", "zz", "0", "11111111111111111", "f"] {
        assert!(QuadCell::from_token(token).is_err(), "{token}");
    }
}

#[test]
fn test_scheme() {
    assert_eq!(QuadDiscretizer::default().scheme(), SchemeKind::S2);
    assert_eq!(QuadParams::at_level(13, 8, 1).resolution(), 13);
}
