use rand::rngs::SmallRng;
use rand::SeedableRng;
use startup_bust::{
    label_to_index, GameError, Orientation, PlacementEngine, ALPHABET, GRID_LENGTH, MAX_ATTEMPTS,
};

fn indices(labels: &[startup_bust::Label]) -> Vec<usize> {
    labels
        .iter()
        .map(|l| label_to_index(l.as_str(), GRID_LENGTH, ALPHABET).unwrap())
        .collect()
}

#[test]
fn test_place_marks_occupancy() {
    let mut engine = PlacementEngine::new();
    let mut rng = SmallRng::seed_from_u64(42);

    let labels = engine.place(&mut rng, 3).unwrap();
    assert_eq!(labels.len(), 3);
    assert_eq!(engine.occupancy().count_ones(), 3);
    for idx in indices(&labels) {
        assert!(engine.occupancy().get(idx).unwrap());
    }
}

#[test]
fn test_first_placement_is_vertical() {
    let mut engine = PlacementEngine::new();
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(Orientation::for_placement(1), Orientation::Vertical);

    let idx = indices(&engine.place(&mut rng, 3).unwrap());
    assert_eq!(idx[1], idx[0] + GRID_LENGTH);
    assert_eq!(idx[2], idx[1] + GRID_LENGTH);

    let idx = indices(&engine.place(&mut rng, 3).unwrap());
    assert_eq!(idx[1], idx[0] + 1);
    assert_eq!(idx[2], idx[1] + 1);
}

#[test]
fn test_invalid_length() {
    let mut engine = PlacementEngine::new();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(engine.place(&mut rng, 0), Err(GameError::InvalidLength(0)));
    assert_eq!(engine.place(&mut rng, 8), Err(GameError::InvalidLength(8)));
    // rejected lengths do not advance the alternation
    let idx = indices(&engine.place(&mut rng, 3).unwrap());
    assert_eq!(idx[1], idx[0] + GRID_LENGTH);
}

#[test]
fn test_exhausted_attempts_leave_grid_untouched() {
    let mut engine = PlacementEngine::with_max_attempts(0);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        engine.place(&mut rng, 3),
        Err(GameError::PlacementFailed {
            length: 3,
            attempts: 0
        })
    );
    assert!(engine.occupancy().is_empty());
}

#[test]
fn test_fill_until_placement_fails() {
    let mut engine = PlacementEngine::new();
    let mut rng = SmallRng::seed_from_u64(3);
    let mut placed = 0;

    let err = loop {
        let before = engine.occupancy();
        match engine.place(&mut rng, 3) {
            Ok(labels) => {
                placed += 1;
                assert!((before & engine.occupancy()) == before);
                assert_eq!(engine.occupancy().count_ones(), before.count_ones() + 3);
                for idx in indices(&labels) {
                    assert!(!before.get(idx).unwrap(), "cell {} placed twice", idx);
                }
            }
            Err(e) => {
                assert_eq!(engine.occupancy(), before);
                break e;
            }
        }
        // 49 cells hold at most 16 startups of length 3
        assert!(placed <= 16);
    };

    assert_eq!(
        err,
        GameError::PlacementFailed {
            length: 3,
            attempts: MAX_ATTEMPTS
        }
    );
}

#[test]
fn test_full_row_cannot_cross_full_column() {
    let mut engine = PlacementEngine::new();
    let mut rng = SmallRng::seed_from_u64(11);

    let column = indices(&engine.place(&mut rng, GRID_LENGTH).unwrap());
    assert!(column[0] < GRID_LENGTH);
    assert_eq!(*column.last().unwrap(), column[0] + GRID_LENGTH * (GRID_LENGTH - 1));

    // every full row shares one cell with the column
    assert_eq!(
        engine.place(&mut rng, GRID_LENGTH),
        Err(GameError::PlacementFailed {
            length: GRID_LENGTH,
            attempts: MAX_ATTEMPTS
        })
    );
    assert_eq!(engine.occupancy().count_ones(), GRID_LENGTH);
}
