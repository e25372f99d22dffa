use error_trail::stack::Frame;
use error_trail::TrailError;

#[test]
fn single_node_is_level_zero() {
    let mut root = TrailError::new(100101, "connect failed");
    root.with_message("Database error");

    let levels = root.levels();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].index(), 0);
    assert_eq!(levels[0].code(), 100101);
    assert_eq!(levels[0].underlying().to_string(), "connect failed");
    assert_eq!(levels[0].message(), "Database error");
}

#[test]
fn innermost_is_level_zero_and_head_is_highest() {
    let inner = TrailError::new(100101, "connect failed");
    let outer = inner.spawn(100301, "error change err_code");

    let levels = outer.levels();
    assert_eq!(levels.len(), 2);
    assert_eq!((levels[0].index(), levels[0].code()), (0, 100101));
    assert_eq!((levels[1].index(), levels[1].code()), (1, 100301));
}

#[test]
fn most_recent_spawn_has_highest_index() {
    let err = TrailError::new(10, "a").spawn(20, "b").spawn(30, "c").spawn(40, "d");
    let levels = err.levels();

    let pairs: Vec<(usize, u32)> = levels.iter().map(|l| (l.index(), l.code())).collect();
    assert_eq!(pairs, vec![(0, 10), (1, 20), (2, 30), (3, 40)]);
}

#[test]
fn iter_walks_outer_to_inner() {
    let err = TrailError::new(10, "a").spawn(20, "b").spawn(30, "c");
    let codes: Vec<u32> = err.chain().iter().map(TrailError::code).collect();

    assert_eq!(codes, vec![30, 20, 10]);
    assert_eq!(err.chain().depth(), 3);
}

#[test]
fn level_frame_is_first_frame_of_its_node() {
    let inner = TrailError::new(100101, "connect failed");
    let outer = inner.spawn(100301, "error change err_code");

    let levels = outer.levels();
    assert_eq!(levels[0].frame(), outer.cause().unwrap().stack().first());
    assert_eq!(levels[1].frame(), outer.stack().first());
}

#[test]
fn merged_stack_concatenates_inner_first() {
    let inner = TrailError::new(100101, "connect failed");
    let outer = inner.spawn(100301, "error change err_code");

    let inner_frames: Vec<&Frame> = outer.cause().unwrap().stack().iter().collect();
    let outer_frames: Vec<&Frame> = outer.stack().iter().collect();
    let merged = outer.merged_stack();

    assert_eq!(merged.len(), inner_frames.len() + outer_frames.len());
    assert_eq!(&merged[..inner_frames.len()], &inner_frames[..]);
    assert_eq!(&merged[inner_frames.len()..], &outer_frames[..]);
}

#[test]
fn merged_stack_keeps_duplicate_frames() {
    let err = TrailError::new(1, "a").spawn(2, "b").spawn(3, "c");
    let total: usize = err.chain().iter().map(|node| node.stack().len()).sum();

    assert_eq!(err.merged_stack().len(), total);
}
