use salbp1::{solve, Instance};

#[test]
fn repeated_solves_of_the_same_instance_agree_on_station_count_and_path() {
    let instance = Instance::new(
        7,
        &[5, 5, 5, 5, 5, 5, 5],
        &[(1, 4), (2, 4), (3, 4), (4, 5), (4, 6), (4, 7)],
        10,
    )
    .unwrap();

    let first = solve(&instance).unwrap();
    let second = solve(&instance).unwrap();
    let third = solve(&instance).unwrap();

    assert_eq!(first.station_count(), second.station_count());
    assert_eq!(second.station_count(), third.station_count());
    assert_eq!(first.frontier_path(), second.frontier_path());
    assert_eq!(second.frontier_path(), third.frontier_path());

    for (a, b) in first.stations().iter().zip(second.stations().iter()) {
        assert_eq!(a.tasks(), b.tasks());
    }
}

#[test]
fn repeated_solves_across_distinct_instances_of_the_same_shape_agree() {
    let a = Instance::new(4, &[4, 4, 4, 4], &[(1, 2), (2, 3), (3, 4)], 10).unwrap();
    let b = Instance::new(4, &[4, 4, 4, 4], &[(1, 2), (2, 3), (3, 4)], 10).unwrap();

    let solution_a = solve(&a).unwrap();
    let solution_b = solve(&b).unwrap();

    assert_eq!(solution_a.station_count(), solution_b.station_count());
    assert_eq!(solution_a.frontier_path(), solution_b.frontier_path());
}
