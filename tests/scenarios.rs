use salbp1::{solve, Instance};

fn assert_invariants(instance: &Instance, solution: &salbp1::Solution) {
    // Invariant 5: covers {1..n} exactly once.
    let mut covered: Vec<usize> = solution
        .stations()
        .iter()
        .flat_map(|s| s.tasks().to_vec())
        .collect();
    covered.sort_unstable();
    let expected: Vec<usize> = (1..=instance.task_count()).collect();
    assert_eq!(covered, expected, "stations must partition {{1..n}} exactly once");

    // Invariant 4: every station's load is within the cycle time.
    let durations = instance.durations();
    for station in solution.stations() {
        let load: u64 = station.tasks().iter().map(|&t| durations[t]).sum();
        assert!(
            load <= instance.cycle_time(),
            "station {:?} loads {load}, exceeding cycle time {}",
            station.tasks(),
            instance.cycle_time()
        );
    }

    // Invariant 6: precedence respected across station order.
    let mut station_of = vec![0usize; instance.node_count()];
    for (i, station) in solution.stations().iter().enumerate() {
        for &t in station.tasks() {
            station_of[t] = i;
        }
    }
    for &(u, v) in instance.arcs() {
        if u == Instance::SOURCE || v == instance.sink() {
            continue;
        }
        assert!(
            station_of[u] <= station_of[v],
            "task {u} -> {v} but station({u})={} > station({v})={}",
            station_of[u],
            station_of[v]
        );
    }
}

#[test]
fn scenario_1_three_independent_tasks() {
    let instance = Instance::new(3, &[5, 5, 5], &[], 10).unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 2);
    assert_invariants(&instance, &solution);
}

#[test]
fn scenario_2_chain_of_four() {
    let instance = Instance::new(4, &[4, 4, 4, 4], &[(1, 2), (2, 3), (3, 4)], 10).unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 2);
    assert_invariants(&instance, &solution);
}

#[test]
fn scenario_3_heavy_independent_tasks() {
    let instance = Instance::new(5, &[6, 6, 6, 6, 6], &[], 10).unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 5);
    assert_invariants(&instance, &solution);
}

#[test]
fn scenario_4_diamond_shaped_precedence() {
    let instance = Instance::new(
        5,
        &[3, 3, 4, 5, 5],
        &[(1, 3), (2, 3), (3, 4), (3, 5)],
        10,
    )
    .unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 3);
    assert_invariants(&instance, &solution);
}

#[test]
fn scenario_5_fan_in_fan_out() {
    let instance = Instance::new(
        7,
        &[5, 5, 5, 5, 5, 5, 5],
        &[(1, 4), (2, 4), (3, 4), (4, 5), (4, 6), (4, 7)],
        10,
    )
    .unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 4);
    assert_invariants(&instance, &solution);
}

#[test]
fn scenario_6_mixed_durations_tight_cycle_time() {
    let instance = Instance::new(
        6,
        &[3, 2, 4, 3, 3, 2],
        &[(1, 3), (2, 3), (3, 4), (3, 5), (4, 6), (5, 6)],
        7,
    )
    .unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 3);
    assert_invariants(&instance, &solution);
}

#[test]
fn boundary_single_task_fits_in_one_station() {
    let instance = Instance::new(1, &[6], &[], 10).unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 1);
    assert_invariants(&instance, &solution);
}

#[test]
fn boundary_all_durations_equal_cycle_time_needs_n_stations() {
    let instance = Instance::new(4, &[10, 10, 10, 10], &[], 10).unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 4);
    assert_invariants(&instance, &solution);
}

#[test]
fn boundary_linear_chain_at_cycle_time_needs_n_stations() {
    let instance = Instance::new(5, &[10, 10, 10, 10, 10], &[(1, 2), (2, 3), (3, 4), (4, 5)], 10).unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 5);
    assert_invariants(&instance, &solution);
}

#[test]
fn boundary_independent_tasks_need_ceil_of_total_duration_over_cycle_time() {
    // Total duration 23, cycle time 10 -> ceil(23/10) = 3.
    let instance = Instance::new(5, &[5, 5, 5, 5, 3], &[], 10).unwrap();
    let solution = solve(&instance).unwrap();
    assert_eq!(solution.station_count(), 3);
    assert_invariants(&instance, &solution);
}
