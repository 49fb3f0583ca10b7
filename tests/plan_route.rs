use rand::{SeedableRng, rngs::StdRng};

use townroute::{
    Cell, ImportanceMap, ORIGIN, TownGrid, compute_routes, input, plan_route, reconstruct_path,
    render::{render_overlay, render_path},
    town::LOCATIONS,
};

#[test]
fn scripted_session_produces_route() {
    let mut answers = "4\nHospital\n6\nPark\n2\ndone\n".as_bytes();
    let mut prompts: Vec<u8> = Vec::new();

    let size = input::read_grid_size(&mut answers, &mut prompts).unwrap();
    let town = TownGrid::random(size, &mut StdRng::seed_from_u64(2024)).unwrap();
    let importance = input::read_importance(&mut answers, &mut prompts).unwrap();

    match plan_route(&town, &importance).unwrap() {
        Some(plan) => {
            assert_eq!(plan.target.label, "Hospital");
            assert_eq!(town.find("Hospital"), Some(plan.target.cell));
            assert_eq!(plan.path.first(), Some(&ORIGIN));
            assert_eq!(plan.path.last(), Some(&plan.target.cell));
            assert!(render_overlay(&town, &plan.path).contains("Hospital#"));
        }
        // seeded 4x4 grid without a hospital
        None => assert_eq!(town.find("Hospital"), None),
    }
}

#[test]
fn every_vocabulary_label_can_be_targeted() {
    let town = TownGrid::random(5, &mut StdRng::seed_from_u64(9)).unwrap();

    for label in LOCATIONS {
        let importance = ImportanceMap::from_entries([format!("{label}=100")]).unwrap();
        let plan = plan_route(&town, &importance).unwrap();

        assert_eq!(plan.is_some(), town.find(label).is_some(), "{label}");
        if let Some(plan) = plan {
            assert!(plan.path.windows(2).all(|w| w[0].is_adjacent(&w[1])));
        }
    }
}

#[test]
fn predecessor_map_reconstructs_listed_path() {
    let town = TownGrid::from_rows(vec![
        vec!["School", "Mall", "Park"],
        vec!["Office", "Hospital", "Mall"],
        vec!["Park", "Station", "Library"],
    ])
    .unwrap();
    let importance = ImportanceMap::from_entries(["Library=12", "Hospital=4", "Mall=-1"]).unwrap();

    let routes = compute_routes(&town, &importance).unwrap();
    let path = reconstruct_path(&routes.predecessors(), Cell::new(2, 2));

    assert_eq!(path, routes.path_to(Cell::new(2, 2)).unwrap());
    assert!(path.contains(&Cell::new(1, 1)));
    assert!(render_path(&path).starts_with("[(0, 0), "));
}
