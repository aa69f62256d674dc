//! Plugins submitted with `#[derive(AutoRegisterSolver)]` are discovered
//! through `inventory` and can be filtered by tag or year.

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistryBuilder, SolveError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["grid", "test"])]
struct WallCount;

impl AocParser for WallCount {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for WallCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.matches('#').count().to_string())
    }
}

impl PartSolver<2> for WallCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.matches('.').count().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2023, day = 7, tags = ["test"])]
struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for LineCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[test]
fn test_register_all_plugins() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(registry.contains(2024, 3));
    assert!(registry.contains(2023, 7));
    assert_eq!(registry.parts(2024, 3), Some(2));
    assert_eq!(registry.parts(2023, 7), Some(1));

    let mut solver = registry.create_solver(2024, 3, "#.#\n..#").unwrap();
    assert_eq!(solver.solve(1).unwrap(), "3");
    assert_eq!(solver.solve(2).unwrap(), "3");
}

#[test]
fn test_filter_by_tag() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
        .unwrap()
        .build();

    let keys: Vec<_> = registry.keys().collect();
    assert_eq!(keys, vec![(2024, 3)]);
}

#[test]
fn test_filter_by_year() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2023)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2023, 7, "a\nb\nc").unwrap();
    assert_eq!(solver.solve(1).unwrap(), "3");
    assert!(!registry.contains(2024, 3));
}

#[test]
fn test_registering_plugins_twice_is_duplicate() {
    let builder = RegistryBuilder::new().register_all_plugins().unwrap();
    assert!(builder.register_all_plugins().is_err());
}
