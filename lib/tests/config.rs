use green_vs_red_lib::{Config, Error, DEFAULT_MAX_CELLS};
use std::error::Error as StdError;

#[test]
fn default() {
    let config = Config::default();
    assert_eq!((config.height, config.width), (3, 3));
    assert!(config.rows.is_empty());
    assert_eq!(config.max_cells, DEFAULT_MAX_CELLS);
    assert_eq!(config.seed, None);
}

#[test]
fn blinker() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(3, 3)
        .set_rows(["000", "111", "000"])
        .set_observed_cell(0, 1, 10);
    assert_eq!(config.run()?, 5);
    Ok(())
}

#[test]
fn missing_rows() {
    let config = Config::new(3, 3)
        .set_rows(["000", "111"])
        .set_observed_cell(0, 1, 10);
    assert_eq!(config.run(), Err(Error::MissingRow(2)));
}

#[test]
fn extra_rows() {
    let config = Config::new(2, 3)
        .set_rows(["000", "111", "000"])
        .set_observed_cell(0, 1, 10);
    assert_eq!(config.run(), Err(Error::RowOutOfRange(2, 2)));
}

#[test]
fn too_many_generations() {
    let config = Config::new(1, 1)
        .set_rows(["1"])
        .set_observed_cell(0, 0, 11)
        .set_max_cells(10);
    assert_eq!(
        config.run(),
        Err(Error::TooManyGenerations {
            generations: 11,
            cells: 12,
            max_cells: 10
        })
    );
}

#[test]
fn seeded() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(20, 30)
        .set_seed(42)
        .set_observed_cell(10, 10, 20);
    let first = config.simulation()?;
    let second = config.simulation()?;
    assert_eq!(first.generation_zero(), second.generation_zero());

    let green = first.generation_zero().unwrap().green_count();
    assert!(green > 0 && green < 600);

    let other = config.clone().set_seed(43).simulation()?;
    assert_ne!(first.generation_zero(), other.generation_zero());
    Ok(())
}

#[test]
fn rows_win_over_seed() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(1, 3)
        .set_rows(["111"])
        .set_seed(7)
        .set_observed_cell(0, 1, 3);
    assert_eq!(config.simulation()?.generation_zero().unwrap().green_count(), 3);
    assert_eq!(config.run()?, 2);
    Ok(())
}

#[test]
fn no_rows_no_seed() {
    assert_eq!(Config::new(2, 2).run(), Err(Error::MissingRow(0)));
}

#[test]
#[cfg(feature = "serde")]
fn json() -> Result<(), Box<dyn StdError>> {
    let config: Config = serde_json::from_str(
        r#"{
            "height": 4,
            "width": 4,
            "rows": ["1001", "1111", "0100", "1010"],
            "x": 2,
            "y": 2,
            "generations": 15
        }"#,
    )?;
    assert_eq!(config.max_cells, DEFAULT_MAX_CELLS);
    assert_eq!(config.run()?, 14);
    Ok(())
}
