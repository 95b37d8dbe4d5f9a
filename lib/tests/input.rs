use green_vs_red_lib::{
    input::{parse_grid_size, parse_observed_cell, parse_row},
    CellType::{Green, Red},
    Error, ObservedCell,
};

fn malformed(line: &str) -> Error {
    Error::MalformedInput(line.to_string())
}

#[test]
fn grid_size() {
    assert_eq!(parse_grid_size("3,3"), Ok((3, 3)));
    assert_eq!(parse_grid_size("  4 , 999 \n"), Ok((4, 999)));
    assert_eq!(parse_grid_size("0,3"), Err(Error::GridSizeOutOfRange(0, 3)));
    assert_eq!(parse_grid_size("5,4"), Err(Error::GridSizeOutOfRange(5, 4)));
    assert_eq!(
        parse_grid_size("10,1000"),
        Err(Error::GridSizeOutOfRange(10, 1000))
    );
}

#[test]
fn malformed_grid_size() {
    assert_eq!(parse_grid_size("3"), Err(malformed("3")));
    assert_eq!(parse_grid_size("3,3,3"), Err(malformed("3,3,3")));
    assert_eq!(parse_grid_size("a,3"), Err(malformed("a,3")));
    assert_eq!(parse_grid_size("-1,3"), Err(malformed("-1,3")));
    assert_eq!(parse_grid_size("3,10000"), Err(malformed("3,10000")));
    assert_eq!(parse_grid_size("3 3"), Err(malformed("3 3")));
    assert_eq!(parse_grid_size(""), Err(malformed("")));
}

#[test]
fn row() {
    assert_eq!(parse_row(0, "0110", 4), Ok(vec![Red, Green, Green, Red]));
    assert_eq!(parse_row(2, "101\r\n", 3), Ok(vec![Green, Red, Green]));
    assert_eq!(parse_row(2, "101\n", 3), Ok(vec![Green, Red, Green]));
}

#[test]
fn spaces_in_a_row() {
    assert_eq!(
        parse_row(0, " 101", 3),
        Err(Error::RowLengthMismatch {
            row: 0,
            expected: 3,
            found: 4
        })
    );
    assert_eq!(
        parse_row(0, "1 0", 3),
        Err(Error::BadCellValue(" ".to_string()))
    );
}

#[test]
fn row_length_mismatch() {
    assert_eq!(
        parse_row(1, "101", 4),
        Err(Error::RowLengthMismatch {
            row: 1,
            expected: 4,
            found: 3
        })
    );
    assert_eq!(
        parse_row(0, "10101", 4),
        Err(Error::RowLengthMismatch {
            row: 0,
            expected: 4,
            found: 5
        })
    );
}

#[test]
fn bad_cell_value() {
    assert_eq!(
        parse_row(0, "1021", 4),
        Err(Error::BadCellValue(String::from("2")))
    );
    assert_eq!(
        parse_row(0, "1 01", 4),
        Err(Error::BadCellValue(String::from(" ")))
    );
}

#[test]
fn observed_cell() {
    assert_eq!(
        parse_observed_cell("1, 0, 10", 3, 3),
        Ok(ObservedCell::new(1, 0, 10))
    );
    assert_eq!(
        parse_observed_cell("2,3,0", 3, 4),
        Ok(ObservedCell::new(2, 3, 0))
    );
    assert_eq!(
        parse_observed_cell("0,0,18446744073709551615", 1, 1),
        Ok(ObservedCell::new(0, 0, u64::MAX))
    );
}

#[test]
fn observed_cell_out_of_range() {
    assert_eq!(
        parse_observed_cell("5,5,1", 3, 3),
        Err(Error::ObservedCellOutOfRange((5, 5), 3, 3))
    );
    assert_eq!(
        parse_observed_cell("0,3,1", 3, 3),
        Err(Error::ObservedCellOutOfRange((0, 3), 3, 3))
    );
}

#[test]
fn malformed_observed_cell() {
    assert_eq!(parse_observed_cell("1,1", 3, 3), Err(malformed("1,1")));
    assert_eq!(parse_observed_cell("1,1,", 3, 3), Err(malformed("1,1,")));
    assert_eq!(parse_observed_cell("1,1,-2", 3, 3), Err(malformed("1,1,-2")));
    assert_eq!(
        parse_observed_cell("0,0,18446744073709551616", 1, 1),
        Err(malformed("0,0,18446744073709551616"))
    );
}
