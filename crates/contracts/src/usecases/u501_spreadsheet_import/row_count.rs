/// Data rows of a sheet read back as a grid: non-empty rows minus the header
pub fn count_data_rows<S: AsRef<str>>(grid: &[Vec<S>]) -> usize {
    let non_empty = grid
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.as_ref().trim().is_empty()))
        .count();
    non_empty.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_rows_and_header_are_not_counted() {
        let grid = vec![
            vec!["Año", "Mes"],
            vec!["2024", "3"],
            vec!["", " "],
            vec!["2024", "4"],
        ];
        assert_eq!(count_data_rows(&grid), 2);
        let empty: Vec<Vec<String>> = Vec::new();
        assert_eq!(count_data_rows(&empty), 0);
    }
}
