use std::{fs, path::Path};

use anyhow::{Context, Result};
use hex_treasure_world::Grid;
use log::debug;

/// Reads a grid from a JSON file holding an array of rows, where each cell is
/// a label string such as `"Trap 3"` or `null` for an empty cell.
pub(crate) fn load(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read grid file {}", path.display()))?;
    let grid = parse(&text).with_context(|| format!("invalid grid file {}", path.display()))?;
    debug!(
        "loaded {} rows and {} treasures from {}",
        grid.row_count(),
        grid.treasures().len(),
        path.display()
    );
    Ok(grid)
}

fn parse(text: &str) -> Result<Grid> {
    let labels: Vec<Vec<Option<String>>> =
        serde_json::from_str(text).context("grid must be a JSON array of label arrays")?;
    Ok(Grid::from_labels(&labels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_treasure_core::{CellCoord, CellKind};

    #[test]
    fn parses_labels_and_nulls() {
        let grid = parse(r#"[[null, "Trap 3"], ["Treasure", "Reward 2"]]"#).expect("grid parses");

        assert_eq!(grid.kind_at(CellCoord::new(0, 0)), Some(CellKind::Empty));
        assert_eq!(grid.kind_at(CellCoord::new(0, 1)), Some(CellKind::Trap3));
        assert_eq!(grid.treasures(), &[CellCoord::new(1, 0)]);
    }

    #[test]
    fn rejects_unknown_labels() {
        let error = parse(r#"[["Quicksand"]]"#).expect_err("unknown label");
        assert!(error.to_string().contains("Quicksand"));
    }

    #[test]
    fn loads_a_grid_file_from_disk() {
        let path =
            std::env::temp_dir().join(format!("hex-treasure-grid-{}.json", std::process::id()));
        fs::write(&path, r#"[[null, "Treasure"], ["Obstacle", null]]"#).expect("write grid file");

        let loaded = load(&path);
        fs::remove_file(&path).expect("remove grid file");

        let grid = loaded.expect("grid loads");
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.treasures(), &[CellCoord::new(0, 1)]);
    }

    #[test]
    fn missing_file_names_its_path() {
        let error = load(Path::new("does/not/exist.json")).expect_err("missing file");
        assert!(error.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn rejects_non_matrix_json() {
        assert!(parse(r#"{"rows": 3}"#).is_err());
    }
}
