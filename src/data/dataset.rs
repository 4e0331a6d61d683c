//! Process-wide listing table.
//!
//! The table is loaded once at startup and shared read-only for the rest of the
//! process. There is no invalidation: the source file is static while we run.

use std::sync::OnceLock;

use anyhow::Result;

use crate::domain::ListingTable;

static LISTINGS: OnceLock<ListingTable> = OnceLock::new();

/// Return the process-wide table, running `load` only if nothing is installed yet.
/// Later calls never invoke their loader.
pub fn load_once<F>(load: F) -> Result<&'static ListingTable>
where
    F: FnOnce() -> Result<ListingTable>,
{
    if let Some(table) = LISTINGS.get() {
        return Ok(table);
    }
    let table = load()?;
    log::info!("Listing table '{}' loaded: {} rows", table.name, table.len());
    // A concurrent initialiser may have won; either way the installed table is returned.
    Ok(LISTINGS.get_or_init(move || table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::Cell;

    // Only one test may touch the process-wide cell.
    #[test]
    fn test_loader_runs_once() {
        let calls = Cell::new(0);

        let failed = load_once(|| {
            calls.set(calls.get() + 1);
            bail!("transient failure")
        });
        assert!(failed.is_err());
        assert!(LISTINGS.get().is_none(), "a failed load must not install anything");

        let first = load_once(|| {
            calls.set(calls.get() + 1);
            Ok(ListingTable::new("first", Vec::new()))
        })
        .unwrap();
        let second = load_once(|| {
            calls.set(calls.get() + 1);
            Ok(ListingTable::new("second", Vec::new()))
        })
        .unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(first.name, "first");
        assert!(std::ptr::eq(first, second));
        assert!(LISTINGS.get().is_some());
    }
}
