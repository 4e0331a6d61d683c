pub mod cache_file;
pub mod csv_version;
pub mod serde_version;

use anyhow::{Result, anyhow};

use crate::domain::ListingTable;

pub trait ListingSource {
    // Either produce the listing table OR return an anyhow::error
    fn load(&self) -> Result<ListingTable>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Try each source in order and return the first table that loads, with the signature of its source.
pub fn load_first_available(
    sources: &[Box<dyn ListingSource>],
) -> Result<(ListingTable, &'static str)> {
    for source in sources {
        match source.load() {
            Ok(table) => return Ok((table, source.signature())),
            Err(e) => {
                log::info!("Listing source '{}' failed: {:#}", source.signature(), e);
                // Continue to the next source
            }
        }
    }
    Err(anyhow!("All listing sources failed to load data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct Failing;
    impl ListingSource for Failing {
        fn load(&self) -> Result<ListingTable> {
            bail!("nothing here")
        }
        fn signature(&self) -> &'static str {
            "Failing"
        }
    }

    struct Fixed(&'static str);
    impl ListingSource for Fixed {
        fn load(&self) -> Result<ListingTable> {
            Ok(ListingTable::new(self.0, Vec::new()))
        }
        fn signature(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn test_first_successful_source_wins() {
        let sources: Vec<Box<dyn ListingSource>> =
            vec![Box::new(Failing), Box::new(Fixed("second")), Box::new(Fixed("third"))];
        let (table, signature) = load_first_available(&sources).unwrap();
        assert_eq!(signature, "second");
        assert_eq!(table.name, "second");
    }

    #[test]
    fn test_all_sources_failing_is_an_error() {
        let sources: Vec<Box<dyn ListingSource>> = vec![Box::new(Failing), Box::new(Failing)];
        assert!(load_first_available(&sources).is_err());
        assert!(load_first_available(&[]).is_err());
    }
}
