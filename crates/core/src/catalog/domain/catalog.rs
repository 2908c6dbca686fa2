use super::catalog_entry::CatalogEntry;
use super::dataset_error::DatasetError;

/// Ordered, append-only collection of entries, in corpus scan order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&CatalogEntry, DatasetError> {
        self.entries.get(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            size: self.entries.len(),
        })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
