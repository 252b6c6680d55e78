use crate::corpus::model::{IndexData, TypeInfo, WorkInfo};

/// Read-only title and info lookups into the corpus index, handed to views
/// in place of the index itself.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    index: &'a IndexData,
}

impl<'a> Lookup<'a> {
    pub fn new(index: &'a IndexData) -> Self {
        Self { index }
    }

    pub fn work_info(&self, work_index: usize) -> Option<&'a WorkInfo> {
        self.index.works.get(work_index)
    }

    pub fn type_info(&self, type_index: usize) -> Option<&'a TypeInfo> {
        self.index.types.get(type_index)
    }

    pub fn type_title(&self, type_index: usize) -> Option<&'a str> {
        self.type_info(type_index).map(|t| t.title.as_str())
    }

    pub fn value_title(&self, type_index: usize, value_index: usize) -> Option<&'a str> {
        self.type_info(type_index)
            .and_then(|t| t.values.get(value_index))
            .map(|v| v.t.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::model::fixtures;

    #[test]
    fn test_lookups() {
        let index = fixtures::index();
        let lookup = Lookup::new(&index);
        assert_eq!(lookup.work_info(1).map(|w| w.title.as_str()), Some("Odyssey"));
        assert_eq!(lookup.type_title(1), Some("Case"));
        assert_eq!(lookup.value_title(1, 0), Some("Accusative"));
        assert_eq!(lookup.value_title(1, 9), None);
        assert_eq!(lookup.type_title(9), None);
    }
}
