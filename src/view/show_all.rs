//! Truncation of long lists with an on-demand "show all".

/// How many items of a list to show, given the current expansion flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowItems {
    pub limit: usize,
    pub loading: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowItemInfo {
    pub visible: usize,
    pub hidden: usize,
    /// Expansion was requested and is drawn on the next tick.
    pub loading: bool,
}

impl ShowItems {
    pub fn info(&self, total: usize) -> ShowItemInfo {
        let visible = if self.expanded {
            total
        } else {
            total.min(self.limit)
        };
        ShowItemInfo {
            visible,
            hidden: total - visible,
            loading: self.loading && visible < total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(loading: bool, expanded: bool) -> ShowItems {
        ShowItems {
            limit: 10,
            loading,
            expanded,
        }
    }

    #[test]
    fn test_short_lists_are_complete() {
        let info = items(false, false).info(4);
        assert_eq!(info, ShowItemInfo { visible: 4, hidden: 0, loading: false });
    }

    #[test]
    fn test_long_lists_are_truncated_until_expanded() {
        assert_eq!(items(false, false).info(25).hidden, 15);
        assert_eq!(items(true, false).info(25), ShowItemInfo { visible: 10, hidden: 15, loading: true });
        assert_eq!(items(false, true).info(25), ShowItemInfo { visible: 25, hidden: 0, loading: false });
    }
}
