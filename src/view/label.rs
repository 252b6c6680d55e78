/// `"1 Work"`, `"3 Works"`, `"0 Types"`.
pub fn label_number(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_number() {
        assert_eq!(label_number(1, "Work", "Works"), "1 Work");
        assert_eq!(label_number(3, "Work", "Works"), "3 Works");
        assert_eq!(label_number(0, "Type", "Types"), "0 Types");
    }

    #[test]
    fn test_compound_labels_are_used_verbatim() {
        assert_eq!(label_number(1, "Greek Work", "Greek Works"), "1 Greek Work");
        assert_eq!(label_number(2, "Greek Work", "Greek Works"), "2 Greek Works");
        assert_eq!(label_number(12, "Analysis", "Analyses"), "12 Analyses");
    }
}
