//! Ordering of map entries.

use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

use crate::settings::SortBy;
use crate::vault::FileEntry;

/// Stable sort by the configured key. Timestamp orders put the newest first.
pub fn sort_files(files: &mut [&FileEntry], sort_by: SortBy) {
    match sort_by {
        SortBy::Modified => files.sort_by(|a, b| b.modified_at.cmp(&a.modified_at)),
        SortBy::Created => files.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Name => {
            let mut collator = name_collator();
            files.sort_by(|a, b| collate_names(&mut collator, &a.basename, &b.basename));
        }
    }
}

/// Human ordering of names under the Unicode root collation: symbols before
/// digits before letters, accents secondary to base letters. Names equal
/// under collation are ordered by case, lowercase first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collate_names(&mut name_collator(), a, b)
}

// Punctuation is significant, as in ICU's default non-ignorable ordering.
fn name_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, false)
}

fn collate_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator
        .collate(a, b)
        .then_with(|| {
            a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("apple", "Banana", Ordering::Less)]
    #[case("Zebra", "apple", Ordering::Greater)]
    #[case("a", "A", Ordering::Less)]
    #[case("same", "same", Ordering::Equal)]
    #[case("Яблоко", "арбуз", Ordering::Greater)]
    #[case("арбуз", "Банан", Ordering::Less)]
    #[case("ёлка", "яблоко", Ordering::Less)]
    #[case("ёлка", "еда", Ordering::Greater)]
    #[case("Éclair", "zebra", Ordering::Less)]
    #[case("eclair", "Éclair", Ordering::Less)]
    #[case("~draft", "alpha", Ordering::Less)]
    #[case("2024 plan", "alpha", Ordering::Less)]
    fn test_compare_names(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare_names(a, b), expected);
        assert_eq!(compare_names(b, a), expected.reverse());
    }

    #[test]
    fn test_sort_by_name_is_stable() {
        let files = [
            FileEntry::new("b/Note.md", 0, 0),
            FileEntry::new("a/Note.md", 0, 0),
            FileEntry::new("Ёж.md", 0, 0),
        ];
        let mut refs: Vec<&FileEntry> = files.iter().collect();

        sort_files(&mut refs, SortBy::Name);
        let order: Vec<_> = refs.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(order, vec!["b/Note.md", "a/Note.md", "Ёж.md"]);
    }
}
