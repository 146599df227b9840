use std::fmt::{Display, Write};

/// Renders each element with `Display` and separates them with `delimiter`.
///
/// Everything is written into one growable buffer, so the total work is
/// proportional to the output length. An empty sequence gives `""`.
///
/// ```
/// use perf_guide::join;
///
/// assert_eq!(join(&[1, 2, 3], ","), "1,2,3");
/// ```
pub fn join<T: Display>(sequence: &[T], delimiter: &str) -> String {
    let mut out = String::with_capacity(sequence.len() * (delimiter.len() + 1));

    for (i, item) in sequence.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        // fmt::Write for String is infallible
        let _ = write!(out, "{}", item);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn numbers_with_comma() {
        assert_eq!(join(&[1, 2, 3], ","), "1,2,3");
    }

    #[test]
    fn empty_sequence() {
        let empty: [i32; 0] = [];
        assert_eq!(join(&empty, ","), "");
    }

    #[test]
    fn single_element_has_no_delimiter() {
        assert_eq!(join(&["solo"], ", "), "solo");
    }

    #[test]
    fn multi_char_and_empty_delimiter() {
        assert_eq!(join(&['a', 'b', 'c'], " -> "), "a -> b -> c");
        assert_eq!(join(&[1.5, 2.25], ""), "1.52.25");
    }

    #[test]
    fn agrees_with_itertools() {
        use itertools::Itertools;

        let words = ["the", "quick", "brown", "fox"];
        assert_eq!(join(&words, " "), words.iter().join(" "));
    }

    proptest! {
        #[test]
        fn splits_back_into_elements(
            items in prop::collection::vec("[a-z0-9]{0,8}", 1..20),
            delimiter in "[,;|]{1,3}",
        ) {
            let joined = join(&items, &delimiter);
            let parts: Vec<&str> = joined.split(delimiter.as_str()).collect();
            prop_assert_eq!(parts, items.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
