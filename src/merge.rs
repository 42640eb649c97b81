/// One trimmed, non-empty input line, kept as raw bytes.
pub type Line = Vec<u8>;

/// Splits two sorted sequences into the elements unique to each side.
///
/// Both inputs must already be sorted ascending by byte value. Unsorted input
/// is not detected and yields a well-defined but wrong answer.
pub trait Comparer {
    /// Returns `(only_in_a, only_in_b)`, each in input order.
    fn compare(&self, a: &[Line], b: &[Line]) -> (Vec<Line>, Vec<Line>);
}

/// Byte-wise merge comparer for sorted lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeComparer;

impl Comparer for MergeComparer {
    fn compare(&self, a: &[Line], b: &[Line]) -> (Vec<Line>, Vec<Line>) {
        merge_diff(a, b)
    }
}

/// Single linear pass over `a` and `b`.
///
/// Equal heads cancel one-for-one, so a value present `m` times in `a` and
/// `n` times in `b` is emitted `m - n` times on the `a` side when `m > n`.
pub fn merge_diff<T: Ord + Clone>(a: &[T], b: &[T]) -> (Vec<T>, Vec<T>) {
    let mut only_a = Vec::new();
    let mut only_b = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() || j < b.len() {
        if i >= a.len() {
            only_b.push(b[j].clone());
            j += 1;
            continue;
        }
        if j >= b.len() {
            only_a.push(a[i].clone());
            i += 1;
            continue;
        }

        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                only_a.push(a[i].clone());
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                only_b.push(b[j].clone());
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    (only_a, only_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<Line> {
        items.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn basic_comparison() {
        let a = lines(&["apple", "banana", "cherry", "date", "fig"]);
        let b = lines(&["banana", "date", "grape", "kiwi", "lemon"]);

        let (ua, ub) = MergeComparer.compare(&a, &b);
        assert_eq!(ua, lines(&["apple", "cherry", "fig"]));
        assert_eq!(ub, lines(&["grape", "kiwi", "lemon"]));
    }

    #[test]
    fn empty_inputs() {
        let (ua, ub) = MergeComparer.compare(&[], &[]);
        assert!(ua.is_empty());
        assert!(ub.is_empty());
    }

    #[test]
    fn one_side_empty() {
        let a = lines(&["apple", "banana", "cherry"]);

        let (ua, ub) = MergeComparer.compare(&a, &[]);
        assert_eq!(ua, a);
        assert!(ub.is_empty());

        let (ua, ub) = MergeComparer.compare(&[], &a);
        assert!(ua.is_empty());
        assert_eq!(ub, a);
    }

    #[test]
    fn identical_inputs_cancel() {
        let a = lines(&["apple", "banana", "cherry"]);
        let (ua, ub) = MergeComparer.compare(&a, &a.clone());
        assert!(ua.is_empty());
        assert!(ub.is_empty());
    }

    #[test]
    fn partial_overlap() {
        let a = lines(&["apple", "cherry", "date"]);
        let b = lines(&["banana", "cherry", "date", "fig"]);

        let (ua, ub) = MergeComparer.compare(&a, &b);
        assert_eq!(ua, lines(&["apple"]));
        assert_eq!(ub, lines(&["banana", "fig"]));
    }

    #[test]
    fn duplicates_cancel_pairwise() {
        let a = lines(&["x", "x", "y"]);
        let b = lines(&["x", "y", "y", "y"]);

        let (ua, ub) = MergeComparer.compare(&a, &b);
        assert_eq!(ua, lines(&["x"]));
        assert_eq!(ub, lines(&["y", "y"]));
    }

    #[test]
    fn ordering_is_bytewise() {
        // Uppercase sorts before lowercase, "a" before "a b".
        let a = lines(&["B", "a", "a b"]);
        let b = lines(&["a", "b"]);

        let (ua, ub) = MergeComparer.compare(&a, &b);
        assert_eq!(ua, lines(&["B", "a b"]));
        assert_eq!(ub, lines(&["b"]));
    }

    #[test]
    fn generic_over_ord() {
        let (ua, ub) = merge_diff(&[1, 3, 5, 7], &[2, 3, 7, 8]);
        assert_eq!(ua, [1, 5]);
        assert_eq!(ub, [2, 8]);
    }

    #[test]
    fn non_utf8_bytes_compare_raw() {
        // 0x80 < 0xE9 on disk; decoding either byte would reorder them.
        let a: Vec<Line> = vec![vec![0x80], vec![0xE9]];
        let b: Vec<Line> = vec![vec![0xE9]];

        let (ua, ub) = MergeComparer.compare(&a, &b);
        assert_eq!(ua, [vec![0x80u8]]);
        assert!(ub.is_empty());
    }
}
