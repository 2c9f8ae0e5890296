use strsim::generic_levenshtein;

/// Borrowed run of characters that `strsim` can iterate without copying.
struct Chars<'a>(&'a [char]);

impl<'a, 'b> IntoIterator for &'b Chars<'a> {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Best similarity between the shorter string and any equal-length character
/// window of the longer one, as a whole number in 0..=99. Identical alignment
/// is the caller's exact-match case, so it is never reported here.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let len = short.len();
    if len == 0 {
        return 0;
    }

    let short = Chars(&short);
    let mut best = len;
    for window in long.windows(len) {
        best = best.min(generic_levenshtein(&short, &Chars(window)));
        if best == 0 {
            break;
        }
    }

    ((100 * (len - best) / len) as u8).min(99)
}
