///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

/// SQL `LIKE` matching: `%` matches any run of characters, `_` exactly one.
///
/// Greedy two-pointer scan with a single backtrack point at the last `%`,
/// so the cost stays linear in practice.
#[must_use]
pub fn like(text: &str, pattern: &str, mode: TextMode) -> bool {
    let fold = |s: &str| -> Vec<char> {
        match mode {
            TextMode::Cs => s.chars().collect(),
            TextMode::Ci => s.chars().flat_map(char::to_lowercase).collect(),
        }
    };
    let text = fold(text);
    let pattern = fold(pattern);

    let (mut t, mut p) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('%') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some('_') => {
                t += 1;
                p += 1;
            }
            Some(&c) if c == text[t] => {
                t += 1;
                p += 1;
            }
            _ => match backtrack {
                Some((bp, bt)) => {
                    p = bp + 1;
                    t = bt + 1;
                    backtrack = Some((bp, bt + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '%')
}
