/// Wraps a rendered formula into parentheses, unless this is not needed.
///
/// The string is returned unchanged if it is empty, if it is a bare symbol name (only alphabetic characters),
/// or if it is already enclosed by a pair of parentheses that spans the whole string.
/// Applying this function twice gives the same result as applying it once.
///
/// # Example
///
/// ```
/// use entailment_rs::parenthesize;
///
/// assert_eq!("rain", parenthesize("rain"));
/// assert_eq!("(rain => wet)", parenthesize("rain => wet"));
/// assert_eq!("(rain => wet)", parenthesize("(rain => wet)"));
/// assert_eq!("((a) ∨ (b))", parenthesize("(a) ∨ (b)"));
/// ```
#[must_use]
pub fn parenthesize(s: &str) -> String {
    if s.is_empty() || s.chars().all(char::is_alphabetic) || is_enclosed(s) {
        s.to_string()
    } else {
        format!("({s})")
    }
}

fn is_enclosed(s: &str) -> bool {
    s.len() >= 2 && s.starts_with('(') && s.ends_with(')') && is_balanced(&s[1..s.len() - 1])
}

fn is_balanced(s: &str) -> bool {
    let mut count = 0_usize;
    for c in s.chars() {
        match c {
            '(' => count += 1,
            ')' => {
                if count == 0 {
                    return false;
                }
                count -= 1;
            }
            _ => {}
        }
    }
    count == 0
}
