/// Returns true if `s` reads the same reversed, character for character.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().rev().eq(s.chars())
}

/// Strips matching outer characters until at most one remains. Stops at the
/// first mismatch.
pub fn is_palindrome_trimming(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let mut rest = chars.as_slice();
    while rest.len() > 1 {
        if rest[0] != rest[rest.len() - 1] {
            return false;
        }
        rest = &rest[1..rest.len() - 1];
    }
    true
}

/// Palindrome check that ignores everything but letters, and ignores case.
///
/// Two cursors walk inward from either end, each skipping non-alphabetic
/// characters before the pair is compared. A string without letters counts as
/// a palindrome.
///
/// # Examples
///
/// ```
/// use linear_order::string::is_palindrome_letters_only;
///
/// assert!(is_palindrome_letters_only("A man, a plan, a canal: Panama!"));
/// assert!(!is_palindrome_letters_only("Not a palindrome"));
/// ```
pub fn is_palindrome_letters_only(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return true;
    }

    let mut i = 0;
    let mut j = chars.len() - 1;
    while i < j {
        if !chars[i].is_alphabetic() {
            i += 1;
            continue;
        }
        if !chars[j].is_alphabetic() {
            j -= 1;
            continue;
        }
        if !chars[i].to_lowercase().eq(chars[j].to_lowercase()) {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}
