pub mod palindrome;

pub use palindrome::{is_palindrome, is_palindrome_letters_only, is_palindrome_trimming};
