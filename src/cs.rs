pub mod counting;
pub mod sort;
pub mod string;

// Re-export all modules
pub use counting::*;
pub use sort::*;
pub use string::*;
