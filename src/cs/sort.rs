pub mod counting_sort;
pub mod linear_median;
pub mod partition;

pub use counting_sort::{counting_sort, counting_sort_improved};
pub use linear_median::{linear_median, linear_median_by, linear_median_with_rng};
pub use partition::{partition, partition_by};
