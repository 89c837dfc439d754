use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

/// Tallies of the comparisons recorded by a [`ComparisonCounter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    pub equal: u64,
    pub less_than: u64,
}

/// Records value comparisons made through it.
///
/// The counter is an explicit context object: values built with
/// [`ComparisonCounter::wrap`] borrow it, and every ordering comparison
/// between them is recorded here. Separate counters never share tallies, so
/// independent trials cannot disturb each other.
///
/// # Examples
///
/// ```
/// use linear_order::counting::ComparisonCounter;
///
/// let counter = ComparisonCounter::new();
/// let a = counter.wrap(3);
/// let b = counter.wrap(7);
/// assert!(a.less_than(&b));
/// assert_eq!(counter.report().less_than, 1);
///
/// counter.reset();
/// assert_eq!(counter.report().less_than, 0);
/// ```
#[derive(Debug, Default)]
pub struct ComparisonCounter {
    equal: Cell<u64>,
    less_than: Cell<u64>,
}

impl ComparisonCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every tally.
    pub fn reset(&self) {
        self.equal.set(0);
        self.less_than.set(0);
    }

    /// Reads the current tallies without clearing them.
    pub fn report(&self) -> ComparisonReport {
        ComparisonReport {
            equal: self.equal.get(),
            less_than: self.less_than.get(),
        }
    }

    /// Records one less-than comparison and returns `a < b`.
    pub fn is_less<T: Ord + ?Sized>(&self, a: &T, b: &T) -> bool {
        bump(&self.less_than);
        a < b
    }

    /// Records one equality comparison and returns `a == b`.
    pub fn is_equal<T: Eq + ?Sized>(&self, a: &T, b: &T) -> bool {
        bump(&self.equal);
        a == b
    }

    /// Three-way comparison for comparator-driven sorts. Each call is one
    /// ordering evaluation and is recorded as a single less-than.
    pub fn compare(&self, a: &CountedValue<'_>, b: &CountedValue<'_>) -> Ordering {
        bump(&self.less_than);
        a.value.cmp(&b.value)
    }

    pub fn wrap(&self, value: i64) -> CountedValue<'_> {
        CountedValue {
            value,
            counter: self,
        }
    }

    pub fn wrap_all<I>(&self, values: I) -> Vec<CountedValue<'_>>
    where
        I: IntoIterator<Item = i64>,
    {
        values.into_iter().map(|value| self.wrap(value)).collect()
    }
}

fn bump(cell: &Cell<u64>) {
    cell.set(cell.get() + 1);
}

/// An integer whose comparisons are recorded by the counter it was wrapped by.
///
/// Only [`CountedValue::less_than`] and [`CountedValue::equals`] are counted.
/// The `PartialEq` impl compares raw values silently, so results can be
/// checked without disturbing a measurement.
#[derive(Clone, Copy)]
pub struct CountedValue<'c> {
    value: i64,
    counter: &'c ComparisonCounter,
}

impl<'c> CountedValue<'c> {
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Counted `self < other`.
    pub fn less_than(&self, other: &Self) -> bool {
        self.counter.is_less(&self.value, &other.value)
    }

    /// Counted `self == other`.
    pub fn equals(&self, other: &Self) -> bool {
        self.counter.is_equal(&self.value, &other.value)
    }
}

impl PartialEq for CountedValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for CountedValue<'_> {}

impl fmt::Debug for CountedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountedValue({})", self.value)
    }
}
