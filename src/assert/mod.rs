// Assertion module

pub mod comparator;
pub mod diff;
pub mod entry;

pub use comparator::{
    AssertShape, Comparison, JsonComparator, compare, equal_mappings, equal_sequences,
    equal_values,
};
pub use diff::json_diff;
pub use entry::{
    Asserter, Outcome, assert_arrays_equal, assert_equal, assert_objects_equal,
    check_arrays_equal, check_equal, check_objects_equal,
};
