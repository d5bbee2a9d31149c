mod search_name;

pub use dirscout_shared_kernel::value_objects::*;
pub use search_name::SearchName;
