mod apply;
mod check;
mod fields;

pub use apply::apply_filter;
pub use check::check_filter;
pub use fields::list_fields;
