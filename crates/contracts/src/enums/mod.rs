pub mod category;
pub mod customer_segment;
pub mod payment_method;
pub mod product_name;

pub use category::Category;
pub use customer_segment::CustomerSegment;
pub use payment_method::PaymentMethod;
pub use product_name::ProductName;
