pub mod fields;
pub mod gate;
pub mod handler;
pub mod registry;

pub use fields::{FieldsMap, SuccessCheck};
pub use gate::Gate;
pub use handler::{mask_phone_number, SendResult, SmsHandler};
pub use registry::HandlerRegistry;
