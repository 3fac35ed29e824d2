pub mod event_sink;
pub mod gateway;
pub mod korapay;
pub mod paystack;
pub mod reference;

pub use event_sink::{EventSink, MemoryEventSink, TracingEventSink};
pub use gateway::{gateway_from_config, PaymentGateway};
pub use korapay::KoraPayClient;
pub use paystack::PaystackClient;
pub use reference::generate_reference;
