pub mod hmac;

pub use hmac::HmacTokenDecoder;
