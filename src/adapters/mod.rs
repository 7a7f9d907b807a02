// Adapters layer: link dispatch to the host and quote export formats.

pub mod dispatch;
pub mod export;
