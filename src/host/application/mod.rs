pub mod entity_resolver;
pub mod interface_translator;
pub mod macro_codec;
pub mod service;
