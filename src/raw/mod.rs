mod arena;
mod entry;
mod handle;
mod raw_long_keyed_map;

pub(crate) use handle::Handle;
pub(crate) use raw_long_keyed_map::RawLongKeyedMap;
