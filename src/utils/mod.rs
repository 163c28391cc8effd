pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod timezone;

pub(crate) use date::format_date;
pub(crate) use debug::{debug_enabled, debug_log, set_debug};
pub(crate) use timezone::Timezone;
