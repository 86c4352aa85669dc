mod format;
mod session;

pub(crate) use session::{
    SessionTableOptions, output_session_json, output_single_session_json, print_session_table,
};
