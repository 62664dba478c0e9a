
pub(super) use crate::tools::text_content as text_of;
