use serde::Serialize;

use crate::error::Result;

pub fn render_json<T: Serialize>(view: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(view)?;
    out.push('\n');
    Ok(out)
}
