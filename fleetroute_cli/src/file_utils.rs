use std::path::Path;

use serde::Serialize;

pub fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<(), anyhow::Error> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, serde_json::to_string_pretty(value)?)?;

    Ok(())
}
